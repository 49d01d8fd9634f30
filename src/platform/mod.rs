//! Platform abstraction over the host environment providing media access.
//!
//! The [`Environment`] trait is the only way the rest of the library touches
//! host globals (`navigator`, `window`). In a browser it is implemented by
//! [`wasm::BrowserEnvironment`].

mod error;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use async_trait::async_trait;
use derive_more::Display;
use serde::Serialize;

use crate::media::{ConstraintsRequest, InputDeviceInfo, MediaKind};

#[doc(inline)]
pub use self::error::Error;

/// Legacy callback-style variants of [getUserMedia()][1].
///
/// Declared in the priority order they are tried in.
///
/// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum LegacyApi {
    /// `navigator.getUserMedia`.
    #[display(fmt = "navigator.getUserMedia")]
    Unprefixed,

    /// `navigator.webkitGetUserMedia`.
    #[display(fmt = "navigator.webkitGetUserMedia")]
    Webkit,

    /// `navigator.mozGetUserMedia`.
    #[display(fmt = "navigator.mozGetUserMedia")]
    Moz,

    /// `navigator.msGetUserMedia`.
    #[display(fmt = "navigator.msGetUserMedia")]
    Ms,
}

impl LegacyApi {
    /// All the [`LegacyApi`]s ordered by priority.
    pub const ALL: [Self; 4] =
        [Self::Unprefixed, Self::Webkit, Self::Moz, Self::Ms];

    /// Returns name of the `navigator` property exposing this [`LegacyApi`].
    pub fn property_name(self) -> &'static str {
        match self {
            Self::Unprefixed => "getUserMedia",
            Self::Webkit => "webkitGetUserMedia",
            Self::Moz => "mozGetUserMedia",
            Self::Ms => "msGetUserMedia",
        }
    }

    /// Selects the highest-priority [`LegacyApi`] present in the provided
    /// [`Environment`].
    pub fn select<E: Environment + ?Sized>(env: &E) -> Option<Self> {
        Self::ALL.iter().copied().find(|api| env.has_legacy_api(*api))
    }
}

/// Parts of the [Location][1] of the current document.
///
/// [1]: https://html.spec.whatwg.org/multipage/history.html#location
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Location {
    /// URL scheme with a trailing `:` (`https:`).
    pub protocol: String,

    /// Host name without port.
    pub hostname: String,

    /// Port, empty if it's a default one.
    pub port: String,

    /// Path of the URL.
    pub pathname: String,
}

/// Information exposed by the [Navigator][1] of the current document.
///
/// [1]: https://html.spec.whatwg.org/multipage/system-state.html#navigator
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NavigatorInfo {
    /// `navigator.userAgent`.
    pub user_agent: String,

    /// `navigator.platform`.
    pub platform: String,

    /// `navigator.language`, if any.
    pub language: Option<String>,

    /// `navigator.cookieEnabled`.
    pub cookies_enabled: bool,

    /// Result of `navigator.javaEnabled()`, `false` if it's absent.
    pub java_enabled: bool,
}

/// Parts of the [Screen][1] the current document is displayed on.
///
/// [1]: https://drafts.csswg.org/cssom-view/#the-screen-interface
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ScreenInfo {
    /// `screen.width` in CSS pixels.
    pub width: i32,

    /// `screen.height` in CSS pixels.
    pub height: i32,

    /// `screen.colorDepth` in bits.
    pub color_depth: i32,
}

/// Size of the window viewport (`innerWidth`/`innerHeight`) in CSS pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ViewportSize {
    /// `window.innerWidth`.
    pub width: i32,

    /// `window.innerHeight`.
    pub height: i32,
}

/// Single media track acquired from a media device.
pub trait MediaTrack {
    /// Returns unique identifier of this [`MediaTrack`].
    fn id(&self) -> String;

    /// Returns [`MediaKind`] of this [`MediaTrack`].
    fn kind(&self) -> MediaKind;

    /// Stops this [`MediaTrack`] returning the device to an available state.
    ///
    /// Stopping an already stopped track is allowed.
    fn stop(&self);
}

/// Provider of host capabilities and media APIs.
#[async_trait(?Send)]
pub trait Environment {
    /// Type of [`MediaTrack`]s produced by this [`Environment`].
    type Track: MediaTrack;

    /// Indicates whether the host has a `navigator`/`window` context at all.
    fn has_navigator(&self) -> bool;

    /// Indicates whether [MediaDevices.getUserMedia()][1] is available.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia
    fn has_standard_api(&self) -> bool;

    /// Indicates whether the provided [`LegacyApi`] is available.
    fn has_legacy_api(&self, api: LegacyApi) -> bool;

    /// Indicates whether the current document is a [secure context][1].
    ///
    /// [1]: https://w3.org/TR/secure-contexts
    fn is_secure_context(&self) -> bool;

    /// Indicates whether the provided global (`window` property) is defined.
    fn has_global(&self, name: &str) -> bool;

    /// Returns [`Location`] of the current document, if any.
    fn location(&self) -> Option<Location>;

    /// Returns [`NavigatorInfo`] of the host, if any.
    fn navigator_info(&self) -> Option<NavigatorInfo>;

    /// Returns [`ScreenInfo`] of the host, if any.
    fn screen(&self) -> Option<ScreenInfo>;

    /// Returns [`ViewportSize`] of the host window, if any.
    fn viewport(&self) -> Option<ViewportSize>;

    /// Acquires tracks via [MediaDevices.getUserMedia()][1].
    ///
    /// # Errors
    ///
    /// With the raw [`Error`] the host failed with.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia
    async fn get_user_media(
        &self,
        caps: ConstraintsRequest,
    ) -> Result<Vec<Self::Track>, Error>;

    /// Acquires tracks via the provided callback-style [`LegacyApi`].
    ///
    /// Resolves exactly once, with whichever callback the host fires first.
    ///
    /// # Errors
    ///
    /// With the raw [`Error`] the host failed with.
    async fn legacy_get_user_media(
        &self,
        api: LegacyApi,
        caps: ConstraintsRequest,
    ) -> Result<Vec<Self::Track>, Error>;

    /// Collects information about available media input devices.
    ///
    /// Adapter for [MediaDevices.enumerateDevices()][1].
    ///
    /// # Errors
    ///
    /// With the raw [`Error`] the host failed with.
    ///
    /// [1]: https://tinyurl.com/w3-streams#dom-mediadevices-enumeratedevices
    async fn enumerate_devices(&self) -> Result<Vec<InputDeviceInfo>, Error>;
}
