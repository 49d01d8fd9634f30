//! [`Environment`] reading the real browser globals.

use async_trait::async_trait;
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as sys;

use crate::{
    media::{ConstraintsRequest, InputDeviceInfo, MediaKind},
    platform::{
        Environment, Error, LegacyApi, Location, NavigatorInfo, ScreenInfo,
        ViewportSize,
    },
    utils::get_property_by_name,
};

use super::{legacy, MediaStreamTrack};

/// [`Environment`] backed by `window` and `navigator` of the current browser
/// context.
///
/// Every query reads the globals anew.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnvironment;

impl BrowserEnvironment {
    /// Returns [`sys::Navigator`], if the host has a `window` context.
    fn navigator() -> Option<sys::Navigator> {
        sys::window().map(|w| w.navigator())
    }

    /// Returns [`sys::MediaDevices`] if it exposes a `getUserMedia()`
    /// function.
    fn media_devices() -> Option<sys::MediaDevices> {
        let devices = get_property_by_name(
            &Self::navigator()?,
            "mediaDevices",
            defined,
        )?;
        get_property_by_name(&devices, "getUserMedia", |f| {
            f.dyn_into::<js_sys::Function>().ok()
        })?;
        Some(devices.unchecked_into())
    }

    /// Returns the function implementing the provided [`LegacyApi`], if any.
    fn legacy_function(
        navigator: &sys::Navigator,
        api: LegacyApi,
    ) -> Option<js_sys::Function> {
        get_property_by_name(navigator, api.property_name(), |f| {
            f.dyn_into::<js_sys::Function>().ok()
        })
    }
}

/// Filters out `undefined` and `null` values.
fn defined(val: JsValue) -> Option<JsValue> {
    if val.is_undefined() || val.is_null() {
        None
    } else {
        Some(val)
    }
}

/// Error reported when the requested API disappears between detection and
/// acquisition.
fn not_supported(what: &'static str) -> Error {
    Error::new("NotSupportedError", format!("{} is not available", what))
}

impl From<ConstraintsRequest> for sys::MediaStreamConstraints {
    fn from(caps: ConstraintsRequest) -> Self {
        let mut sys_caps = Self::new();
        sys_caps
            .audio(&JsValue::from(caps.audio))
            .video(&JsValue::from(caps.video));
        sys_caps
    }
}

/// Collects the tracks of the provided [`sys::MediaStream`].
///
/// Tracks of unknown kinds are stopped and skipped.
fn tracks_of(stream: &sys::MediaStream) -> Vec<MediaStreamTrack> {
    stream
        .get_tracks()
        .iter()
        .map(|t| t.unchecked_into::<sys::MediaStreamTrack>())
        .filter_map(|track| {
            let wrapped = MediaStreamTrack::new(track.clone());
            if wrapped.is_none() {
                log::warn!("Stopping track of unknown kind `{}`", track.kind());
                track.stop();
            }
            wrapped
        })
        .collect()
}

/// Converts the provided [`sys::MediaDeviceInfo`] if it describes an input
/// device.
fn input_device_info(
    info: &sys::MediaDeviceInfo,
) -> Option<InputDeviceInfo> {
    let kind = match info.kind() {
        sys::MediaDeviceKind::Audioinput => MediaKind::Audio,
        sys::MediaDeviceKind::Videoinput => MediaKind::Video,
        _ => return None,
    };
    Some(InputDeviceInfo::new(
        info.device_id(),
        kind,
        info.label(),
        info.group_id(),
    ))
}

#[async_trait(?Send)]
impl Environment for BrowserEnvironment {
    type Track = MediaStreamTrack;

    fn has_navigator(&self) -> bool {
        Self::navigator().is_some()
    }

    fn has_standard_api(&self) -> bool {
        Self::media_devices().is_some()
    }

    fn has_legacy_api(&self, api: LegacyApi) -> bool {
        Self::navigator()
            .and_then(|n| Self::legacy_function(&n, api))
            .is_some()
    }

    fn is_secure_context(&self) -> bool {
        sys::window().map_or(false, |w| w.is_secure_context())
    }

    fn has_global(&self, name: &str) -> bool {
        sys::window()
            .and_then(|w| get_property_by_name(&w, name, defined))
            .is_some()
    }

    fn location(&self) -> Option<Location> {
        let location = sys::window()?.location();
        Some(Location {
            protocol: location.protocol().unwrap_or_default(),
            hostname: location.hostname().unwrap_or_default(),
            port: location.port().unwrap_or_default(),
            pathname: location.pathname().unwrap_or_default(),
        })
    }

    fn navigator_info(&self) -> Option<NavigatorInfo> {
        let navigator = Self::navigator()?;
        Some(NavigatorInfo {
            user_agent: navigator.user_agent().unwrap_or_default(),
            platform: navigator.platform().unwrap_or_default(),
            language: navigator.language(),
            cookies_enabled: get_property_by_name(
                &navigator,
                "cookieEnabled",
                |v| v.as_bool(),
            )
            .unwrap_or(false),
            java_enabled: get_property_by_name(
                &navigator,
                "javaEnabled",
                |f| f.dyn_into::<js_sys::Function>().ok(),
            )
            .and_then(|f| f.call0(&navigator).ok())
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        })
    }

    fn screen(&self) -> Option<ScreenInfo> {
        let screen = sys::window()?.screen().ok()?;
        Some(ScreenInfo {
            width: screen.width().unwrap_or_default(),
            height: screen.height().unwrap_or_default(),
            color_depth: screen.color_depth().unwrap_or_default(),
        })
    }

    fn viewport(&self) -> Option<ViewportSize> {
        let window = sys::window()?;
        #[allow(clippy::cast_possible_truncation)]
        let px = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).map_or(0, |v| v as i32)
        };
        Some(ViewportSize {
            width: px(window.inner_width()),
            height: px(window.inner_height()),
        })
    }

    async fn get_user_media(
        &self,
        caps: ConstraintsRequest,
    ) -> Result<Vec<MediaStreamTrack>, Error> {
        let devices = Self::media_devices()
            .ok_or_else(|| not_supported("navigator.mediaDevices"))?;
        let promise = devices
            .get_user_media_with_constraints(&caps.into())
            .map_err(Error::from)?;
        let stream = JsFuture::from(promise)
            .await
            .map(sys::MediaStream::from)
            .map_err(Error::from)?;
        Ok(tracks_of(&stream))
    }

    async fn legacy_get_user_media(
        &self,
        api: LegacyApi,
        caps: ConstraintsRequest,
    ) -> Result<Vec<MediaStreamTrack>, Error> {
        let navigator =
            Self::navigator().ok_or_else(|| not_supported("navigator"))?;
        let func = Self::legacy_function(&navigator, api)
            .ok_or_else(|| not_supported(api.property_name()))?;
        let this: &JsValue = navigator.as_ref();
        let caps = JsValue::from(sys::MediaStreamConstraints::from(caps));

        let stream = legacy::get_user_media(&func, this, &caps).await?;
        Ok(tracks_of(&stream))
    }

    async fn enumerate_devices(&self) -> Result<Vec<InputDeviceInfo>, Error> {
        let devices = Self::navigator()
            .ok_or_else(|| not_supported("navigator"))?
            .media_devices()
            .map_err(Error::from)?;
        let infos = JsFuture::from(
            devices.enumerate_devices().map_err(Error::from)?,
        )
        .await
        .map_err(Error::from)?;

        Ok(js_sys::Array::from(&infos)
            .iter()
            .map(sys::MediaDeviceInfo::from)
            .filter_map(|info| input_device_info(&info))
            .collect())
    }
}
