//! Diagnostics of WebRTC and media device support of the host.

use serde::Serialize;
use tracerr::Traced;

use crate::{
    conf,
    media::{self, CapabilitySnapshot, ConstraintsRequest, MediaAccessError},
    platform::{
        Environment, LegacyApi, Location, NavigatorInfo, ScreenInfo,
        ViewportSize,
    },
    MediaManager,
};

/// Globals any of which indicates WebRTC peer connections support.
const PEER_CONNECTION_GLOBALS: [&str; 2] =
    ["RTCPeerConnection", "webkitRTCPeerConnection"];

/// Presence of each vendor-prefixed [`LegacyApi`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BrowserPrefixes {
    /// `navigator.webkitGetUserMedia` is present.
    pub webkit: bool,

    /// `navigator.mozGetUserMedia` is present.
    pub moz: bool,

    /// `navigator.msGetUserMedia` is present.
    pub ms: bool,
}

/// Report on media access compatibility of the host.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BrowserCompatibility {
    /// Detected [`CapabilitySnapshot`].
    #[serde(flatten)]
    pub capabilities: CapabilitySnapshot,

    /// Whether the document is served over HTTPS.
    pub is_https: bool,

    /// `navigator.userAgent`, empty if unknown.
    pub user_agent: String,

    /// Protocol of the document URL, empty if unknown.
    pub protocol: String,

    /// Presence of the vendor-prefixed legacy APIs.
    pub prefixes: BrowserPrefixes,
}

/// Presence of the WebRTC globals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WebRtcFeatures {
    /// `RTCPeerConnection` is defined.
    pub has_rtc_peer_connection: bool,

    /// `RTCSessionDescription` is defined.
    pub has_rtc_session_description: bool,

    /// `RTCIceCandidate` is defined.
    pub has_rtc_ice_candidate: bool,
}

/// Detailed information about the host.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EnvironmentInfo {
    /// Information from `navigator`.
    #[serde(flatten)]
    pub navigator: NavigatorInfo,

    /// Screen the document is displayed on.
    pub screen: ScreenInfo,

    /// Viewport of the window.
    pub window: ViewportSize,

    /// Location of the current document.
    pub location: Location,
}

/// Builds [`BrowserCompatibility`] report of the provided [`Environment`].
pub fn browser_compatibility<E>(
    env: &E,
    conf: &conf::Media,
) -> BrowserCompatibility
where
    E: Environment + ?Sized,
{
    let protocol = env.location().map(|l| l.protocol).unwrap_or_default();
    let has_navigator = env.has_navigator();
    let has = |api: LegacyApi| has_navigator && env.has_legacy_api(api);
    BrowserCompatibility {
        capabilities: media::detect(env, conf),
        is_https: protocol == "https:",
        user_agent: env
            .navigator_info()
            .map(|n| n.user_agent)
            .unwrap_or_default(),
        protocol,
        prefixes: BrowserPrefixes {
            webkit: has(LegacyApi::Webkit),
            moz: has(LegacyApi::Moz),
            ms: has(LegacyApi::Ms),
        },
    }
}

/// Logs [`BrowserCompatibility`] report of the provided [`Environment`] and
/// returns it.
pub fn run_browser_test<E>(
    env: &E,
    conf: &conf::Media,
) -> BrowserCompatibility
where
    E: Environment + ?Sized,
{
    let report = browser_compatibility(env, conf);
    let hostname = env.location().map(|l| l.hostname).unwrap_or_default();

    log::info!("=== BROWSER COMPATIBILITY TEST ===");
    log::info!("User Agent: {}", report.user_agent);
    log::info!("Protocol: {}", report.protocol);
    log::info!("Hostname: {}", hostname);
    log::info!(
        "Standard Media Devices API: {}",
        report.capabilities.has_standard_api,
    );
    log::info!("Legacy getUserMedia: {}", report.capabilities.has_legacy_api);
    log::info!("HTTPS: {}", report.is_https);
    log::info!("Secure context: {}", report.capabilities.is_secure_context);
    log::info!("Localhost: {}", report.capabilities.is_localhost);
    log::info!("WebRTC available: {}", is_webrtc_available(env));
    log::info!("WebRTC Features: {:?}", webrtc_features(env));
    log::info!("Browser Prefixes: {:?}", report.prefixes);

    report
}

/// Indicates whether WebRTC peer connections are available at all.
pub fn is_webrtc_available<E: Environment + ?Sized>(env: &E) -> bool {
    env.has_navigator()
        && PEER_CONNECTION_GLOBALS.iter().any(|g| env.has_global(g))
}

/// Detects [`WebRtcFeatures`] of the provided [`Environment`].
pub fn webrtc_features<E: Environment + ?Sized>(env: &E) -> WebRtcFeatures {
    let has = |name| env.has_navigator() && env.has_global(name);
    WebRtcFeatures {
        has_rtc_peer_connection: has("RTCPeerConnection"),
        has_rtc_session_description: has("RTCSessionDescription"),
        has_rtc_ice_candidate: has("RTCIceCandidate"),
    }
}

/// Returns [`EnvironmentInfo`] of the provided [`Environment`], if it has a
/// `navigator`/`window` context.
pub fn environment_info<E>(env: &E) -> Option<EnvironmentInfo>
where
    E: Environment + ?Sized,
{
    if !env.has_navigator() {
        return None;
    }
    Some(EnvironmentInfo {
        navigator: env.navigator_info().unwrap_or_default(),
        screen: env.screen().unwrap_or_default(),
        window: env.viewport().unwrap_or_default(),
        location: env.location().unwrap_or_default(),
    })
}

/// Checks that media devices can actually be acquired by requesting both
/// audio and video and releasing them right away.
///
/// # Errors
///
/// With [`MediaAccessError`] of the failed acquisition.
pub async fn test_media_access<E: Environment>(
    manager: &MediaManager<E>,
) -> Result<(), Traced<MediaAccessError>> {
    log::info!("=== MEDIA ACCESS TEST ===");

    match manager.acquire(ConstraintsRequest::new(true, true)).await {
        Ok(mut stream) => {
            log::info!(
                "Media access succeeded with {} tracks",
                stream.tracks().len(),
            );
            stream.release();
            Ok(())
        }
        Err(e) => {
            log::error!("Media access test failed: {}", e);
            Err(e)
        }
    }
}
