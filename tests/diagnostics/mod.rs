use media_access::{
    conf,
    diagnostics::{
        browser_compatibility, environment_info, is_webrtc_available,
        run_browser_test, test_media_access, webrtc_features,
        BrowserPrefixes, WebRtcFeatures,
    },
    platform::Error,
    LegacyApi, MediaAccessErrorKind,
};

use crate::{manager, run, utils::FakeEnvironment};

#[test]
fn reports_compatibility() {
    let env = FakeEnvironment::browser()
        .with_legacy(LegacyApi::Webkit, Ok(()))
        .with_legacy(LegacyApi::Ms, Ok(()));

    let report = browser_compatibility(&env, &conf::Media::default());

    assert!(report.is_https);
    assert_eq!(report.protocol, "https:");
    assert_eq!(report.user_agent, "FakeBrowser/1.0");
    assert!(report.capabilities.has_legacy_api);
    assert!(!report.capabilities.has_standard_api);
    assert_eq!(
        report.prefixes,
        BrowserPrefixes {
            webkit: true,
            moz: false,
            ms: true,
        },
    );
}

#[test]
fn browser_test_returns_report() {
    let env = FakeEnvironment::browser()
        .insecure()
        .with_location("http:", "127.0.0.1");
    let conf = conf::Media::default();

    let report = run_browser_test(&env, &conf);

    assert_eq!(report, browser_compatibility(&env, &conf));
    assert!(!report.is_https);
    assert!(report.capabilities.is_localhost);
}

#[test]
fn empty_report_without_navigator() {
    let env = FakeEnvironment::default().with_legacy(LegacyApi::Moz, Ok(()));

    let report = browser_compatibility(&env, &conf::Media::default());

    assert_eq!(report.prefixes, BrowserPrefixes::default());
    assert!(report.user_agent.is_empty());
    assert!(!report.capabilities.is_supported());
}

#[test]
fn detects_webrtc_by_any_peer_connection_global() {
    assert!(!is_webrtc_available(&FakeEnvironment::browser()));
    assert!(is_webrtc_available(
        &FakeEnvironment::browser().with_global("webkitRTCPeerConnection"),
    ));
    assert!(is_webrtc_available(
        &FakeEnvironment::browser().with_global("RTCPeerConnection"),
    ));
    assert!(!is_webrtc_available(
        &FakeEnvironment::default().with_global("RTCPeerConnection"),
    ));
}

#[test]
fn collects_environment_info() {
    assert_eq!(environment_info(&FakeEnvironment::default()), None);

    let info = environment_info(&FakeEnvironment::browser()).unwrap();
    assert_eq!(info.navigator.language.as_deref(), Some("en-US"));
    assert!(!info.navigator.java_enabled);
    assert_eq!(info.screen.width, 1920);
    assert_eq!(info.screen.color_depth, 24);
    assert_eq!(info.window.height, 720);
    assert_eq!(info.location.pathname, "/dashboard");
}

#[test]
fn detects_webrtc_features() {
    let env = FakeEnvironment::browser()
        .with_global("RTCPeerConnection")
        .with_global("RTCIceCandidate");

    assert_eq!(
        webrtc_features(&env),
        WebRtcFeatures {
            has_rtc_peer_connection: true,
            has_rtc_session_description: false,
            has_rtc_ice_candidate: true,
        },
    );
    assert_eq!(
        webrtc_features(
            &FakeEnvironment::default().with_global("RTCIceCandidate"),
        ),
        WebRtcFeatures::default(),
    );
}

#[test]
fn media_access_test_releases_stream() {
    let (manager, env) =
        manager(FakeEnvironment::browser().with_standard(Ok(())));

    run(test_media_access(&manager)).unwrap();

    assert_eq!(env.stops.get(), 2);
}

#[test]
fn media_access_test_surfaces_failure() {
    let (manager, env) = manager(
        FakeEnvironment::browser()
            .with_standard(Err(Error::new("NotReadableError", "busy")))
            .with_legacy(
                LegacyApi::Moz,
                Err(Error::new("NotAllowedError", "denied")),
            ),
    );

    let err = run(test_media_access(&manager)).unwrap_err().into_inner();

    assert_eq!(err.kind(), MediaAccessErrorKind::PermissionDenied);
    assert_eq!(env.stops.get(), 0);
}
