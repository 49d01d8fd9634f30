use media_access::{conf, media::detect, CapabilitySnapshot, LegacyApi};

use crate::utils::FakeEnvironment;

#[test]
fn reports_nothing_without_navigator() {
    let env = FakeEnvironment::default()
        .with_standard(Ok(()))
        .with_legacy(LegacyApi::Webkit, Ok(()))
        .with_location("https:", "localhost");

    let caps = detect(&env, &conf::Media::default());

    assert_eq!(caps, CapabilitySnapshot::default());
    assert!(!caps.is_supported());
    assert_eq!(caps.legacy_api(), None);
}

#[test]
fn reports_standard_api() {
    let env = FakeEnvironment::browser().with_standard(Ok(()));

    let caps = detect(&env, &conf::Media::default());

    assert!(caps.has_standard_api);
    assert!(!caps.has_legacy_api);
    assert!(caps.is_secure_context);
    assert!(!caps.is_localhost);
    assert!(caps.is_supported());
}

#[test]
fn legacy_presence_for_every_combination() {
    for mask in 0..16_u8 {
        let mut env = FakeEnvironment::browser();
        let mut present = Vec::new();
        for (i, api) in LegacyApi::ALL.iter().enumerate() {
            if mask & (1 << i) != 0 {
                env = env.with_legacy(*api, Ok(()));
                present.push(*api);
            }
        }

        let caps = detect(&env, &conf::Media::default());

        assert_eq!(
            caps.has_legacy_api,
            !present.is_empty(),
            "mask {}",
            mask,
        );
        assert_eq!(
            caps.legacy_api(),
            present.first().copied(),
            "mask {}",
            mask,
        );
        assert!(!caps.has_standard_api);
    }
}

#[test]
fn detects_localhost_by_configured_hosts() {
    let conf = conf::Media::default();
    for host in &["localhost", "127.0.0.1"] {
        let env = FakeEnvironment::browser()
            .insecure()
            .with_location("http:", host);

        let caps = detect(&env, &conf);

        assert!(caps.is_localhost, "{}", host);
        assert!(!caps.is_secure_context);
    }

    let conf = conf::Media {
        localhost_hosts: vec!["dev.local".into()],
        ..conf::Media::default()
    };
    let env = FakeEnvironment::browser().with_location("http:", "localhost");
    assert!(!detect(&env, &conf).is_localhost);

    let env = FakeEnvironment::browser().with_location("http:", "dev.local");
    assert!(detect(&env, &conf).is_localhost);
}

#[test]
fn manager_detects_unsupported_host() {
    let (manager, _) = crate::manager(FakeEnvironment::browser());
    let first = manager.detect();
    let second = manager.detect();

    assert_eq!(first, second);
    assert!(!first.is_supported());
}
