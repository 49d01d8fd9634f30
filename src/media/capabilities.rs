//! Detection of media access capabilities of the host.

use serde::Serialize;

use crate::{
    conf,
    platform::{Environment, LegacyApi},
};

/// Snapshot of media access capabilities of the host.
///
/// Computed fresh on each [`detect()`] call, since the host may change
/// between calls (permissions being revoked, for example).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CapabilitySnapshot {
    /// Whether [MediaDevices.getUserMedia()][1] is available.
    ///
    /// [1]: https://tinyurl.com/w3-streams#dom-mediadevices-getusermedia
    pub has_standard_api: bool,

    /// Whether any [`LegacyApi`] is available.
    pub has_legacy_api: bool,

    /// Whether the document is a secure context.
    pub is_secure_context: bool,

    /// Whether the document is served from a local loopback host.
    pub is_localhost: bool,

    #[serde(skip)]
    legacy_api: Option<LegacyApi>,
}

impl CapabilitySnapshot {
    /// Returns [`LegacyApi`] that acquisition would fall back to.
    #[inline]
    pub fn legacy_api(&self) -> Option<LegacyApi> {
        self.legacy_api
    }

    /// Indicates whether any media acquisition path exists.
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.has_standard_api || self.has_legacy_api
    }
}

/// Inspects the provided [`Environment`] and reports its
/// [`CapabilitySnapshot`].
///
/// Never fails: a host without any `navigator`/`window` context reports
/// nothing as available.
pub fn detect<E>(env: &E, conf: &conf::Media) -> CapabilitySnapshot
where
    E: Environment + ?Sized,
{
    if !env.has_navigator() {
        return CapabilitySnapshot::default();
    }
    let legacy_api = LegacyApi::select(env);
    CapabilitySnapshot {
        has_standard_api: env.has_standard_api(),
        has_legacy_api: legacy_api.is_some(),
        is_secure_context: env.is_secure_context(),
        is_localhost: env
            .location()
            .map_or(false, |l| conf.is_localhost(&l.hostname)),
        legacy_api,
    }
}
