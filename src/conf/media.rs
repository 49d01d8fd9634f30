//! Media acquisition settings.

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::media::ConstraintsRequest;

/// Media acquisition settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default)]
pub struct Media {
    /// [`ConstraintsRequest`] used when a caller doesn't provide one.
    /// Defaults to requesting both audio and video.
    pub default_constraints: ConstraintsRequest,

    /// Host names which are considered local loopback.
    /// Defaults to `localhost` and `127.0.0.1`.
    #[default(vec!["localhost".into(), "127.0.0.1".into()])]
    pub localhost_hosts: Vec<String>,
}

impl Media {
    /// Indicates whether the provided `hostname` is a local loopback one.
    pub fn is_localhost(&self, hostname: &str) -> bool {
        self.localhost_hosts.iter().any(|h| h == hostname)
    }
}
