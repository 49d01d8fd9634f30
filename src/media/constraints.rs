//! Constraints of a media acquisition request.

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Kinds of media requested from a user.
///
/// Any omitted field defaults to being requested.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault,
)]
#[serde(default)]
pub struct ConstraintsRequest {
    /// Whether a video track is requested.
    #[default(true)]
    pub video: bool,

    /// Whether an audio track is requested.
    #[default(true)]
    pub audio: bool,
}

impl ConstraintsRequest {
    /// Creates a new [`ConstraintsRequest`].
    #[inline]
    pub fn new(video: bool, audio: bool) -> Self {
        Self { video, audio }
    }
}
