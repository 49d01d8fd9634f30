//! Media access negotiation: capability detection, acquisition and release
//! of camera/microphone streams.

pub mod capabilities;
mod constraints;
mod device_info;
mod error;
mod manager;
mod stream;

use derive_more::Display;
use serde::Serialize;

#[doc(inline)]
pub use self::{
    capabilities::{detect, CapabilitySnapshot},
    constraints::ConstraintsRequest,
    device_info::InputDeviceInfo,
    error::{MediaAccessError, MediaAccessErrorKind},
    manager::MediaManager,
    stream::{release, AcquiredStream},
};

/// [MediaStreamTrack.kind][1] representation.
///
/// [1]: https://w3.org/TR/mediacapture-streams/#dom-mediastreamtrack-kind
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio track.
    #[display(fmt = "audio")]
    Audio,

    /// Video track.
    #[display(fmt = "video")]
    Video,
}

impl MediaKind {
    /// Parses [MediaStreamTrack.kind][1] value, returning [`None`] for
    /// unknown kinds.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams/#dom-mediastreamtrack-kind
    pub fn from_track_kind(kind: &str) -> Option<Self> {
        match kind {
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}
