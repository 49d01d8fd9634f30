use derive_more::AsRef;

use crate::{media::MediaKind, platform::MediaTrack};

/// Wrapper around [MediaStreamTrack][1] received from a
/// [getUserMedia()][2] request.
///
/// [1]: https://w3.org/TR/mediacapture-streams/#mediastreamtrack
/// [2]: https://w3.org/TR/mediacapture-streams/#dom-mediadevices-getusermedia
#[derive(AsRef, Clone, Debug)]
pub struct MediaStreamTrack {
    #[as_ref]
    sys_track: web_sys::MediaStreamTrack,
    kind: MediaKind,
}

impl MediaStreamTrack {
    /// Wraps the provided [MediaStreamTrack][1], returning [`None`] if its
    /// [`kind`][2] is neither `audio` nor `video`.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams/#mediastreamtrack
    /// [2]: https://w3.org/TR/mediacapture-streams/#dom-mediastreamtrack-kind
    pub fn new(sys_track: web_sys::MediaStreamTrack) -> Option<Self> {
        let kind = MediaKind::from_track_kind(&sys_track.kind())?;
        Some(Self { sys_track, kind })
    }

    /// Indicates whether the underlying [MediaStreamTrack][1] is [`ended`][2].
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams/#mediastreamtrack
    /// [2]: https://tinyurl.com/w3-streams#idl-def-MediaStreamTrackState.ended
    pub fn is_ended(&self) -> bool {
        self.sys_track.ready_state() == web_sys::MediaStreamTrackState::Ended
    }
}

impl MediaTrack for MediaStreamTrack {
    #[inline]
    fn id(&self) -> String {
        self.sys_track.id()
    }

    #[inline]
    fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Changes [`readyState`][1] of the underlying [MediaStreamTrack][2] to
    /// [`ended`][3].
    ///
    /// [1]: https://tinyurl.com/w3-streams#dom-mediastreamtrack-readystate
    /// [2]: https://w3.org/TR/mediacapture-streams/#mediastreamtrack
    /// [3]: https://tinyurl.com/w3-streams#idl-def-MediaStreamTrackState.ended
    #[inline]
    fn stop(&self) {
        self.sys_track.stop();
    }
}
