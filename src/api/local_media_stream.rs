//! Acquired local media exposed to JS side.

use wasm_bindgen::prelude::*;

use crate::{media::AcquiredStream, platform::wasm::MediaStreamTrack};

/// Camera/microphone tracks acquired by [`MediaAccess.acquire()`].
///
/// Must be released once not needed anymore, otherwise devices stay busy
/// until this object is freed.
///
/// [`MediaAccess.acquire()`]: super::MediaAccess::acquire
#[wasm_bindgen]
#[derive(Debug)]
pub struct LocalMediaStream(AcquiredStream<MediaStreamTrack>);

impl From<AcquiredStream<MediaStreamTrack>> for LocalMediaStream {
    #[inline]
    fn from(stream: AcquiredStream<MediaStreamTrack>) -> Self {
        Self(stream)
    }
}

#[wasm_bindgen]
impl LocalMediaStream {
    /// Builds a new [MediaStream][1] of the held tracks, suitable for
    /// `HTMLMediaElement.srcObject`.
    ///
    /// # Errors
    ///
    /// If the browser fails to construct a [MediaStream][1].
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams/#mediastream
    pub fn media_stream(&self) -> Result<web_sys::MediaStream, JsValue> {
        let stream = web_sys::MediaStream::new()?;
        for track in self.0.tracks() {
            stream.add_track(track.as_ref());
        }
        Ok(stream)
    }

    /// Stops all the held tracks. Subsequent calls are no-op.
    pub fn release(&mut self) {
        self.0.release();
    }

    /// Indicates whether this [`LocalMediaStream`] has been released.
    pub fn is_released(&self) -> bool {
        self.0.is_released()
    }
}
