//! Streams of acquired media tracks.

use crate::platform::MediaTrack;

/// Live handle owning the [`MediaTrack`]s returned by a single acquisition.
///
/// Owned exclusively by the caller who acquired it. Tracks are stopped either
/// by [`release()`] or once this [`AcquiredStream`] is dropped.
#[derive(Debug)]
pub struct AcquiredStream<T: MediaTrack> {
    tracks: Vec<T>,
}

impl<T: MediaTrack> AcquiredStream<T> {
    /// Wraps the provided freshly acquired `tracks`.
    #[inline]
    pub fn new(tracks: Vec<T>) -> Self {
        Self { tracks }
    }

    /// Returns tracks held by this [`AcquiredStream`].
    ///
    /// Empty once this [`AcquiredStream`] is released.
    #[inline]
    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    /// Indicates whether this [`AcquiredStream`] has been released (or
    /// hasn't held any tracks at all).
    #[inline]
    pub fn is_released(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Stops every track of this [`AcquiredStream`].
    ///
    /// Each track is stopped once: subsequent calls are no-op.
    pub fn release(&mut self) {
        for track in self.tracks.drain(..) {
            log::debug!("Stopping {} track {}", track.kind(), track.id());
            track.stop();
        }
    }
}

impl<T: MediaTrack> Drop for AcquiredStream<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Releases the provided [`AcquiredStream`], if any.
pub fn release<T: MediaTrack>(stream: Option<&mut AcquiredStream<T>>) {
    if let Some(stream) = stream {
        stream.release();
    }
}
