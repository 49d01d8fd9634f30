//! Acquiring camera/microphone streams.

use std::rc::Rc;

use tracerr::Traced;

use crate::{
    conf,
    platform::{self, Environment, LegacyApi},
};

use super::{
    capabilities, AcquiredStream, CapabilitySnapshot, ConstraintsRequest,
    InputDeviceInfo, MediaAccessError, MediaKind,
};

/// Manager negotiating media access with an [`Environment`].
///
/// Keeps no reference to the [`AcquiredStream`]s it returns and coordinates
/// nothing between concurrent acquisitions: the host decides on contention.
#[derive(Debug)]
pub struct MediaManager<E> {
    /// Host providing media APIs.
    env: Rc<E>,

    /// Media acquisition settings.
    conf: conf::Media,
}

impl<E> Clone for MediaManager<E> {
    fn clone(&self) -> Self {
        Self {
            env: Rc::clone(&self.env),
            conf: self.conf.clone(),
        }
    }
}

impl<E: Environment> MediaManager<E> {
    /// Creates a new [`MediaManager`] over the provided [`Environment`].
    pub fn new(env: Rc<E>, conf: conf::Media) -> Self {
        Self { env, conf }
    }

    /// Returns [`Environment`] of this [`MediaManager`].
    #[inline]
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Returns media acquisition settings of this [`MediaManager`].
    #[inline]
    pub fn conf(&self) -> &conf::Media {
        &self.conf
    }

    /// Detects current [`CapabilitySnapshot`] of the [`Environment`].
    #[inline]
    pub fn detect(&self) -> CapabilitySnapshot {
        capabilities::detect(&*self.env, &self.conf)
    }

    /// Indicates whether any media acquisition path exists.
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.detect().is_supported()
    }

    /// Acquires an [`AcquiredStream`] satisfying the provided
    /// [`ConstraintsRequest`].
    ///
    /// Tries the standard API once and, if it's absent or fails, exactly one
    /// [`LegacyApi`] selected by priority. Nothing is retried.
    ///
    /// # Errors
    ///
    /// With [`MediaAccessErrorKind::Unsupported`] if no [`LegacyApi`] is
    /// available after the standard API is absent or fails. The failed
    /// standard API error, if any, is kept as
    /// [`MediaAccessError::fallback_of()`].
    ///
    /// With the normalized legacy API error if the legacy attempt fails. The
    /// preceding standard API error is kept as
    /// [`MediaAccessError::fallback_of()`].
    ///
    /// [`MediaAccessErrorKind::Unsupported`]:
    /// super::MediaAccessErrorKind::Unsupported
    pub async fn acquire(
        &self,
        caps: ConstraintsRequest,
    ) -> Result<AcquiredStream<E::Track>, Traced<MediaAccessError>> {
        let mut standard_err = None;
        if self.env.has_standard_api() {
            match self.env.get_user_media(caps).await {
                Ok(tracks) => return Ok(AcquiredStream::new(tracks)),
                Err(e) => {
                    log::warn!(
                        "Standard getUserMedia failed, trying legacy \
                         method: {}",
                        e,
                    );
                    standard_err = Some(e);
                }
            }
        }

        let api = match LegacyApi::select(&*self.env) {
            Some(api) => api,
            None => {
                let err = MediaAccessError::unsupported()
                    .with_fallback_of(standard_err);
                return Err(tracerr::new!(err));
            }
        };

        self.env
            .legacy_get_user_media(api, caps)
            .await
            .map(AcquiredStream::new)
            .map_err(|e| {
                log::error!("{} also failed: {}", api, e);
                tracerr::new!(
                    MediaAccessError::from(e).with_fallback_of(standard_err)
                )
            })
    }

    /// Acquires an [`AcquiredStream`] with the configured default
    /// [`ConstraintsRequest`].
    ///
    /// # Errors
    ///
    /// Same as [`MediaManager::acquire()`].
    #[inline]
    pub async fn acquire_default(
        &self,
    ) -> Result<AcquiredStream<E::Track>, Traced<MediaAccessError>> {
        self.acquire(self.conf.default_constraints).await
    }

    /// Returns information about available media input devices.
    ///
    /// # Errors
    ///
    /// With the raw [`platform::Error`] if enumeration fails.
    pub async fn enumerate_devices(
        &self,
    ) -> Result<Vec<InputDeviceInfo>, Traced<platform::Error>> {
        self.env
            .enumerate_devices()
            .await
            .map_err(tracerr::wrap!())
    }

    /// Indicates whether any camera is connected.
    pub async fn is_camera_available(&self) -> bool {
        self.has_input_device(MediaKind::Video).await
    }

    /// Indicates whether any microphone is connected.
    pub async fn is_microphone_available(&self) -> bool {
        self.has_input_device(MediaKind::Audio).await
    }

    /// Indicates whether an input device of the provided [`MediaKind`] is
    /// connected. Enumeration failures are logged and count as absence.
    async fn has_input_device(&self, kind: MediaKind) -> bool {
        if !self.is_supported() {
            return false;
        }
        match self.enumerate_devices().await {
            Ok(devices) => devices.iter().any(|d| d.kind() == kind),
            Err(e) => {
                log::error!("Error enumerating devices: {}", e);
                false
            }
        }
    }
}
