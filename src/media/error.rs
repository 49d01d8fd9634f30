//! Normalized media access errors.

use std::borrow::Cow;

use derive_more::Display;
use serde::Serialize;

use crate::platform;

/// Kind of a [`MediaAccessError`].
#[cfg_attr(target_arch = "wasm32", wasm_bindgen::prelude::wasm_bindgen)]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[repr(u8)]
pub enum MediaAccessErrorKind {
    /// User or host denied access to media devices.
    PermissionDenied,

    /// No device satisfying the request is connected.
    DeviceNotFound,

    /// Device is already in use by another application or acquirer.
    DeviceBusy,

    /// Requested device settings cannot be satisfied.
    ConstraintsUnsatisfiable,

    /// Neither the standard nor any legacy media API is available.
    Unsupported,

    /// Any other failure.
    Unknown,
}

/// Normalized, user-facing error of a media acquisition.
#[derive(Clone, Debug, Display, PartialEq)]
#[display(fmt = "{}", message)]
pub struct MediaAccessError {
    /// Kind of this [`MediaAccessError`].
    kind: MediaAccessErrorKind,

    /// Human-readable message describing the problem.
    message: Cow<'static, str>,

    /// Raw [`platform::Error`] this [`MediaAccessError`] was normalized from.
    cause: Option<platform::Error>,

    /// [`platform::Error`] of the failed standard API attempt, discarded in
    /// favor of a legacy API or of reporting no acquisition path.
    fallback_of: Option<platform::Error>,
}

impl MediaAccessError {
    /// Creates a new [`MediaAccessErrorKind::Unsupported`] error.
    pub fn unsupported() -> Self {
        Self {
            kind: MediaAccessErrorKind::Unsupported,
            message: "WebRTC is not supported in this browser. Please use a \
                      modern browser like Chrome, Firefox, Edge, or Safari."
                .into(),
            cause: None,
            fallback_of: None,
        }
    }

    /// Attaches the failed standard API error which was discarded in favor of
    /// a legacy API or resulted in no acquisition path being left.
    #[must_use]
    pub fn with_fallback_of(mut self, err: Option<platform::Error>) -> Self {
        self.fallback_of = err;
        self
    }

    /// Returns [`MediaAccessErrorKind`] of this [`MediaAccessError`].
    #[inline]
    pub fn kind(&self) -> MediaAccessErrorKind {
        self.kind
    }

    /// Returns human-readable message of this [`MediaAccessError`].
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns raw [`platform::Error`] this [`MediaAccessError`] was
    /// normalized from, if any.
    #[inline]
    pub fn cause(&self) -> Option<&platform::Error> {
        self.cause.as_ref()
    }

    /// Returns standard API [`platform::Error`] that preceded this
    /// [`MediaAccessError`], if any.
    #[inline]
    pub fn fallback_of(&self) -> Option<&platform::Error> {
        self.fallback_of.as_ref()
    }
}

impl From<platform::Error> for MediaAccessError {
    fn from(err: platform::Error) -> Self {
        use MediaAccessErrorKind as Kind;

        let (kind, message): (_, Cow<'static, str>) = match err.name.as_ref() {
            "NotAllowedError" => (
                Kind::PermissionDenied,
                "Camera/microphone access was denied. Please check your \
                 browser permissions and allow access when prompted."
                    .into(),
            ),
            "NotFoundError" => (
                Kind::DeviceNotFound,
                "No camera/microphone found. Please check your device \
                 connections."
                    .into(),
            ),
            "NotReadableError" => (
                Kind::DeviceBusy,
                "Camera/microphone is already in use by another application."
                    .into(),
            ),
            "OverconstrainedError" => (
                Kind::ConstraintsUnsatisfiable,
                "The requested camera/microphone settings cannot be \
                 satisfied."
                    .into(),
            ),
            _ if err.message.contains("Permission denied") => (
                Kind::PermissionDenied,
                "Permission denied. Please allow camera/microphone access in \
                 your browser settings."
                    .into(),
            ),
            _ => (
                Kind::Unknown,
                format!("Failed to access camera/microphone: {}", err.message)
                    .into(),
            ),
        };
        Self {
            kind,
            message,
            cause: Some(err),
            fallback_of: None,
        }
    }
}
