//! Exceptions thrown to JS side.

use tracerr::{Trace, Traced};
use wasm_bindgen::prelude::*;

use crate::{
    media::{MediaAccessError, MediaAccessErrorKind},
    platform,
};

/// Exception thrown when accessing media devices fails.
#[wasm_bindgen]
#[derive(Debug)]
pub struct MediaAccessException {
    /// Concrete error kind of this [`MediaAccessException`].
    kind: MediaAccessErrorKind,

    /// Error message describing the problem.
    message: String,

    /// [`platform::Error`] that caused this [`MediaAccessException`].
    cause: Option<platform::Error>,

    /// [`platform::Error`] of the failed standard API attempt preceding this
    /// [`MediaAccessException`].
    fallback_of: Option<platform::Error>,

    /// Stacktrace of this [`MediaAccessException`].
    trace: Trace,
}

impl From<Traced<MediaAccessError>> for MediaAccessException {
    fn from(err: Traced<MediaAccessError>) -> Self {
        let (err, trace) = err.into_parts();
        Self {
            kind: err.kind(),
            message: err.message().to_owned(),
            cause: err.cause().cloned(),
            fallback_of: err.fallback_of().cloned(),
            trace,
        }
    }
}

#[wasm_bindgen]
impl MediaAccessException {
    /// Returns concrete error kind of this [`MediaAccessException`].
    pub fn kind(&self) -> MediaAccessErrorKind {
        self.kind
    }

    /// Returns error message describing the problem.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns name of the browser error that caused this
    /// [`MediaAccessException`].
    pub fn cause_name(&self) -> Option<String> {
        self.cause.as_ref().map(|e| e.name.to_string())
    }

    /// Returns message of the browser error that caused this
    /// [`MediaAccessException`].
    pub fn cause_message(&self) -> Option<String> {
        self.cause.as_ref().map(|e| e.message.to_string())
    }

    /// Returns the standard API error which preceded the failed legacy API
    /// attempt, formatted as `name: message`.
    pub fn fallback_of(&self) -> Option<String> {
        self.fallback_of.as_ref().map(ToString::to_string)
    }

    /// Returns stacktrace of this [`MediaAccessException`].
    pub fn trace(&self) -> String {
        self.trace.to_string()
    }
}
