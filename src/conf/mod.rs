//! Provides configuration options of [`MediaManager`].
//!
//! Configuration can be parsed from a JSON string or, in a browser, taken
//! directly from a JS object.
//!
//! [`MediaManager`]: crate::media::MediaManager

pub mod log;
pub mod media;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

#[doc(inline)]
pub use self::{log::Log, media::Media};

/// All configuration options of the library.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, SmartDefault)]
#[serde(default)]
pub struct Conf {
    /// Logging settings.
    pub log: Log,

    /// Media acquisition settings.
    pub media: Media,
}

impl Conf {
    /// Parses [`Conf`] from the provided JSON string, applying default values
    /// for all the omitted options.
    ///
    /// # Errors
    ///
    /// If the provided string is not a valid JSON representation of
    /// [`Conf`].
    pub fn from_json(json: &str) -> Result<Self, ConfError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Error of parsing [`Conf`].
#[derive(Debug, Display, From)]
#[display(fmt = "Failed to parse configuration: {}", _0)]
pub struct ConfError(serde_json::Error);
