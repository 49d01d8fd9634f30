//! `wasm32` platform: [`Environment`] backed by the real browser globals.
//!
//! [`Environment`]: crate::platform::Environment

mod environment;
mod legacy;
mod media_track;

use crate::conf;

#[doc(inline)]
pub use self::{
    environment::BrowserEnvironment, media_track::MediaStreamTrack,
};

/// Installs [`console_error_panic_hook`] so panics are printed to the
/// browser console.
///
/// [`console_error_panic_hook`]: https://docs.rs/console_error_panic_hook
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Initializes [`wasm_logger`] as the default application logger with the
/// configured level, falling back to [`log::Level::Info`] if it cannot be
/// parsed. `OFF` level leaves logging uninitialized.
///
/// [`wasm_logger`]: https://docs.rs/wasm-logger
pub fn init_logger(conf: &conf::Log) {
    let level = match conf.level() {
        Some(log::LevelFilter::Off) => return,
        Some(filter) => filter.to_level().unwrap_or(log::Level::Info),
        None => log::Level::Info,
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}
