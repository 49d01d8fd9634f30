//! External API exported to JS side via `wasm-bindgen`.

mod errors;
mod local_media_stream;
mod media_access;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    conf::Conf,
    diagnostics,
    platform::wasm::{self, BrowserEnvironment},
};

#[doc(inline)]
pub use self::{
    errors::MediaAccessException, local_media_stream::LocalMediaStream,
    media_access::MediaAccess,
};

/// Serializes the provided value into a plain JS object.
fn to_js<T: Serialize>(val: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(val)
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

/// Parses [`Conf`] from the provided JS object. `undefined` and `null` give
/// the defaults.
fn parse_conf(conf: &JsValue) -> Result<Conf, JsValue> {
    if conf.is_undefined() || conf.is_null() {
        return Ok(Conf::default());
    }
    conf.into_serde()
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

/// Installs the panic hook and initializes logging with the provided
/// configuration object.
///
/// # Errors
///
/// If the provided configuration object is malformed.
#[wasm_bindgen]
pub fn init_logger(conf: JsValue) -> Result<(), JsValue> {
    let conf = parse_conf(&conf)?;
    wasm::set_panic_hook();
    wasm::init_logger(&conf.log);
    Ok(())
}

/// Logs media access compatibility report of the current browser and returns
/// it as a plain JS object.
///
/// # Errors
///
/// If the report cannot be serialized.
#[wasm_bindgen]
pub fn run_browser_test() -> Result<JsValue, JsValue> {
    let conf = Conf::default();
    to_js(&diagnostics::run_browser_test(&BrowserEnvironment, &conf.media))
}

/// Indicates whether WebRTC peer connections are available in the current
/// browser.
#[wasm_bindgen]
pub fn is_webrtc_available() -> bool {
    diagnostics::is_webrtc_available(&BrowserEnvironment)
}

/// Returns presence of the WebRTC globals in the current browser as a plain
/// JS object.
///
/// # Errors
///
/// If the result cannot be serialized.
#[wasm_bindgen]
pub fn webrtc_features() -> Result<JsValue, JsValue> {
    to_js(&diagnostics::webrtc_features(&BrowserEnvironment))
}

/// Returns detailed information about the current browser as a plain JS
/// object, or `null` outside of a browser context.
///
/// # Errors
///
/// If the information cannot be serialized.
#[wasm_bindgen]
pub fn environment_info() -> Result<JsValue, JsValue> {
    to_js(&diagnostics::environment_info(&BrowserEnvironment))
}
