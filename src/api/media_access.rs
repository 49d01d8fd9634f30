//! Entry point of the JS side API.

use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::{
    diagnostics,
    media::{ConstraintsRequest, MediaManager},
    platform::wasm::{self, BrowserEnvironment},
};

use super::{parse_conf, to_js, LocalMediaStream, MediaAccessException};

/// Negotiates camera/microphone access with the current browser.
#[wasm_bindgen]
#[derive(Debug)]
pub struct MediaAccess(MediaManager<BrowserEnvironment>);

#[wasm_bindgen]
impl MediaAccess {
    /// Creates a new [`MediaAccess`] with the provided optional
    /// configuration object, installing the panic hook and logger.
    ///
    /// # Errors
    ///
    /// If the provided configuration object is malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(conf: JsValue) -> Result<MediaAccess, JsValue> {
        let conf = parse_conf(&conf)?;
        wasm::set_panic_hook();
        wasm::init_logger(&conf.log);

        Ok(Self(MediaManager::new(Rc::new(BrowserEnvironment), conf.media)))
    }

    /// Returns current capabilities of the browser as a plain JS object.
    ///
    /// # Errors
    ///
    /// If the capabilities cannot be serialized.
    pub fn detect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.0.detect())
    }

    /// Returns media access compatibility report of the browser as a plain JS
    /// object.
    ///
    /// # Errors
    ///
    /// If the report cannot be serialized.
    pub fn compatibility(&self) -> Result<JsValue, JsValue> {
        to_js(&diagnostics::browser_compatibility(
            self.0.env(),
            self.0.conf(),
        ))
    }

    /// Indicates whether any media acquisition path exists.
    pub fn is_supported(&self) -> bool {
        self.0.is_supported()
    }

    /// Acquires camera/microphone resolving into a [`LocalMediaStream`].
    ///
    /// `constraints` is an optional `{video, audio}` object. Omitted object
    /// means the configured defaults, omitted field means requested.
    ///
    /// Rejects with a [`MediaAccessException`].
    pub fn acquire(&self, constraints: JsValue) -> Promise {
        let manager = self.0.clone();
        future_to_promise(async move {
            let omitted = constraints.is_undefined() || constraints.is_null();
            let caps = if omitted {
                manager.conf().default_constraints
            } else {
                constraints
                    .into_serde::<ConstraintsRequest>()
                    .map_err(|e| js_sys::Error::new(&e.to_string()))?
            };
            manager
                .acquire(caps)
                .await
                .map(|s| LocalMediaStream::from(s).into())
                .map_err(|e| MediaAccessException::from(e).into())
        })
    }

    /// Resolves into a JS array of the available input devices.
    pub fn enumerate_devices(&self) -> Promise {
        let manager = self.0.clone();
        future_to_promise(async move {
            let devices = manager
                .enumerate_devices()
                .await
                .map_err(|e| js_sys::Error::new(&e.to_string()))?;
            to_js(&devices)
        })
    }

    /// Resolves into `true` if any camera is connected.
    pub fn is_camera_available(&self) -> Promise {
        let manager = self.0.clone();
        future_to_promise(async move {
            Ok(manager.is_camera_available().await.into())
        })
    }

    /// Resolves into `true` if any microphone is connected.
    pub fn is_microphone_available(&self) -> Promise {
        let manager = self.0.clone();
        future_to_promise(async move {
            Ok(manager.is_microphone_available().await.into())
        })
    }

    /// Acquires and immediately releases both camera and microphone,
    /// resolving into `true` on success.
    ///
    /// Rejects with a [`MediaAccessException`].
    pub fn test_media_access(&self) -> Promise {
        let manager = self.0.clone();
        future_to_promise(async move {
            diagnostics::test_media_access(&manager)
                .await
                .map(|_| JsValue::from(true))
                .map_err(|e| MediaAccessException::from(e).into())
        })
    }
}
