//! Raw errors returned by the host.

use std::borrow::Cow;

use derive_more::Display;

/// Error returned by the host media APIs, as is.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display(fmt = "{}: {}", name, message)]
pub struct Error {
    /// Name of the error (`NotAllowedError`, for example).
    pub name: Cow<'static, str>,

    /// Message of the error.
    pub message: Cow<'static, str>,
}

impl Error {
    /// Name given to errors thrown as non-`Error` values.
    pub const UNKNOWN_NAME: &'static str = "Unknown JS error";

    /// Creates a new [`Error`] with the provided `name` and `message`.
    pub fn new<N, M>(name: N, message: M) -> Self
    where
        N: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast as _;

        use crate::utils::get_property_by_name;

        if let Some(err) = val.dyn_ref::<js_sys::Error>() {
            return Self::new(
                String::from(err.name()),
                String::from(err.message()),
            );
        }
        // `DOMException`s aren't `Error` instances in some hosts.
        let name = get_property_by_name(&val, "name", |v| v.as_string());
        let message =
            get_property_by_name(&val, "message", |v| v.as_string());
        match (name, message) {
            (Some(name), message) => {
                Self::new(name, message.unwrap_or_default())
            }
            (None, _) => Self::new(
                Self::UNKNOWN_NAME,
                val.as_string().unwrap_or_else(|| format!("{:?}", val)),
            ),
        }
    }
}
