//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Missing DOM elements are not errors: components short-circuit on `None`.
//! `ClientError` covers the calls that can genuinely fail (HTTP, storage,
//! JS interop) so callers can log and degrade instead of panicking.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("js error: {0}")]
    Js(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
