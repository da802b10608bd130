//! Error type for browser glue.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors reach the user. Handlers propagate with `?` inside the
//! glue and log at the edge; a missing element just disables the feature that
//! needed it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element not found: {0}")]
    Missing(String),
    #[error("element is not a {0}")]
    Cast(&'static str),
    #[error("javascript call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(detail)
    }
}
