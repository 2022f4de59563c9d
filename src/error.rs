//! Error type for page bindings.
//!
//! ERROR HANDLING
//! ==============
//! Every failure on this page is recoverable: a missing element just means a
//! feature stays inactive. Binding helpers return `PageError` so call sites
//! can use `?`, and the boot sequence logs and drops whatever comes back.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    /// Whether this error is the expected "markup lacks this element" case.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Log a binding failure at the level its kind deserves.
pub fn report(context: &str, err: &PageError) {
    if err.is_missing_element() {
        log::debug!("{context}: {err}");
    } else {
        log::warn!("{context}: {err}");
    }
}
