//! Error type shared by every controller initializer.
//!
//! Initializers return [`Result`]; the page controller logs an `Err` and
//! carries on with the next feature, so one broken piece of markup only
//! disables the feature that depends on it.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors raised while wiring controllers to the document.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PageError {
	#[error("Element not found: {selector}")]
	MissingElement { selector: String },

	#[error("Element {selector} is not a {expected}")]
	UnexpectedElement {
		selector: String,
		expected: &'static str,
	},

	#[error("Malformed attribute {attribute}={value:?}")]
	MalformedAttribute { attribute: &'static str, value: String },

	#[error("JavaScript error: {0}")]
	Js(String),

	#[error("Config error: {0}")]
	Config(#[from] serde_json::Error),
}

impl PageError {
	/// Shorthand for [`PageError::MissingElement`].
	pub fn missing(selector: impl Into<String>) -> Self {
		Self::MissingElement {
			selector: selector.into(),
		}
	}
}

impl From<wasm_bindgen::JsValue> for PageError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		let message = value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value));
		Self::Js(message)
	}
}
