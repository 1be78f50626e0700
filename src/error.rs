use wasm_bindgen::JsValue;

/// Why an operation had no effect.
///
/// The [`Display`](`core::fmt::Display`) text is the message shown in the page's error element.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
	#[error("Parent element with id \"{id}\" not found.")]
	ParentNotFound { id: String },

	#[error("Element with id \"{id}\" not found.")]
	ElementNotFound { id: String },

	#[error("Form or output element not found.")]
	FormOrOutputNotFound,

	#[error("Input cannot be empty")]
	EmptyInput,

	#[error("No document is available.")]
	NoDocument,

	#[error("The document has no body.")]
	NoBody,

	/// A DOM method threw.
	#[error("DOM operation failed: {0:?}")]
	Js(JsValue),
}
impl From<JsValue> for DomError {
	fn from(error: JsValue) -> Self {
		Self::Js(error)
	}
}
impl DomError {
	pub(crate) fn parent_not_found(id: &str) -> Self {
		Self::ParentNotFound { id: id.to_owned() }
	}

	pub(crate) fn element_not_found(id: &str) -> Self {
		Self::ElementNotFound { id: id.to_owned() }
	}
}
