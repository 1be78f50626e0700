//! Detached element construction.

use crate::DomError;
use tracing::{instrument, trace};

/// Creates a detached `<{tag}>` owned by `document`.
///
/// `attributes` are set in order, so later duplicates win.
/// If `text` is [`Some`], it becomes the element's only child node.
///
/// # Errors
///
/// Iff `tag` or one of the attribute names is invalid, in which case the DOM exception is returned as [`DomError::Js`].
#[instrument(skip(document, attributes, text), fields(attributes = ?attribute_names(attributes)))]
pub fn create_element(document: &web_sys::Document, tag: &str, attributes: &[(&str, &str)], text: Option<&str>) -> Result<web_sys::Element, DomError> {
	let element = document.create_element(tag)?;
	for &(name, value) in attributes {
		element.set_attribute(name, value)?;
	}
	if text.is_some() {
		element.set_text_content(text);
	}

	if cfg!(feature = "dangerous-logging") {
		trace!(?attributes, ?text, "Created <{}>.", tag);
	} else {
		trace!("Created <{}>.", tag);
	}
	Ok(element)
}

/// Attribute values may be page content, so only names are recorded by default.
fn attribute_names<'a>(attributes: &[(&'a str, &str)]) -> Vec<&'a str> {
	attributes.iter().map(|&(name, _)| name).collect()
}
