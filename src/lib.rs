#![doc(html_root_url = "https://docs.rs/dom-helpers/0.1.0")]
#![warn(clippy::pedantic)]

//! Small helpers that manipulate the live [***DOM***](https://developer.mozilla.org/en-US/docs/Web/API/Document_Object_Model) of a page.
//!
//! All operations go through a [`Page`], which pairs a [`web_sys::Document`] with [`PageOptions`].
//! Failures are never thrown into [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript):
//! they are shown in a dedicated error element on the page (see [`Page::display_error`]) and additionally returned as [`DomError`].

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod create;
mod error;
#[cfg(feature = "js-exports")]
pub mod exports;
pub mod listen;
mod ops;
mod options;

pub use error::DomError;
pub use listen::Listener;
pub use options::PageOptions;

/// A handle to a document, used to run the helpers against it.
///
/// Cloning is cheap, as only the [`web_sys::Document`] reference is duplicated.
/// The document itself is the only state.
#[derive(Debug, Clone)]
pub struct Page {
	document: web_sys::Document,
	options: PageOptions,
}
impl Page {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self::with_options(document, PageOptions::new())
	}

	#[must_use]
	pub fn with_options(document: web_sys::Document, options: PageOptions) -> Self {
		Self { document, options }
	}

	/// Creates a [`Page`] for the current window's document.
	///
	/// # Errors
	///
	/// Iff there is no global `window` or it has no document, e.g. in a worker.
	pub fn from_window() -> Result<Self, DomError> {
		let document = web_sys::window().and_then(|window| window.document()).ok_or(DomError::NoDocument)?;
		Ok(Self::new(document))
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}

	#[must_use]
	pub fn options(&self) -> &PageOptions {
		&self.options
	}
}
