use crate::{create::create_element, DomError, Page};
use tracing::{error, instrument, trace};
use wasm_bindgen::JsCast;

impl Page {
	/// Appends a new container element (see [`PageOptions::container_tag`](`crate::PageOptions::container_tag`)) with `text` to the element with id `parent_id`.
	///
	/// # Errors
	///
	/// Iff the parent can't be found or the DOM throws.
	/// The error is shown on the page before being returned and the DOM is left unchanged.
	#[instrument(skip(self, text))]
	pub fn add_element(&self, parent_id: &str, text: &str) -> Result<web_sys::Element, DomError> {
		self.reported(self.try_add_element(parent_id, text))
	}

	fn try_add_element(&self, parent_id: &str, text: &str) -> Result<web_sys::Element, DomError> {
		let parent = self.document.get_element_by_id(parent_id).ok_or_else(|| DomError::parent_not_found(parent_id))?;
		let element = create_element(&self.document, self.options.container_tag(), &[], Some(text))?;
		parent.append_child(&element)?;
		trace!("Appended <{}> to #{}.", self.options.container_tag(), parent_id);
		Ok(element)
	}

	/// Removes the element with id `id` from its parent.
	///
	/// # Errors
	///
	/// Iff no such element exists. The error is shown on the page before being returned.
	#[instrument(skip(self))]
	pub fn remove_element(&self, id: &str) -> Result<(), DomError> {
		self.reported(self.document.get_element_by_id(id).ok_or_else(|| DomError::element_not_found(id)).map(|element| {
			element.remove();
			trace!("Removed #{}.", id);
		}))
	}

	/// Replaces the text content of the element with id `id`, as a button handler would.
	///
	/// # Errors
	///
	/// Iff no such element exists. The error is shown on the page before being returned.
	#[instrument(skip(self, text))]
	pub fn simulate_click(&self, id: &str, text: &str) -> Result<(), DomError> {
		self.reported(self.document.get_element_by_id(id).ok_or_else(|| DomError::element_not_found(id)).map(|element| {
			element.set_text_content(Some(text));
			if cfg!(feature = "dangerous-logging") {
				trace!(text, "Updated #{}.", id);
			} else {
				trace!("Updated #{}.", id);
			}
		}))
	}

	/// Moves the trimmed value of the first `<input>` inside the form with id `form_id` into the text of the element with id `output_id`,
	/// then clears that input.
	///
	/// Returns the submitted (trimmed) value.
	///
	/// # Errors
	///
	/// Iff the form or output element is missing, or the form has no `<input>` or only whitespace in it.
	/// The error is shown on the page before being returned and neither the input nor the output is changed.
	#[instrument(skip(self))]
	pub fn handle_form_submit(&self, form_id: &str, output_id: &str) -> Result<String, DomError> {
		self.reported(self.try_handle_form_submit(form_id, output_id))
	}

	fn try_handle_form_submit(&self, form_id: &str, output_id: &str) -> Result<String, DomError> {
		let (form, output) = match (self.document.get_element_by_id(form_id), self.document.get_element_by_id(output_id)) {
			(Some(form), Some(output)) => (form, output),
			_ => return Err(DomError::FormOrOutputNotFound),
		};

		let input = form
			.query_selector("input")?
			.and_then(|input| input.dyn_into::<web_sys::HtmlInputElement>().ok())
			.ok_or(DomError::EmptyInput)?;
		// Same whitespace set as `String.prototype.trim`, which includes U+FEFF but not U+0085.
		let value = String::from(js_sys::JsString::from(input.value()).trim());
		if value.is_empty() {
			return Err(DomError::EmptyInput);
		}

		output.set_text_content(Some(&value));
		input.set_value("");
		if cfg!(feature = "dangerous-logging") {
			trace!(value = value.as_str(), "Submitted #{} into #{}.", form_id, output_id);
		} else {
			trace!("Submitted #{} into #{}.", form_id, output_id);
		}
		Ok(value)
	}

	/// Shows `message` in the page's error element, creating it as the body's first child if necessary.
	///
	/// The element is found by [`PageOptions::error_element_id`](`crate::PageOptions::error_element_id`),
	/// so repeated calls reuse it and only overwrite its text.
	/// [`PageOptions::hidden_class`](`crate::PageOptions::hidden_class`) is removed from it each time.
	///
	/// This never fails visibly. If the error element can't be shown, that is only logged.
	#[instrument(skip(self, message))]
	pub fn display_error(&self, message: &str) {
		if let Err(error) = self.try_display_error(message) {
			error!("Failed to display error message: {}", error);
		}
	}

	fn try_display_error(&self, message: &str) -> Result<(), DomError> {
		let id = self.options.error_element_id();
		let error_element = match self.document.get_element_by_id(id) {
			Some(error_element) => error_element,
			None => {
				let body = self.document.body().ok_or(DomError::NoBody)?;
				let error_element = create_element(&self.document, self.options.error_element_tag(), &[("id", id)], None)?;
				body.prepend_with_node_1(&error_element)?;
				trace!("Created error element #{}.", id);
				error_element
			}
		};

		error_element.set_text_content(Some(message));
		error_element.class_list().remove_1(self.options.hidden_class())?;
		if cfg!(feature = "dangerous-logging") {
			trace!(message, "Displayed error in #{}.", id);
		}
		Ok(())
	}

	/// Shows `result`'s error, if any, on the page.
	pub(crate) fn reported<T>(&self, result: Result<T, DomError>) -> Result<T, DomError> {
		if let Err(error) = &result {
			error!("{}", error);
			self.display_error(&error.to_string());
		}
		result
	}
}
