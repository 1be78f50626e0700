/// Names used by a [`Page`](`crate::Page`) when it creates or looks up its own elements.
///
/// All values must be valid for their DOM use: ids and class names must not contain whitespace
/// and `container_tag` must be a valid HTML tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageOptions {
	error_element_id: &'static str,
	hidden_class: &'static str,
	container_tag: &'static str,
	error_element_tag: &'static str,
}
impl Default for PageOptions {
	fn default() -> Self {
		Self::new()
	}
}
impl PageOptions {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			error_element_id: "error-message",
			hidden_class: "hidden",
			container_tag: "div",
			error_element_tag: "div",
		}
	}

	/// Sets the id of the singleton error element. Defaults to `"error-message"`.
	#[must_use]
	pub const fn with_error_element_id(self, error_element_id: &'static str) -> Self {
		Self { error_element_id, ..self }
	}

	/// Sets the class that is removed from the error element to make it visible. Defaults to `"hidden"`.
	#[must_use]
	pub const fn with_hidden_class(self, hidden_class: &'static str) -> Self {
		Self { hidden_class, ..self }
	}

	/// Sets the tag of elements created by [`Page::add_element`](`crate::Page::add_element`). Defaults to `"div"`.
	#[must_use]
	pub const fn with_container_tag(self, container_tag: &'static str) -> Self {
		Self { container_tag, ..self }
	}

	/// Sets the tag of the error element, if it has to be created. Defaults to `"div"`.
	#[must_use]
	pub const fn with_error_element_tag(self, error_element_tag: &'static str) -> Self {
		Self { error_element_tag, ..self }
	}

	#[must_use]
	pub const fn error_element_id(&self) -> &'static str {
		self.error_element_id
	}

	#[must_use]
	pub const fn hidden_class(&self) -> &'static str {
		self.hidden_class
	}

	#[must_use]
	pub const fn container_tag(&self) -> &'static str {
		self.container_tag
	}

	#[must_use]
	pub const fn error_element_tag(&self) -> &'static str {
		self.error_element_tag
	}
}
