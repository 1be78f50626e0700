//! Event listeners that drive the [`Page`] operations from user interaction.
//!
//! # Lifetime
//!
//! A [`Listener`] owns the [`Closure`] that [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript) calls.
//! Dropping it removes the event listener again. Use [`Listener::forget`] to keep it installed for the rest of the page's lifetime.

use crate::{DomError, Page};
use js_sys::Function;
use tracing::{instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast};

/// An installed event listener. Removes itself when dropped.
#[derive(Debug)]
#[must_use = "Dropping a `Listener` removes it from its target immediately."]
pub struct Listener {
	target: web_sys::EventTarget,
	event_type: &'static str,
	handler: Closure<dyn FnMut(web_sys::Event)>,
}
impl Listener {
	fn install(target: web_sys::EventTarget, event_type: &'static str, handler: Box<dyn FnMut(web_sys::Event)>) -> Result<Self, DomError> {
		let handler = Closure::wrap(handler);
		target.add_event_listener_with_callback(event_type, handler.as_ref().unchecked_ref::<Function>())?;
		trace!("Added {:?} listener.", event_type);
		Ok(Self { target, event_type, handler })
	}

	#[must_use]
	pub fn event_type(&self) -> &'static str {
		self.event_type
	}

	/// Leaks the listener, so that it stays installed for the rest of the page's lifetime.
	pub fn forget(self) {
		trace!("Leaking {:?} listener.", self.event_type);
		core::mem::forget(self);
	}
}
impl Drop for Listener {
	fn drop(&mut self) {
		match self
			.target
			.remove_event_listener_with_callback(self.event_type, self.handler.as_ref().unchecked_ref::<Function>())
		{
			Ok(()) => trace!("Removed {:?} listener.", self.event_type),
			Err(error) => warn!("Failed to remove {:?} listener: {:?}", self.event_type, error),
		}
	}
}

impl Page {
	/// Makes clicks on the element with id `button_id` run [`Page::simulate_click`]`(target_id, text)`.
	///
	/// `target_id` is resolved on each click, so it doesn't have to exist yet.
	///
	/// # Errors
	///
	/// Iff the button can't be found (shown on the page, as with the other operations) or the DOM throws.
	#[instrument(skip(self, text))]
	pub fn bind_click(&self, button_id: &str, target_id: &str, text: impl Into<String>) -> Result<Listener, DomError> {
		let button = self.bind_target(button_id)?;

		let page = self.clone();
		let target_id = target_id.to_owned();
		let text = text.into();
		Listener::install(
			button,
			"click",
			Box::new(move |_event: web_sys::Event| {
				let span = trace_span!("click handler", target_id = target_id.as_str());
				let _enter = span.enter();
				page.simulate_click(&target_id, &text).ok();
			}),
		)
	}

	/// Makes submissions of the form with id `form_id` run [`Page::handle_form_submit`]`(form_id, output_id)` instead of navigating.
	///
	/// # Errors
	///
	/// Iff the form can't be found (shown on the page, as with the other operations) or the DOM throws.
	#[instrument(skip(self))]
	pub fn bind_submit(&self, form_id: &str, output_id: &str) -> Result<Listener, DomError> {
		let form = self.bind_target(form_id)?;

		let page = self.clone();
		let form_id = form_id.to_owned();
		let output_id = output_id.to_owned();
		Listener::install(
			form,
			"submit",
			Box::new(move |event: web_sys::Event| {
				let span = trace_span!("submit handler", form_id = form_id.as_str(), output_id = output_id.as_str());
				let _enter = span.enter();
				event.prevent_default();
				page.handle_form_submit(&form_id, &output_id).ok();
			}),
		)
	}

	fn bind_target(&self, id: &str) -> Result<web_sys::EventTarget, DomError> {
		self.reported(self.document.get_element_by_id(id).map(web_sys::EventTarget::from).ok_or_else(|| DomError::element_not_found(id)))
	}
}
