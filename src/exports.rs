//! [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript) entry points for a test harness.
//!
//! Each function runs against the current window's document with default [`PageOptions`](`crate::PageOptions`).
//! Nothing is thrown: failures only show up in the page's error element (and the log).

use crate::Page;
use tracing::error;
use wasm_bindgen::prelude::wasm_bindgen;

fn with_page(f: impl FnOnce(&Page)) {
	match Page::from_window() {
		Ok(page) => f(&page),
		Err(error) => error!("{}", error),
	}
}

#[wasm_bindgen(js_name = addElementToDOM)]
pub fn add_element_to_dom(id: &str, text: &str) {
	with_page(|page| {
		page.add_element(id, text).ok();
	});
}

#[wasm_bindgen(js_name = removeElementFromDOM)]
pub fn remove_element_from_dom(id: &str) {
	with_page(|page| {
		page.remove_element(id).ok();
	});
}

#[wasm_bindgen(js_name = simulateClick)]
pub fn simulate_click(id: &str, text: &str) {
	with_page(|page| {
		page.simulate_click(id, text).ok();
	});
}

#[wasm_bindgen(js_name = handleFormSubmit)]
pub fn handle_form_submit(form_id: &str, output_id: &str) {
	with_page(|page| {
		page.handle_form_submit(form_id, output_id).ok();
	});
}

#[wasm_bindgen(js_name = displayError)]
pub fn display_error(message: &str) {
	with_page(|page| page.display_error(message));
}
