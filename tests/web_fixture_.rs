#![allow(dead_code)] // Not every test binary uses every helper.

use dom_helpers::{Page, PageOptions};
use std::sync::Once;
use web_sys::window;

static LOG_INITIALIZED: Once = Once::new();

/// Replaces the whole body with `html` and returns a [`Page`] for the document.
pub fn page(html: &str) -> Page {
	page_with_options(html, PageOptions::new())
}

pub fn page_with_options(html: &str, options: PageOptions) -> Page {
	//TODO: Fail on Warning or Error.
	LOG_INITIALIZED.call_once(tracing_wasm::set_as_global_default);

	let document = window().unwrap().document().unwrap();
	document.body().unwrap().set_inner_html(html);
	Page::with_options(document, options)
}

pub fn body_html(page: &Page) -> String {
	page.document().body().unwrap().inner_html()
}

pub fn text_of(page: &Page, id: &str) -> Option<String> {
	page.document().get_element_by_id(id).and_then(|element| element.text_content())
}

/// The text of the error element, if it exists.
pub fn error_text(page: &Page) -> Option<String> {
	text_of(page, page.options().error_element_id())
}

pub fn error_element_count(page: &Page) -> u32 {
	page.document()
		.query_selector_all(&format!("#{}", page.options().error_element_id()))
		.unwrap()
		.length()
}

/// Removes the error element, so that the rest of the body can be compared.
pub fn take_error_element(page: &Page) {
	page.document().get_element_by_id(page.options().error_element_id()).unwrap().remove();
}
