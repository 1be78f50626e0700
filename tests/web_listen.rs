#![cfg(target_arch = "wasm32")]

use dom_helpers::{DomError, Page};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

mod web_fixture_;
use web_fixture_::{error_text, page, text_of};

fn click(page: &Page, id: &str) {
	page.document().get_element_by_id(id).unwrap().dyn_into::<HtmlElement>().unwrap().click();
}

/// Returns whether the default action was prevented.
fn submit(page: &Page, id: &str) -> bool {
	let mut init = EventInit::new();
	init.cancelable(true);
	let event = Event::new_with_event_init_dict("submit", &init).unwrap();
	!page.document().get_element_by_id(id).unwrap().dispatch_event(&event).unwrap()
}

#[wasm_bindgen_test]
fn click_updates_target_until_dropped() {
	let page = page(r#"<button id="button">Click me</button><p id="target">old</p>"#);

	let listener = page.bind_click("button", "target", "clicked").unwrap();
	assert_eq!(listener.event_type(), "click");
	assert_eq!(text_of(&page, "target").unwrap(), "old");

	click(&page, "button");
	assert_eq!(text_of(&page, "target").unwrap(), "clicked");

	drop(listener);
	page.simulate_click("target", "old").unwrap();
	click(&page, "button");
	assert_eq!(text_of(&page, "target").unwrap(), "old");
}

#[wasm_bindgen_test]
fn click_with_missing_target_reports() {
	let page = page(r#"<button id="button">Click me</button>"#);

	let _listener = page.bind_click("button", "target", "clicked").unwrap();
	click(&page, "button");

	assert_eq!(error_text(&page).unwrap(), r#"Element with id "target" not found."#);
}

#[wasm_bindgen_test]
fn submit_is_handled_in_place() {
	let page = page(r#"<form id="form"><input id="field"></form><p id="output"></p>"#);
	let field: HtmlInputElement = page.document().get_element_by_id("field").unwrap().dyn_into().unwrap();
	field.set_value(" abc ");

	let _listener = page.bind_submit("form", "output").unwrap();

	assert!(submit(&page, "form"));
	assert_eq!(text_of(&page, "output").unwrap(), "abc");
	assert_eq!(field.value(), "");

	assert!(submit(&page, "form"));
	assert_eq!(error_text(&page).unwrap(), "Input cannot be empty");
	assert_eq!(text_of(&page, "output").unwrap(), "abc");
}

#[wasm_bindgen_test]
fn binding_missing_element_reports() {
	let page = page("");

	let error = page.bind_submit("form", "output").unwrap_err();

	assert!(matches!(error, DomError::ElementNotFound { ref id } if id == "form"));
	assert_eq!(error_text(&page).unwrap(), r#"Element with id "form" not found."#);
}
