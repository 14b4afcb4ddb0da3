//! Thin DOM helpers over `web-sys`.
//!
//! Lookups return [`Result`] so initializers can bail out with `?` on
//! missing markup, and listeners are wrapped in [`EventHandle`] so their
//! lifetime is tied to the controller that registered them.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::{PageError, Result};

/// Returns the global window.
pub fn window() -> Result<Window> {
	web_sys::window().ok_or_else(|| PageError::missing("window"))
}

/// Returns the window's document.
pub fn document() -> Result<Document> {
	window()?
		.document()
		.ok_or_else(|| PageError::missing("document"))
}

/// Current viewport width in CSS pixels.
pub fn viewport_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|value| value.as_f64())
		.unwrap_or(0.0)
}

/// Current vertical scroll offset.
pub fn scroll_y(window: &Window) -> f64 {
	window.scroll_y().unwrap_or(0.0)
}

/// First element matching `selector`, if any.
pub fn query(root: &Document, selector: &str) -> Result<Option<HtmlElement>> {
	let Some(element) = root.query_selector(selector)? else {
		return Ok(None);
	};
	as_html(element, selector).map(Some)
}

/// First element matching `selector`, or [`PageError::MissingElement`].
pub fn require(root: &Document, selector: &str) -> Result<HtmlElement> {
	query(root, selector)?.ok_or_else(|| PageError::missing(selector))
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
	collect(root.query_selector_all(selector)?, selector)
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
	collect(root.query_selector_all(selector)?, selector)
}

fn collect(nodes: web_sys::NodeList, selector: &str) -> Result<Vec<HtmlElement>> {
	let mut elements = Vec::with_capacity(nodes.length() as usize);
	for index in 0..nodes.length() {
		if let Some(node) = nodes.item(index) {
			if let Ok(element) = node.dyn_into::<HtmlElement>() {
				elements.push(element);
			} else {
				crate::debug_log!("[dom] skipping non-HTML match for {}", selector);
			}
		}
	}
	Ok(elements)
}

/// Casts an element to a more specific type.
pub fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T> {
	element
		.dyn_into::<T>()
		.map_err(|_| PageError::UnexpectedElement {
			selector: selector.to_string(),
			expected,
		})
}

fn as_html(element: Element, selector: &str) -> Result<HtmlElement> {
	cast(element, selector, "HtmlElement")
}

/// Sets one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
	element.style().set_property(property, value)?;
	Ok(())
}

/// Adds a class to the element's class list.
pub fn add_class(element: &Element, class: &str) -> Result<()> {
	element.class_list().add_1(class)?;
	Ok(())
}

/// Removes a class from the element's class list.
pub fn remove_class(element: &Element, class: &str) -> Result<()> {
	element.class_list().remove_1(class)?;
	Ok(())
}

/// Whether the element currently carries `class`.
pub fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}

/// A registered event listener. Dropping the handle unregisters it.
pub struct EventHandle {
	target: EventTarget,
	event_type: &'static str,
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl std::fmt::Debug for EventHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventHandle")
			.field("event_type", &self.event_type)
			.finish()
	}
}

impl Drop for EventHandle {
	fn drop(&mut self) {
		let _ = self.target.remove_event_listener_with_callback(
			self.event_type,
			self.closure.as_ref().unchecked_ref(),
		);
	}
}

/// Registers `handler` for `event_type` on `target`.
pub fn listen<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<EventHandle>
where
	F: FnMut(web_sys::Event) + 'static,
{
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	Ok(EventHandle {
		target: target.clone(),
		event_type,
		closure,
	})
}
