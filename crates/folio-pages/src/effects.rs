//! Pointer feedback: click ripples on buttons and hover lift on cards.

/// Selector of buttons that ripple on click.
pub const BUTTON_SELECTOR: &str = ".btn";
/// Class of the injected ripple overlay.
pub const RIPPLE_CLASS: &str = "btn-ripple";
/// Selector of cards that lift on hover.
pub const CARD_SELECTOR: &str = ".project-card, .tool-card, .timeline-content, .skill-category";

/// Client-space rectangle of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

/// Size and offset of a ripple inside its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
	pub size: f64,
	pub left: f64,
	pub top: f64,
}

impl RippleGeometry {
	/// A square ripple as large as the button's longer side, centered on
	/// the click point.
	pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
		let size = rect.width.max(rect.height);
		Self {
			size,
			left: client_x - rect.left - size / 2.0,
			top: client_y - rect.top - size / 2.0,
		}
	}

	/// Inline styles to apply to the overlay.
	pub fn styles(&self) -> [(&'static str, String); 4] {
		[
			("width", format!("{}px", self.size)),
			("height", format!("{}px", self.size)),
			("left", format!("{}px", self.left)),
			("top", format!("{}px", self.top)),
		]
	}
}

/// Card transform while hovered (`lifted`) or at rest.
pub fn lift_transform(lifted: bool, lift: f64) -> String {
	if lifted {
		format!("translateY(-{}px)", lift)
	} else {
		"translateY(0)".to_string()
	}
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::EffectsController;

#[cfg(target_arch = "wasm32")]
mod browser {
	use wasm_bindgen::JsCast;
	use web_sys::{Document, HtmlElement, MouseEvent};

	use super::{BUTTON_SELECTOR, CARD_SELECTOR, RIPPLE_CLASS, Rect, RippleGeometry, lift_transform};
	use crate::config::EffectsConfig;
	use crate::dom::{self, EventHandle};
	use crate::error::Result;
	use crate::timer;

	fn spawn_ripple(
		document: &Document,
		button: &HtmlElement,
		event: &MouseEvent,
		lifetime_ms: u32,
	) -> Result<()> {
		let bounds = button.get_bounding_client_rect();
		let geometry = RippleGeometry::from_click(
			Rect {
				left: bounds.left(),
				top: bounds.top(),
				width: bounds.width(),
				height: bounds.height(),
			},
			f64::from(event.client_x()),
			f64::from(event.client_y()),
		);

		let ripple: HtmlElement = dom::cast(document.create_element("div")?, "div", "HtmlElement")?;
		dom::add_class(&ripple, RIPPLE_CLASS)?;
		for (property, value) in geometry.styles() {
			dom::set_style(&ripple, property, &value)?;
		}
		button.append_child(&ripple)?;

		timer::defer(lifetime_ms, move || ripple.remove());
		Ok(())
	}

	/// Ripple listeners on buttons and lift listeners on cards.
	pub struct EffectsController {
		listeners: Vec<EventHandle>,
	}

	impl EffectsController {
		pub fn mount(document: &Document, config: &EffectsConfig) -> Result<Self> {
			let mut listeners = Vec::new();

			for button in dom::query_all(document, BUTTON_SELECTOR)? {
				let document = document.clone();
				let target = button.clone();
				let lifetime = config.ripple_lifetime_ms;
				listeners.push(dom::listen(&button, "click", move |event| {
					let Some(event) = event.dyn_ref::<MouseEvent>() else {
						return;
					};
					if let Err(err) = spawn_ripple(&document, &target, event, lifetime) {
						crate::warn_log!("[effects] ripple: {}", err);
					}
				})?);
			}

			for card in dom::query_all(document, CARD_SELECTOR)? {
				let lift = config.card_lift;
				let entered = card.clone();
				listeners.push(dom::listen(&card, "mouseenter", move |_| {
					let _ = dom::set_style(&entered, "transform", &lift_transform(true, lift));
				})?);
				let left = card.clone();
				listeners.push(dom::listen(&card, "mouseleave", move |_| {
					let _ = dom::set_style(&left, "transform", &lift_transform(false, lift));
				})?);
			}

			Ok(Self { listeners })
		}

		/// Number of registered listeners.
		pub fn listener_count(&self) -> usize {
			self.listeners.len()
		}
	}
}
