//! Mobile navigation menu
//!
//! One button toggles the `.nav-links` panel. While open, both carry the
//! `active` class and the three `.menu-line` bars fold into an "X".
//! [`MenuState::close`] forces the closed state and is a no-op when already
//! closed; navigation clicks and resizes to desktop width use it.

/// Selector of the toggle button.
pub const BUTTON_SELECTOR: &str = ".nav-menu-btn";
/// Selector of the collapsible panel.
pub const PANEL_SELECTOR: &str = ".nav-links";
/// Selector of the bars inside the button.
pub const LINE_SELECTOR: &str = ".menu-line";
/// Class marking the open state on button and panel.
pub const OPEN_CLASS: &str = "active";

/// Open/closed state of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
	#[default]
	Closed,
	Open,
}

impl MenuState {
	pub fn is_open(self) -> bool {
		matches!(self, Self::Open)
	}

	/// The state after one click on the button.
	pub fn toggled(self) -> Self {
		match self {
			Self::Closed => Self::Open,
			Self::Open => Self::Closed,
		}
	}

	/// Forces the closed state. Returns whether anything changed.
	pub fn close(&mut self) -> bool {
		let changed = self.is_open();
		*self = Self::Closed;
		changed
	}

	/// Inline style of each of the three bars, top to bottom.
	pub fn bar_styles(self) -> [(&'static str, &'static str); 3] {
		match self {
			Self::Open => [
				("transform", "rotate(45deg) translate(6px, 6px)"),
				("opacity", "0"),
				("transform", "rotate(-45deg) translate(6px, -6px)"),
			],
			Self::Closed => [("transform", "none"), ("opacity", "1"), ("transform", "none")],
		}
	}
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::MobileMenu;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::{Cell, RefCell};
	use std::rc::{Rc, Weak};

	use web_sys::{Document, HtmlElement};

	use super::{BUTTON_SELECTOR, LINE_SELECTOR, MenuState, OPEN_CLASS, PANEL_SELECTOR};
	use crate::dom::{self, EventHandle};
	use crate::error::Result;

	struct MenuParts {
		button: HtmlElement,
		panel: Option<HtmlElement>,
		lines: Vec<HtmlElement>,
	}

	/// The hamburger button and its panel. A page without the button gets
	/// an inert menu whose operations do nothing.
	pub struct MobileMenu {
		parts: Option<MenuParts>,
		state: Cell<MenuState>,
		click: RefCell<Option<EventHandle>>,
	}

	impl MobileMenu {
		pub fn mount(document: &Document) -> Result<Rc<Self>> {
			let parts = match dom::query(document, BUTTON_SELECTOR)? {
				Some(button) => {
					let lines = dom::query_all_within(&button, LINE_SELECTOR)?;
					Some(MenuParts {
						panel: dom::query(document, PANEL_SELECTOR)?,
						lines,
						button,
					})
				}
				None => {
					crate::info_log!("[menu] no {}, mobile menu inert", BUTTON_SELECTOR);
					None
				}
			};

			let menu = Rc::new(Self {
				parts,
				state: Cell::new(MenuState::Closed),
				click: RefCell::new(None),
			});

			if let Some(parts) = &menu.parts {
				let weak: Weak<Self> = Rc::downgrade(&menu);
				let handle = dom::listen(&parts.button, "click", move |_| {
					if let Some(menu) = weak.upgrade() {
						menu.toggle();
					}
				})?;
				*menu.click.borrow_mut() = Some(handle);
			}
			Ok(menu)
		}

		pub fn state(&self) -> MenuState {
			self.state.get()
		}

		/// Flips between open and closed.
		pub fn toggle(&self) {
			let next = self.state.get().toggled();
			self.render(next);
		}

		/// Forces the menu closed; does nothing when it already is.
		pub fn close(&self) {
			let mut state = self.state.get();
			if state.close() {
				self.render(state);
			}
		}

		fn render(&self, state: MenuState) {
			self.state.set(state);
			let Some(parts) = &self.parts else {
				return;
			};
			let apply = |element: &HtmlElement| {
				let _ = if state.is_open() {
					dom::add_class(element, OPEN_CLASS)
				} else {
					dom::remove_class(element, OPEN_CLASS)
				};
			};
			apply(&parts.button);
			if let Some(panel) = &parts.panel {
				apply(panel);
			}
			for (line, (property, value)) in parts.lines.iter().zip(state.bar_styles()) {
				let _ = dom::set_style(line, property, value);
			}
		}
	}
}
