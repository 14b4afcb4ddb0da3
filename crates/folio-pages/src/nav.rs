//! Navigation controller
//!
//! Clicking a `.nav-link` makes it the only active link, smooth-scrolls to
//! the section named by its `#fragment` (minus the fixed header height) and
//! closes the mobile menu. Every scroll event independently recomputes the
//! section under `scrollY + lookahead` and moves the active marker there.
//!
//! The two can disagree: right after a click, the clicked link stays active
//! until the next scroll event re-derives it from the position. That window
//! is accepted behavior.

/// Selector of navigation links.
pub const LINK_SELECTOR: &str = ".nav-link";
/// Selector of sections tracked for the active link.
pub const SECTION_SELECTOR: &str = "section[id]";
/// Class of the active link.
pub const ACTIVE_CLASS: &str = "active";

/// Vertical extent of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

impl SectionBounds {
	pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
		Self {
			id: id.into(),
			top,
			height,
		}
	}

	/// Whether `position` lies in `[top, top + height)`.
	pub fn contains(&self, position: f64) -> bool {
		position >= self.top && position < self.top + self.height
	}
}

/// Id of the section containing `scroll_y + lookahead`. When sections
/// overlap, the last one in document order wins.
pub fn current_section(scroll_y: f64, lookahead: f64, sections: &[SectionBounds]) -> Option<&str> {
	let position = scroll_y + lookahead;
	sections
		.iter()
		.rev()
		.find(|section| section.contains(position))
		.map(|section| section.id.as_str())
}

/// Scroll offset that puts a section's top just under the header.
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
	section_top - header_offset
}

/// The id a link points at, for in-page `#fragment` links.
pub fn fragment_id(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a link with `href` should be active while `current` is shown.
pub fn is_active_link(href: Option<&str>, current: Option<&str>) -> bool {
	match (href.and_then(fragment_id), current) {
		(Some(target), Some(current)) => target == current,
		_ => false,
	}
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::NavigationController;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::rc::Rc;

	use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

	use super::{
		ACTIVE_CLASS, LINK_SELECTOR, SECTION_SELECTOR, SectionBounds, current_section,
		fragment_id, is_active_link, scroll_target,
	};
	use crate::config::NavigationConfig;
	use crate::dom::{self, EventHandle};
	use crate::error::Result;
	use crate::menu::MobileMenu;
	use crate::timer::{TaskSlot, Timeout};

	struct NavState {
		window: Window,
		document: Document,
		links: Vec<HtmlElement>,
		sections: Vec<HtmlElement>,
		config: NavigationConfig,
	}

	impl NavState {
		fn section_bounds(&self) -> Vec<SectionBounds> {
			self.sections
				.iter()
				.map(|section| {
					SectionBounds::new(
						section.id(),
						f64::from(section.offset_top()),
						f64::from(section.client_height()),
					)
				})
				.collect()
		}

		fn sync_with_scroll(&self) {
			let bounds = self.section_bounds();
			let current = current_section(dom::scroll_y(&self.window), self.config.lookahead, &bounds);
			crate::debug_log!("[nav] current section {:?}", current);
			for link in &self.links {
				let _ = dom::remove_class(link, ACTIVE_CLASS);
				if is_active_link(link.get_attribute("href").as_deref(), current) {
					let _ = dom::add_class(link, ACTIVE_CLASS);
				}
			}
		}

		fn activate(&self, clicked: &HtmlElement) {
			for link in &self.links {
				let _ = dom::remove_class(link, ACTIVE_CLASS);
			}
			let _ = dom::add_class(clicked, ACTIVE_CLASS);

			let href = clicked.get_attribute("href");
			let Some(id) = href.as_deref().and_then(fragment_id) else {
				return;
			};
			let Some(section) = self.document.get_element_by_id(id) else {
				crate::warn_log!("[nav] no section #{}", id);
				return;
			};
			let Ok(section) = dom::cast::<HtmlElement>(section, id, "HtmlElement") else {
				return;
			};

			let options = ScrollToOptions::new();
			options.set_top(scroll_target(f64::from(section.offset_top()), self.config.header_offset));
			options.set_behavior(ScrollBehavior::Smooth);
			self.window.scroll_to_with_scroll_to_options(&options);
		}
	}

	/// Link click handling and scroll-synchronized active state.
	pub struct NavigationController {
		state: Rc<NavState>,
		_clicks: Vec<EventHandle>,
		_scroll: EventHandle,
		_initial_sync: TaskSlot<Timeout>,
	}

	impl NavigationController {
		pub fn mount(
			window: &Window,
			document: &Document,
			config: &NavigationConfig,
			menu: Option<Rc<MobileMenu>>,
		) -> Result<Self> {
			let state = Rc::new(NavState {
				window: window.clone(),
				document: document.clone(),
				links: dom::query_all(document, LINK_SELECTOR)?,
				sections: dom::query_all(document, SECTION_SELECTOR)?,
				config: config.clone(),
			});

			let mut clicks = Vec::with_capacity(state.links.len());
			for link in &state.links {
				let state = Rc::clone(&state);
				let menu = menu.clone();
				let clicked = link.clone();
				clicks.push(dom::listen(link, "click", move |event| {
					event.prevent_default();
					state.activate(&clicked);
					if let Some(menu) = &menu {
						menu.close();
					}
				})?);
			}

			let scroll_state = Rc::clone(&state);
			let scroll = dom::listen(window, "scroll", move |_| scroll_state.sync_with_scroll())?;

			let initial_sync = TaskSlot::new();
			let sync_state = Rc::clone(&state);
			initial_sync.replace(Timeout::new(config.initial_sync_delay_ms, move || {
				sync_state.sync_with_scroll();
			}));

			Ok(Self {
				state,
				_clicks: clicks,
				_scroll: scroll,
				_initial_sync: initial_sync,
			})
		}

		/// Number of links under control.
		pub fn link_count(&self) -> usize {
			self.state.links.len()
		}
	}
}
