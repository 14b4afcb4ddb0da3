//! Custom cursor
//!
//! On desktop-width viewports a dot follows the pointer immediately and a
//! ring follows it after a short lag. Hovering an interactive element grows
//! both and recolors the ring. Below the breakpoint both visuals are hidden
//! and every listener is detached; a resize across the breakpoint switches
//! modes.
//!
//! The ring keeps a single pending update. Pointer moves during the lag only
//! replace the target position, so the ring always lands on the most recent
//! position and never on a stale one.

use crate::config::CursorConfig;

/// Selector of the lead dot.
pub const DOT_SELECTOR: &str = ".cursor-dot";
/// Selector of the trailing ring.
pub const RING_SELECTOR: &str = ".cursor-ring";
/// Elements that enlarge the cursor on hover.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .project-card, .tool-card, .play-overlay";

/// Whether the custom cursor is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
	Desktop,
	Hidden,
}

impl CursorMode {
	pub fn from_width(width: f64, breakpoint: f64) -> Self {
		if width >= breakpoint {
			Self::Desktop
		} else {
			Self::Hidden
		}
	}
}

/// Sizes and ring color for one hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorLook {
	pub dot_size: f64,
	pub ring_size: f64,
	pub ring_color: String,
}

impl CursorLook {
	pub fn idle(config: &CursorConfig) -> Self {
		Self {
			dot_size: config.dot_size,
			ring_size: config.ring_size,
			ring_color: config.ring_color.clone(),
		}
	}

	pub fn hover(config: &CursorConfig) -> Self {
		Self {
			dot_size: config.dot_hover_size,
			ring_size: config.ring_hover_size,
			ring_color: config.ring_hover_color.clone(),
		}
	}
}

/// Pointer position in client coordinates.
pub type Point = (f64, f64);

/// Coalesces pointer moves into at most one pending ring update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingFollower {
	target: Option<Point>,
	scheduled: bool,
}

impl RingFollower {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a pointer move. Returns `true` when the caller must schedule
	/// a ring update; `false` when one is already pending and will pick up
	/// this position.
	pub fn on_move(&mut self, point: Point) -> bool {
		self.target = Some(point);
		if self.scheduled {
			return false;
		}
		self.scheduled = true;
		true
	}

	/// Called when the scheduled update fires; yields the latest position.
	pub fn on_fire(&mut self) -> Option<Point> {
		self.scheduled = false;
		self.target.take()
	}

	/// Forgets the pending update, e.g. when the cursor is switched off.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn is_scheduled(&self) -> bool {
		self.scheduled
	}
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::CustomCursor;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use wasm_bindgen::JsCast;
	use web_sys::{Document, HtmlElement, MouseEvent};

	use super::{
		CursorLook, CursorMode, DOT_SELECTOR, INTERACTIVE_SELECTOR, RING_SELECTOR, RingFollower,
	};
	use crate::config::CursorConfig;
	use crate::dom::{self, EventHandle};
	use crate::error::Result;
	use crate::timer::{TaskSlot, Timeout};

	fn place(element: &HtmlElement, (x, y): super::Point) {
		let _ = dom::set_style(element, "left", &format!("{}px", x));
		let _ = dom::set_style(element, "top", &format!("{}px", y));
	}

	fn apply_look(dot: &HtmlElement, ring: &HtmlElement, look: &CursorLook) {
		let dot_size = format!("{}px", look.dot_size);
		let ring_size = format!("{}px", look.ring_size);
		let _ = dom::set_style(dot, "width", &dot_size);
		let _ = dom::set_style(dot, "height", &dot_size);
		let _ = dom::set_style(ring, "width", &ring_size);
		let _ = dom::set_style(ring, "height", &ring_size);
		let _ = dom::set_style(ring, "border-color", &look.ring_color);
	}

	/// Dot and ring cursor, switched on and off by viewport width.
	pub struct CustomCursor {
		document: Document,
		dot: HtmlElement,
		ring: HtmlElement,
		config: CursorConfig,
		breakpoint: f64,
		mode: Cell<Option<CursorMode>>,
		listeners: RefCell<Vec<EventHandle>>,
		follower: Rc<RefCell<RingFollower>>,
		ring_update: TaskSlot<Timeout>,
	}

	impl CustomCursor {
		/// Finds the cursor visuals and applies the mode for `viewport_width`.
		pub fn mount(
			document: &Document,
			config: &CursorConfig,
			breakpoint: f64,
			viewport_width: f64,
		) -> Result<Self> {
			let cursor = Self {
				document: document.clone(),
				dot: dom::require(document, DOT_SELECTOR)?,
				ring: dom::require(document, RING_SELECTOR)?,
				config: config.clone(),
				breakpoint,
				mode: Cell::new(None),
				listeners: RefCell::new(Vec::new()),
				follower: Rc::new(RefCell::new(RingFollower::new())),
				ring_update: TaskSlot::new(),
			};
			cursor.apply_viewport(viewport_width)?;
			Ok(cursor)
		}

		pub fn mode(&self) -> Option<CursorMode> {
			self.mode.get()
		}

		/// Re-evaluates the breakpoint. A no-op unless the mode changes.
		pub fn apply_viewport(&self, width: f64) -> Result<()> {
			let mode = CursorMode::from_width(width, self.breakpoint);
			if self.mode.get() == Some(mode) {
				return Ok(());
			}
			match mode {
				CursorMode::Desktop => self.enable()?,
				CursorMode::Hidden => self.disable()?,
			}
			self.mode.set(Some(mode));
			crate::info_log!("[cursor] {:?} mode at {}px", mode, width);
			Ok(())
		}

		fn enable(&self) -> Result<()> {
			dom::set_style(&self.dot, "display", "")?;
			dom::set_style(&self.ring, "display", "")?;

			let mut listeners = Vec::new();
			let dot = self.dot.clone();
			let ring = self.ring.clone();
			let follower = Rc::clone(&self.follower);
			let ring_update = self.ring_update.clone();
			let lag = self.config.ring_lag_ms;
			listeners.push(dom::listen(&self.document, "mousemove", move |event| {
				let Some(event) = event.dyn_ref::<MouseEvent>() else {
					return;
				};
				let point = (f64::from(event.client_x()), f64::from(event.client_y()));
				place(&dot, point);

				if !follower.borrow_mut().on_move(point) {
					return;
				}
				let ring = ring.clone();
				let follower = Rc::clone(&follower);
				ring_update.replace(Timeout::new(lag, move || {
					let latest = follower.borrow_mut().on_fire();
					if let Some(point) = latest {
						place(&ring, point);
					}
				}));
			})?);

			let hover = CursorLook::hover(&self.config);
			let idle = CursorLook::idle(&self.config);
			for element in dom::query_all(&self.document, INTERACTIVE_SELECTOR)? {
				let (dot, ring, look) = (self.dot.clone(), self.ring.clone(), hover.clone());
				listeners.push(dom::listen(&element, "mouseenter", move |_| {
					apply_look(&dot, &ring, &look);
				})?);
				let (dot, ring, look) = (self.dot.clone(), self.ring.clone(), idle.clone());
				listeners.push(dom::listen(&element, "mouseleave", move |_| {
					apply_look(&dot, &ring, &look);
				})?);
			}

			*self.listeners.borrow_mut() = listeners;
			Ok(())
		}

		fn disable(&self) -> Result<()> {
			self.listeners.borrow_mut().clear();
			self.ring_update.cancel();
			self.follower.borrow_mut().reset();
			dom::set_style(&self.dot, "display", "none")?;
			dom::set_style(&self.ring, "display", "none")?;
			Ok(())
		}
	}
}
