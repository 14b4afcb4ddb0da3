//! Scroll reveal engine
//!
//! Elements matching [`REVEAL_SELECTOR`] get the `animate-in` class the
//! first time they become visible. Skill bars then fill to their
//! `data-width` and counters start counting. Separately, every scroll event
//! moves the `.floating-shape` decorations at a per-shape parallax speed.

use crate::config::RevealConfig;
use crate::error::{PageError, Result};

/// Elements observed for viewport entry.
pub const REVEAL_SELECTOR: &str = ".skill-progress, .stat-number, .project-card, .tool-card, .timeline-item, .category-title, .section-title";
/// Class applied on first reveal.
pub const REVEALED_CLASS: &str = "animate-in";
/// Class identifying skill bars.
pub const SKILL_BAR_CLASS: &str = "skill-progress";
/// Class identifying counters.
pub const COUNTER_CLASS: &str = "stat-number";
/// Attribute holding a skill bar's target width, percent.
pub const WIDTH_ATTRIBUTE: &str = "data-width";
/// Decorations moved by the parallax effect.
pub const SHAPE_SELECTOR: &str = ".floating-shape";

/// What a revealed element does besides receiving the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
	SkillBar,
	Counter,
	Plain,
}

impl RevealKind {
	/// Classifies an element from its class list.
	pub fn classify(has_class: impl Fn(&str) -> bool) -> Self {
		if has_class(SKILL_BAR_CLASS) {
			Self::SkillBar
		} else if has_class(COUNTER_CLASS) {
			Self::Counter
		} else {
			Self::Plain
		}
	}
}

/// Whether a visibility change should reveal the element. Only the first
/// entry of an unmarked element does anything.
pub fn should_reveal(intersecting: bool, already_revealed: bool) -> bool {
	intersecting && !already_revealed
}

/// Parses a skill bar's `data-width` into a CSS width.
pub fn skill_width(raw: Option<&str>) -> Result<String> {
	let raw = raw.unwrap_or_default();
	match raw.trim().parse::<f64>() {
		Ok(percent) if percent.is_finite() && percent >= 0.0 => Ok(format!("{}%", percent)),
		_ => Err(PageError::MalformedAttribute {
			attribute: WIDTH_ATTRIBUTE,
			value: raw.to_string(),
		}),
	}
}

/// Parallax speed of the shape at `index`.
pub fn parallax_speed(index: usize, config: &RevealConfig) -> f64 {
	config.parallax_base_speed + index as f64 * config.parallax_speed_step
}

/// Transform of the shape at `index` for a given scroll offset.
pub fn parallax_transform(scroll_y: f64, index: usize, config: &RevealConfig) -> String {
	format!("translateY({}px)", scroll_y * parallax_speed(index, config))
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::ScrollReveal;

#[cfg(target_arch = "wasm32")]
mod browser {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{
		Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
		IntersectionObserverInit, Window,
	};

	use super::{
		REVEAL_SELECTOR, REVEALED_CLASS, RevealKind, SHAPE_SELECTOR, parallax_transform,
		should_reveal, skill_width, WIDTH_ATTRIBUTE,
	};
	use crate::config::RevealConfig;
	use crate::counter::{COUNTER_SELECTOR, CounterAnimator};
	use crate::dom::{self, EventHandle};
	use crate::error::Result;
	use crate::timer;

	type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

	/// Visibility observer plus the parallax scroll listener.
	pub struct ScrollReveal {
		observer: IntersectionObserver,
		_callback: ObserverCallback,
		_scroll: EventHandle,
		observed: usize,
	}

	impl ScrollReveal {
		/// Zeroes skill bars and counters, then starts observing.
		pub fn mount(
			window: &Window,
			document: &Document,
			config: &RevealConfig,
			counters: CounterAnimator,
		) -> Result<Self> {
			for bar in dom::query_all(document, ".skill-progress")? {
				dom::set_style(&bar, "width", "0%")?;
			}
			counters.reset(&dom::query_all(document, COUNTER_SELECTOR)?);

			let skill_bar_delay = config.skill_bar_delay_ms;
			let callback: ObserverCallback = Closure::new(
				move |entries: js_sys::Array, _observer: IntersectionObserver| {
					for entry in entries.iter() {
						let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
							continue;
						};
						let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
							continue;
						};
						if let Err(err) = reveal(&target, entry.is_intersecting(), skill_bar_delay, &counters) {
							crate::warn_log!("[reveal] {}", err);
						}
					}
				},
			);

			let options = IntersectionObserverInit::new();
			options.set_threshold(&JsValue::from_f64(config.threshold));
			options.set_root_margin(&config.root_margin);
			let observer = IntersectionObserver::new_with_options(
				callback.as_ref().unchecked_ref(),
				&options,
			)?;

			let targets = dom::query_all(document, REVEAL_SELECTOR)?;
			for target in &targets {
				observer.observe(target);
			}

			let shapes = dom::query_all(document, SHAPE_SELECTOR)?;
			let scroll_window = window.clone();
			let parallax = config.clone();
			let scroll = dom::listen(window, "scroll", move |_| {
				let scroll_y = dom::scroll_y(&scroll_window);
				for (index, shape) in shapes.iter().enumerate() {
					let _ = dom::set_style(shape, "transform", &parallax_transform(scroll_y, index, &parallax));
				}
			})?;

			Ok(Self {
				observer,
				_callback: callback,
				_scroll: scroll,
				observed: targets.len(),
			})
		}

		/// Number of elements under observation.
		pub fn observed(&self) -> usize {
			self.observed
		}
	}

	impl Drop for ScrollReveal {
		fn drop(&mut self) {
			self.observer.disconnect();
		}
	}

	fn reveal(
		target: &HtmlElement,
		intersecting: bool,
		skill_bar_delay: u32,
		counters: &CounterAnimator,
	) -> Result<()> {
		if !should_reveal(intersecting, dom::has_class(target, REVEALED_CLASS)) {
			return Ok(());
		}
		dom::add_class(target, REVEALED_CLASS)?;

		match RevealKind::classify(|class| dom::has_class(target, class)) {
			RevealKind::SkillBar => {
				let width = skill_width(target.get_attribute(WIDTH_ATTRIBUTE).as_deref())?;
				let bar = target.clone();
				timer::defer(skill_bar_delay, move || {
					let _ = dom::set_style(&bar, "width", &width);
				});
			}
			RevealKind::Counter => {
				counters.animate(target)?;
			}
			RevealKind::Plain => {}
		}
		Ok(())
	}
}
