//! Statistic counters
//!
//! A counter counts from 0 up to the integer in its `data-count` attribute
//! over a fixed duration, in equal ticks. The displayed value never
//! decreases, ends exactly on the target, and each element animates at most
//! once (guarded by the `animated` class).

use crate::config::CounterConfig;
use crate::error::{PageError, Result};

/// Class marking a counter that has already started.
pub const ANIMATED_CLASS: &str = "animated";
/// Attribute holding the counter target.
pub const COUNT_ATTRIBUTE: &str = "data-count";
/// Selector of counter elements.
pub const COUNTER_SELECTOR: &str = ".stat-number";

/// Parses a `data-count` value into a non-negative target.
pub fn parse_target(raw: Option<&str>) -> Result<u64> {
	let raw = raw.unwrap_or_default();
	raw.trim()
		.parse::<u64>()
		.map_err(|_| PageError::MalformedAttribute {
			attribute: COUNT_ATTRIBUTE,
			value: raw.to_string(),
		})
}

/// Frame-by-frame state of one counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
	target: u64,
	increment: f64,
	current: f64,
	remaining: u32,
	finished: bool,
}

impl CounterAnimation {
	/// Spreads `target` over `duration_ms / tick_ms` equal steps.
	pub fn new(target: u64, config: &CounterConfig) -> Self {
		let steps = steps(config);
		Self {
			target,
			increment: target as f64 / steps as f64,
			current: 0.0,
			remaining: steps,
			finished: false,
		}
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Advances one tick and returns the value to display. The last tick
	/// lands on the target even if the float sum falls short of it.
	pub fn tick(&mut self) -> u64 {
		if !self.finished {
			self.current += self.increment;
			self.remaining = self.remaining.saturating_sub(1);
			if self.remaining == 0 || self.current >= self.target as f64 {
				self.current = self.target as f64;
				self.finished = true;
			}
		}
		if self.finished {
			self.target
		} else {
			(self.current.floor() as u64).min(self.target)
		}
	}
}

/// Number of ticks in one animation. At least one.
pub fn steps(config: &CounterConfig) -> u32 {
	(config.duration_ms / config.tick_ms.max(1)).max(1)
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::CounterAnimator;

#[cfg(target_arch = "wasm32")]
mod browser {
	use web_sys::HtmlElement;

	use super::{ANIMATED_CLASS, COUNT_ATTRIBUTE, CounterAnimation, parse_target};
	use crate::config::CounterConfig;
	use crate::dom;
	use crate::error::Result;
	use crate::timer::{Interval, TaskSlot};

	/// Starts counters on demand. Holds no per-element state; the
	/// `animated` class on each element is the only guard.
	#[derive(Debug, Clone)]
	pub struct CounterAnimator {
		config: CounterConfig,
	}

	impl CounterAnimator {
		pub fn new(config: &CounterConfig) -> Self {
			Self {
				config: config.clone(),
			}
		}

		/// Sets each counter's text to `0` ahead of its reveal.
		pub fn reset(&self, counters: &[HtmlElement]) {
			for counter in counters {
				counter.set_text_content(Some("0"));
			}
		}

		/// Animates `element` unless it already ran. Returns whether an
		/// animation was started.
		pub fn animate(&self, element: &HtmlElement) -> Result<bool> {
			if dom::has_class(element, ANIMATED_CLASS) {
				return Ok(false);
			}
			dom::add_class(element, ANIMATED_CLASS)?;

			let target = parse_target(element.get_attribute(COUNT_ATTRIBUTE).as_deref())?;
			let mut animation = CounterAnimation::new(target, &self.config);
			let slot: TaskSlot<Interval> = TaskSlot::new();
			let own_slot = slot.clone();
			let element = element.clone();

			slot.replace(Interval::new(self.config.tick_ms, move || {
				let shown = animation.tick();
				element.set_text_content(Some(&shown.to_string()));
				if animation.is_finished() {
					own_slot.cancel();
				}
			}));
			crate::debug_log!("[counter] counting to {}", target);
			Ok(true)
		}
	}
}
