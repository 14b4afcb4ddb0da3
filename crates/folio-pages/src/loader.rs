//! Loading screen sequencer
//!
//! Fades the logo letters in one after another, fills the progress bar with
//! random increments until it reaches 100%, hides the loader and then hands
//! control to the rest of the page exactly once.
//!
//! ```text
//! letters: 0ms, 300ms, 600ms, ...
//! bar:     +[0.5, 10)% every 50ms ──► 100% ──(500ms)──► hide ──► on_ready()
//! ```
//!
//! Every increment is strictly positive, so the bar reaches 100% in at most
//! `ceil(100 / min_step)` ticks.

use std::ops::Range;

use rand::Rng;

use crate::config::LoaderConfig;

/// Selector of the loader overlay.
pub const LOADER_SELECTOR: &str = ".loader";
/// Selector of the progress bar inside the loader.
pub const PROGRESS_SELECTOR: &str = ".loading-progress";
/// Selector of the logo letters.
pub const LETTER_SELECTOR: &str = ".logo-letter";

/// Upper bound of the progress value.
pub const COMPLETE: f64 = 100.0;

/// Result of one progress tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressStep {
	/// The bar moved to the contained value, still below 100.
	Advanced(f64),
	/// The bar just reached 100. Reported once.
	Completed,
	/// The bar was already full; nothing changed.
	Finished,
}

/// Progress of the loading bar, in percent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoaderProgress {
	value: f64,
}

impl LoaderProgress {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn value(&self) -> f64 {
		self.value
	}

	pub fn is_complete(&self) -> bool {
		self.value >= COMPLETE
	}

	/// Adds `increment`, clamping at 100. Non-positive or NaN increments
	/// leave the value unchanged.
	pub fn advance(&mut self, increment: f64) -> ProgressStep {
		if self.is_complete() {
			return ProgressStep::Finished;
		}
		if increment > 0.0 {
			self.value = (self.value + increment).min(COMPLETE);
		}
		if self.is_complete() {
			ProgressStep::Completed
		} else {
			ProgressStep::Advanced(self.value)
		}
	}

	/// Advances by a random amount drawn from [`step_range`].
	pub fn advance_random<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		config: &LoaderConfig,
	) -> ProgressStep {
		let increment = rng.gen_range(step_range(config));
		self.advance(increment)
	}

	/// CSS width of the bar for the current value.
	pub fn width(&self) -> String {
		format!("{}%", self.value)
	}
}

/// Range random increments are drawn from. Always non-empty and positive,
/// even for a nonsensical configuration.
pub fn step_range(config: &LoaderConfig) -> Range<f64> {
	let min = if config.min_step.is_finite() && config.min_step > 0.0 {
		config.min_step
	} else {
		LoaderConfig::default().min_step
	};
	let max = if config.max_step.is_finite() && config.max_step > min {
		config.max_step
	} else {
		min * 2.0
	};
	min..max
}

/// Worst-case number of ticks before the bar is full.
pub fn max_ticks(config: &LoaderConfig) -> usize {
	(COMPLETE / step_range(config).start).ceil() as usize
}

/// Delay before logo letter `index` fades in.
pub fn letter_delay(index: usize, config: &LoaderConfig) -> u32 {
	config.letter_stagger_ms.saturating_mul(index as u32)
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::LoaderSequencer;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::RefCell;
	use std::rc::Rc;

	use web_sys::{Document, HtmlElement};

	use super::{LETTER_SELECTOR, LOADER_SELECTOR, LoaderProgress, PROGRESS_SELECTOR, ProgressStep};
	use super::letter_delay;
	use crate::config::LoaderConfig;
	use crate::dom;
	use crate::error::Result;
	use crate::timer::{self, Interval, TaskSlot, Timeout};

	/// The loading screen and its progress ticker.
	pub struct LoaderSequencer {
		loader: HtmlElement,
		bar: HtmlElement,
		letters: Vec<HtmlElement>,
		config: LoaderConfig,
		progress: Rc<RefCell<LoaderProgress>>,
		ticker: TaskSlot<Interval>,
		hide: TaskSlot<Timeout>,
	}

	impl LoaderSequencer {
		/// Looks up the loader markup.
		pub fn mount(document: &Document, config: &LoaderConfig) -> Result<Self> {
			Ok(Self {
				loader: dom::require(document, LOADER_SELECTOR)?,
				bar: dom::require(document, PROGRESS_SELECTOR)?,
				letters: dom::query_all(document, LETTER_SELECTOR)?,
				config: config.clone(),
				progress: Rc::new(RefCell::new(LoaderProgress::new())),
				ticker: TaskSlot::new(),
				hide: TaskSlot::new(),
			})
		}

		/// Current bar value, percent.
		pub fn progress(&self) -> f64 {
			self.progress.borrow().value()
		}

		/// Starts the letter stagger and the progress ticker. `on_ready` runs
		/// once, after the bar is full and the loader is hidden.
		pub fn start<F>(&self, on_ready: F)
		where
			F: FnOnce() + 'static,
		{
			for (index, letter) in self.letters.iter().enumerate() {
				let letter = letter.clone();
				timer::defer(letter_delay(index, &self.config), move || {
					let _ = dom::set_style(&letter, "opacity", "1");
					let _ = dom::set_style(&letter, "transform", "translateY(0)");
				});
			}

			let progress = Rc::clone(&self.progress);
			let bar = self.bar.clone();
			let loader = self.loader.clone();
			let ticker = self.ticker.clone();
			let hide = self.hide.clone();
			let config = self.config.clone();
			let mut on_ready = Some(on_ready);

			self.ticker.replace(Interval::new(self.config.tick_ms, move || {
				let step = progress
					.borrow_mut()
					.advance_random(&mut rand::thread_rng(), &config);
				let _ = dom::set_style(&bar, "width", &progress.borrow().width());

				if step != ProgressStep::Completed {
					return;
				}
				ticker.cancel();

				let Some(ready) = on_ready.take() else {
					return;
				};
				let loader = loader.clone();
				hide.replace(Timeout::new(config.hide_delay_ms, move || {
					let _ = dom::set_style(&loader, "opacity", "0");
					let _ = dom::set_style(&loader, "visibility", "hidden");
					crate::info_log!("[loader] hidden, starting page interactions");
					ready();
				}));
			}));
		}
	}
}
