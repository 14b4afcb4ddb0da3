//! Page configuration
//!
//! Every timing constant and threshold the controllers use lives here.
//! [`PageConfig::default`] is the stock page; a page may override any
//! subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "counter": { "duration_ms": 1200 }, "particles": { "desktop_count": 60 } }
//! </script>
//! ```
//!
//! Missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Top-level configuration, one section per controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Viewport width (px) at and above which the page counts as desktop.
	pub desktop_breakpoint: f64,
	pub loader: LoaderConfig,
	pub hero: HeroConfig,
	pub reveal: RevealConfig,
	pub counter: CounterConfig,
	pub navigation: NavigationConfig,
	pub form: FormConfig,
	pub effects: EffectsConfig,
	pub cursor: CursorConfig,
	pub particles: ParticleConfig,
}

impl PageConfig {
	/// Parses a JSON override block on top of the defaults.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::config::PageConfig;
	///
	/// let config = PageConfig::from_json(r#"{ "counter": { "duration_ms": 1000 } }"#).unwrap();
	/// assert_eq!(config.counter.duration_ms, 1000);
	/// assert_eq!(config.counter.tick_ms, 16);
	/// assert_eq!(config.desktop_breakpoint, 768.0);
	/// ```
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Whether a viewport of `width` pixels is treated as desktop.
	pub fn is_desktop(&self, width: f64) -> bool {
		width >= self.desktop_breakpoint
	}

	/// Reads `#folio-config` from the document, falling back to defaults.
	#[cfg(target_arch = "wasm32")]
	pub fn from_document(document: &web_sys::Document) -> Self {
		let Some(text) = document
			.get_element_by_id(CONFIG_ELEMENT_ID)
			.and_then(|el| el.text_content())
		else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => config,
			Err(err) => {
				crate::warn_log!("[config] ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
				Self::default()
			}
		}
	}
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			desktop_breakpoint: 768.0,
			loader: LoaderConfig::default(),
			hero: HeroConfig::default(),
			reveal: RevealConfig::default(),
			counter: CounterConfig::default(),
			navigation: NavigationConfig::default(),
			form: FormConfig::default(),
			effects: EffectsConfig::default(),
			cursor: CursorConfig::default(),
			particles: ParticleConfig::default(),
		}
	}
}

/// Loading screen timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
	/// Delay between consecutive logo letters.
	pub letter_stagger_ms: u32,
	/// Interval between progress increments.
	pub tick_ms: u32,
	/// Lower bound of a progress increment, percent. Must be positive.
	pub min_step: f64,
	/// Upper bound (exclusive) of a progress increment, percent.
	pub max_step: f64,
	/// Pause between reaching 100% and hiding the loader.
	pub hide_delay_ms: u32,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			letter_stagger_ms: 300,
			tick_ms: 50,
			min_step: 0.5,
			max_step: 10.0,
			hide_delay_ms: 500,
		}
	}
}

/// Hero title letter entrance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
	pub initial_delay_ms: u32,
	pub letter_stagger_ms: u32,
	/// Starting vertical offset of each letter, px.
	pub start_offset: f64,
}

impl Default for HeroConfig {
	fn default() -> Self {
		Self {
			initial_delay_ms: 100,
			letter_stagger_ms: 100,
			start_offset: 30.0,
		}
	}
}

/// Scroll reveal and parallax.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// Visible fraction that counts as "entered the viewport".
	pub threshold: f64,
	pub root_margin: String,
	/// Delay before a revealed skill bar starts filling.
	pub skill_bar_delay_ms: u32,
	/// Parallax speed of the first floating shape.
	pub parallax_base_speed: f64,
	/// Extra parallax speed per subsequent shape.
	pub parallax_speed_step: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin: "0px".to_string(),
			skill_bar_delay_ms: 300,
			parallax_base_speed: 0.3,
			parallax_speed_step: 0.1,
		}
	}
}

/// Statistic counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
	pub duration_ms: u32,
	pub tick_ms: u32,
}

impl Default for CounterConfig {
	fn default() -> Self {
		Self {
			duration_ms: 2000,
			tick_ms: 16,
		}
	}
}

/// Navigation links and section tracking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
	/// Height of the fixed header subtracted from scroll targets.
	pub header_offset: f64,
	/// Distance below the viewport top used to pick the current section.
	pub lookahead: f64,
	/// Delay of the first active-link synchronization after start.
	pub initial_sync_delay_ms: u32,
}

impl Default for NavigationConfig {
	fn default() -> Self {
		Self {
			header_offset: 100.0,
			lookahead: 150.0,
			initial_sync_delay_ms: 100,
		}
	}
}

/// Contact form submit simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	pub sending_ms: u32,
	pub sent_ms: u32,
	pub sending_label: String,
	pub sent_label: String,
	/// Background applied to the submit button while in the sent state.
	pub sent_background: String,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			sending_ms: 1500,
			sent_ms: 3000,
			sending_label: "Sending...".to_string(),
			sent_label: "Message Sent!".to_string(),
			sent_background: "linear-gradient(45deg, #4CAF50, #45a049)".to_string(),
		}
	}
}

/// Ripple and card hover feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
	pub ripple_lifetime_ms: u32,
	/// Upward translation of a hovered card, px.
	pub card_lift: f64,
}

impl Default for EffectsConfig {
	fn default() -> Self {
		Self {
			ripple_lifetime_ms: 600,
			card_lift: 10.0,
		}
	}
}

/// Custom cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
	/// Delay between the dot and the ring following the pointer.
	pub ring_lag_ms: u32,
	pub dot_size: f64,
	pub dot_hover_size: f64,
	pub ring_size: f64,
	pub ring_hover_size: f64,
	pub ring_color: String,
	pub ring_hover_color: String,
}

impl Default for CursorConfig {
	fn default() -> Self {
		Self {
			ring_lag_ms: 50,
			dot_size: 8.0,
			dot_hover_size: 16.0,
			ring_size: 30.0,
			ring_hover_size: 50.0,
			ring_color: "rgba(108, 99, 255, 0.5)".to_string(),
			ring_hover_color: "var(--accent-color)".to_string(),
		}
	}
}

/// Decorative particle population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	pub desktop_count: usize,
	pub narrow_count: usize,
	pub container_id: String,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			desktop_count: 40,
			narrow_count: 20,
			container_id: "particles".to_string(),
		}
	}
}
