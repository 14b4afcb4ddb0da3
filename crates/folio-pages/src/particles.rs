//! Particle background
//!
//! A fixed population of small dots, created once inside `#particles`.
//! Every particle draws its own size, position, opacity, timing and drift
//! target, and gets its own `@keyframes` rule so no two drift alike.
//! Particles are never removed or respawned.

use std::ops::Range;

use rand::Rng;

use crate::config::ParticleConfig;

/// Class of each particle element.
pub const PARTICLE_CLASS: &str = "particle";
/// Prefix of the generated keyframe names.
pub const ANIMATION_PREFIX: &str = "floatParticle";

/// Diameter, px.
pub const SIZE_RANGE: Range<f64> = 1.0..5.0;
/// Horizontal and vertical position, percent of the container.
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;
/// Drift cycle length, seconds.
pub const DURATION_RANGE: Range<f64> = 10.0..30.0;
/// Start delay, seconds.
pub const DELAY_RANGE: Range<f64> = 0.0..5.0;
/// Fill alpha.
pub const OPACITY_RANGE: Range<f64> = 0.1..0.6;
/// Drift target offset on each axis, px.
pub const DRIFT_RANGE: Range<f64> = -50.0..50.0;

/// Randomly drawn, immutable parameters of one particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
	pub size: f64,
	pub x: f64,
	pub y: f64,
	pub duration: f64,
	pub delay: f64,
	pub opacity: f64,
	pub drift_x: f64,
	pub drift_y: f64,
}

impl ParticleSpec {
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self {
			size: rng.gen_range(SIZE_RANGE),
			x: rng.gen_range(POSITION_RANGE),
			y: rng.gen_range(POSITION_RANGE),
			duration: rng.gen_range(DURATION_RANGE),
			delay: rng.gen_range(DELAY_RANGE),
			opacity: rng.gen_range(OPACITY_RANGE),
			drift_x: rng.gen_range(DRIFT_RANGE),
			drift_y: rng.gen_range(DRIFT_RANGE),
		}
	}

	/// Inline styles placing the particle and binding it to `animation`.
	pub fn styles(&self, animation: &str) -> Vec<(&'static str, String)> {
		vec![
			("width", format!("{}px", self.size)),
			("height", format!("{}px", self.size)),
			("left", format!("{}%", self.x)),
			("top", format!("{}%", self.y)),
			("background", format!("rgba(108, 99, 255, {})", self.opacity)),
			("border-radius", "50%".to_string()),
			("position", "absolute".to_string()),
			(
				"animation",
				format!("{} {}s linear {}s infinite", animation, self.duration, self.delay),
			),
		]
	}

	/// `@keyframes` rule drifting the particle toward its own target.
	pub fn keyframes(&self, animation: &str) -> String {
		format!(
			"@keyframes {animation} {{\n\
			 \t0% {{ transform: translate(0, 0) rotate(0deg); opacity: 0; }}\n\
			 \t10% {{ opacity: 1; }}\n\
			 \t90% {{ opacity: 1; }}\n\
			 \t100% {{ transform: translate({x}px, {y}px) rotate(360deg); opacity: 0; }}\n\
			 }}\n",
			x = self.drift_x,
			y = self.drift_y,
		)
	}
}

/// Name of the keyframe rule of particle `index`.
pub fn animation_name(index: usize) -> String {
	format!("{}-{}", ANIMATION_PREFIX, index)
}

/// How many particles a desktop (or narrow) viewport gets.
pub fn particle_count(desktop: bool, config: &ParticleConfig) -> usize {
	if desktop {
		config.desktop_count
	} else {
		config.narrow_count
	}
}

/// Draws `count` particle specs.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleSpec> {
	(0..count).map(|_| ParticleSpec::random(rng)).collect()
}

/// Stylesheet text holding every particle's keyframes.
pub fn stylesheet(specs: &[ParticleSpec]) -> String {
	specs
		.iter()
		.enumerate()
		.map(|(index, spec)| spec.keyframes(&animation_name(index)))
		.collect()
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::ParticleField;

#[cfg(target_arch = "wasm32")]
mod browser {
	use web_sys::{Document, HtmlElement};

	use super::{PARTICLE_CLASS, animation_name, generate, particle_count, stylesheet};
	use crate::config::ParticleConfig;
	use crate::dom;
	use crate::error::{PageError, Result};

	/// The created particle population.
	#[derive(Debug)]
	pub struct ParticleField {
		particles: Vec<HtmlElement>,
	}

	impl ParticleField {
		/// Populates the container with the desktop or narrow population. A
		/// page without a container gets an empty field.
		pub fn mount(
			document: &Document,
			config: &ParticleConfig,
			desktop: bool,
		) -> Result<Self> {
			let Some(container) = document.get_element_by_id(&config.container_id) else {
				crate::info_log!("[particles] no #{}, skipping", config.container_id);
				return Ok(Self { particles: Vec::new() });
			};

			let count = particle_count(desktop, config);
			let specs = generate(count, &mut rand::thread_rng());
			let mut particles = Vec::with_capacity(count);
			for (index, spec) in specs.iter().enumerate() {
				let particle: HtmlElement =
					dom::cast(document.create_element("div")?, "div", "HtmlElement")?;
				dom::add_class(&particle, PARTICLE_CLASS)?;
				for (property, value) in spec.styles(&animation_name(index)) {
					dom::set_style(&particle, property, &value)?;
				}
				container.append_child(&particle)?;
				particles.push(particle);
			}

			let style = document.create_element("style")?;
			style.set_text_content(Some(&stylesheet(&specs)));
			document
				.head()
				.ok_or_else(|| PageError::missing("head"))?
				.append_child(&style)?;

			crate::info_log!("[particles] created {}", count);
			Ok(Self { particles })
		}

		pub fn len(&self) -> usize {
			self.particles.len()
		}

		pub fn is_empty(&self) -> bool {
			self.particles.is_empty()
		}
	}
}
