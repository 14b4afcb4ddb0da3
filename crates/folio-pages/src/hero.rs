//! Hero title entrance: each `.letter-anim` slides up into place, staggered.

use crate::config::HeroConfig;

/// Selector of the animated hero letters.
pub const LETTER_SELECTOR: &str = ".letter-anim";

/// Transition applied to each letter right before it moves.
pub const LETTER_TRANSITION: &str = "opacity 0.8s cubic-bezier(0.22, 0.61, 0.36, 1), transform 0.8s cubic-bezier(0.22, 0.61, 0.36, 1)";

/// Delay before letter `index` starts moving.
pub fn letter_delay(index: usize, config: &HeroConfig) -> u32 {
	config
		.initial_delay_ms
		.saturating_add(config.letter_stagger_ms.saturating_mul(index as u32))
}

/// Transform of a letter before its entrance.
pub fn start_transform(config: &HeroConfig) -> String {
	format!("translateY({}px)", config.start_offset)
}

/// Resets every hero letter and schedules its entrance. Returns how many
/// letters were found.
#[cfg(target_arch = "wasm32")]
pub fn animate_title(document: &web_sys::Document, config: &HeroConfig) -> crate::error::Result<usize> {
	use crate::dom;

	let letters = dom::query_all(document, LETTER_SELECTOR)?;
	let start = start_transform(config);
	for (index, letter) in letters.iter().enumerate() {
		dom::set_style(letter, "opacity", "0")?;
		dom::set_style(letter, "transform", &start)?;

		let letter = letter.clone();
		crate::timer::defer(letter_delay(index, config), move || {
			let _ = dom::set_style(&letter, "transition", LETTER_TRANSITION);
			let _ = dom::set_style(&letter, "opacity", "1");
			let _ = dom::set_style(&letter, "transform", "translateY(0)");
		});
	}
	Ok(letters.len())
}
