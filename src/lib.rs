//! # Folio
//!
//! Interactive layer of a single-page portfolio site, compiled to
//! WebAssembly.
//!
//! The page markup and stylesheet are static; this crate attaches the
//! behavior: the loading screen, scroll-triggered reveals, animated
//! statistics, navigation, the contact form, pointer effects, a custom
//! cursor, the particle background and the mobile menu.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - the interaction layer, re-exported as [`pages`]
//! - `console_error_panic_hook` - readable panic messages in the console
//! - `debug-hooks` - per-event tracing through `debug_log!` in debug builds
//!
//! ## Entry Point
//!
//! Built for `wasm32`, the crate exports a `#[wasm_bindgen(start)]`
//! function that boots the page as soon as the module is instantiated:
//!
//! ```text
//! wasm-pack build --target web
//! ```
//!
//! ```html
//! <script type="module">
//!   import init from "./pkg/folio.js";
//!   init();
//! </script>
//! ```

#[cfg(feature = "pages")]
pub mod pages;

/// Boots the page. Called by the generated JS glue on module instantiation.
#[cfg(all(feature = "pages", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
	folio_pages::launch();
}
