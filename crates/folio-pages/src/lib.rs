//! # folio-pages
//!
//! Client-side interaction layer of the folio portfolio page, compiled to
//! WebAssembly.
//!
//! ## Features
//!
//! - **Loader**: staggered logo letters, a randomly advancing progress bar
//!   and a one-shot hand-off to the rest of the page
//! - **Scroll reveal**: visibility-triggered entrance classes, skill bar
//!   fills, statistic counters and parallax shapes
//! - **Navigation**: smooth in-page scrolling and a scroll-synchronized
//!   active link
//! - **Contact form**: focus styling and a simulated submit cycle
//! - **Pointer effects**: click ripples, card lift and a custom cursor
//! - **Background**: a randomized particle field
//! - **Mobile menu**: hamburger toggle that closes on navigation
//!
//! ## Architecture
//!
//! Each controller module keeps its state machine and geometry in plain
//! Rust, testable on any target. The DOM binding of each controller is only
//! compiled for `wasm32` and re-exported from the same module.
//!
//! ```text
//! launch()
//!   └─ PageController::boot
//!        ├─ LoaderSequencer ──(100%, +500ms)──► start_interactions()
//!        └─ start_interactions
//!             ├─ hero title      ├─ FormController
//!             ├─ MobileMenu      ├─ EffectsController
//!             ├─ ScrollReveal    ├─ CustomCursor
//!             │   └─ Counter...  ├─ ParticleField
//!             └─ Navigation...   └─ resize listener
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use wasm_bindgen::prelude::*;
//!
//! #[wasm_bindgen(start)]
//! pub fn start() {
//!     folio_pages::launch();
//! }
//! ```

pub mod logging;

pub mod config;
pub mod counter;
pub mod cursor;
pub mod effects;
pub mod error;
pub mod form;
pub mod hero;
pub mod loader;
pub mod menu;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::PageConfig;
pub use error::{PageError, Result};
pub use timer::TaskSlot;

#[cfg(target_arch = "wasm32")]
pub use controller::{PageController, launch};
