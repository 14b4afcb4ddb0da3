//! Client-side interaction layer of the portfolio page
//!
//! This module provides access to folio-pages, the controllers that drive
//! the page once its markup is loaded.
//!
//! ## Architecture
//!
//! - **Loader**: progress bar and one-shot hand-off to the interactions
//! - **Reveal**: visibility-triggered entrances, skill bars and counters
//! - **Navigation**: smooth scrolling and the active link
//! - **Pointer**: ripples, card lift and the custom cursor
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio::pages::config::PageConfig;
//! use folio::pages::nav::current_section;
//!
//! let config = PageConfig::default();
//! let active = current_section(640.0, config.navigation.lookahead, &sections);
//! ```

// Re-export all folio-pages functionality
pub use folio_pages::*;
