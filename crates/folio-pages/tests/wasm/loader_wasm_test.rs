//! Loader sequencer tests in a real browser
//!
//! Run with: `wasm-pack test --headless --chrome crates/folio-pages`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use folio_pages::config::LoaderConfig;
use folio_pages::dom;
use folio_pages::error::PageError;
use folio_pages::loader::LoaderSequencer;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Markup mounted into `<body>` for one test and removed on drop.
struct Fixture(Element);

impl Fixture {
	fn new(html: &str) -> Self {
		let document = dom::document().unwrap();
		let root = document.create_element("div").unwrap();
		root.set_inner_html(html);
		document.body().unwrap().append_child(&root).unwrap();
		Self(root)
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.0.remove();
	}
}

const LOADER_HTML: &str = r#"
	<div class="loader">
		<span class="logo-letter">F</span>
		<span class="logo-letter">O</span>
		<span class="logo-letter">L</span>
		<div class="loading-progress"></div>
	</div>
"#;

fn fast_config() -> LoaderConfig {
	LoaderConfig {
		letter_stagger_ms: 10,
		tick_ms: 5,
		min_step: 20.0,
		max_step: 40.0,
		hide_delay_ms: 20,
	}
}

fn style(selector: &str, property: &str) -> String {
	let document = dom::document().unwrap();
	let element: HtmlElement = dom::require(&document, selector).unwrap();
	element.style().get_property_value(property).unwrap()
}

#[wasm_bindgen_test]
async fn test_loader_completes_and_hands_off_once() {
	let _fixture = Fixture::new(LOADER_HTML);
	let document = dom::document().unwrap();
	let loader = LoaderSequencer::mount(&document, &fast_config()).unwrap();

	let ready = Rc::new(Cell::new(0));
	let counter = Rc::clone(&ready);
	loader.start(move || counter.set(counter.get() + 1));

	TimeoutFuture::new(300).await;

	assert_eq!(ready.get(), 1);
	assert_eq!(loader.progress(), 100.0);
	assert_eq!(style(".loading-progress", "width"), "100%");
	assert_eq!(style(".loader", "opacity"), "0");
	assert_eq!(style(".loader", "visibility"), "hidden");

	TimeoutFuture::new(100).await;
	assert_eq!(ready.get(), 1);
}

#[wasm_bindgen_test]
async fn test_letters_fade_in() {
	let _fixture = Fixture::new(LOADER_HTML);
	let document = dom::document().unwrap();
	let loader = LoaderSequencer::mount(&document, &fast_config()).unwrap();
	loader.start(|| {});

	TimeoutFuture::new(100).await;

	for letter in dom::query_all(&document, ".logo-letter").unwrap() {
		assert_eq!(letter.style().get_property_value("opacity").unwrap(), "1");
	}
}

#[wasm_bindgen_test]
async fn test_progress_is_partial_mid_run() {
	let _fixture = Fixture::new(LOADER_HTML);
	let document = dom::document().unwrap();
	let config = LoaderConfig {
		tick_ms: 1000,
		..fast_config()
	};
	let loader = LoaderSequencer::mount(&document, &config).unwrap();
	loader.start(|| {});

	TimeoutFuture::new(1100).await;

	let progress = loader.progress();
	assert!((20.0..40.0).contains(&progress), "progress {}", progress);
}

#[wasm_bindgen_test]
fn test_missing_loader_is_reported() {
	let document = dom::document().unwrap();
	let result = LoaderSequencer::mount(&document, &LoaderConfig::default());
	assert!(matches!(
		result,
		Err(PageError::MissingElement { ref selector }) if selector == ".loader"
	));
}
