//! Browser tests for the post-loader controllers
//!
//! Each test mounts its own markup, drives the controller through real DOM
//! events and removes the markup again.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use folio_pages::config::{
	CounterConfig, CursorConfig, EffectsConfig, FormConfig, NavigationConfig, ParticleConfig,
	RevealConfig,
};
use folio_pages::counter::CounterAnimator;
use folio_pages::cursor::{CursorMode, CustomCursor};
use folio_pages::dom;
use folio_pages::effects::EffectsController;
use folio_pages::form::{FormController, SubmitPhase};
use folio_pages::menu::{MenuState, MobileMenu};
use folio_pages::nav::NavigationController;
use folio_pages::particles::ParticleField;
use folio_pages::reveal::ScrollReveal;
use folio_pages::PageController;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

struct Fixture(Element);

impl Fixture {
	fn new(html: &str) -> Self {
		let document = document();
		let root = document.create_element("div").unwrap();
		root.set_inner_html(html);
		let body = document.body().unwrap();
		body.insert_before(&root, body.first_child().as_ref()).unwrap();
		Self(root)
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.0.remove();
	}
}

fn document() -> Document {
	dom::document().unwrap()
}

fn element(selector: &str) -> HtmlElement {
	dom::require(&document(), selector).unwrap()
}

fn style(element: &HtmlElement, property: &str) -> String {
	element.style().get_property_value(property).unwrap()
}

// Mobile menu

const MENU_HTML: &str = r#"
	<button class="nav-menu-btn">
		<span class="menu-line"></span>
		<span class="menu-line"></span>
		<span class="menu-line"></span>
	</button>
	<ul class="nav-links"></ul>
"#;

#[wasm_bindgen_test]
fn test_menu_click_toggles_and_close_is_idempotent() {
	let _fixture = Fixture::new(MENU_HTML);
	let menu = MobileMenu::mount(&document()).unwrap();
	let button = element(".nav-menu-btn");
	let panel = element(".nav-links");

	button.click();
	assert_eq!(menu.state(), MenuState::Open);
	assert!(dom::has_class(&button, "active"));
	assert!(dom::has_class(&panel, "active"));
	let lines = dom::query_all(&document(), ".menu-line").unwrap();
	assert_eq!(style(&lines[1], "opacity"), "0");

	menu.close();
	assert_eq!(menu.state(), MenuState::Closed);
	assert!(!dom::has_class(&panel, "active"));
	assert_eq!(style(&lines[0], "transform"), "none");

	menu.close();
	assert_eq!(menu.state(), MenuState::Closed);

	button.click();
	assert_eq!(menu.state(), MenuState::Open);
}

#[wasm_bindgen_test]
fn test_menu_without_button_is_inert() {
	let menu = MobileMenu::mount(&document()).unwrap();
	menu.toggle();
	menu.close();
	assert_eq!(menu.state(), MenuState::Closed);
}

// Navigation

const NAV_HTML: &str = r##"
	<button class="nav-menu-btn">
		<span class="menu-line"></span>
		<span class="menu-line"></span>
		<span class="menu-line"></span>
	</button>
	<ul class="nav-links">
		<li><a class="nav-link active" href="#home">Home</a></li>
		<li><a class="nav-link" href="#about">About</a></li>
	</ul>
	<section id="home" style="height: 1500px"></section>
	<section id="about" style="height: 1500px"></section>
	<div style="height: 1500px"></div>
"##;

fn active_links() -> Vec<String> {
	dom::query_all(&document(), ".nav-link.active")
		.unwrap()
		.iter()
		.filter_map(|link| link.get_attribute("href"))
		.collect()
}

#[wasm_bindgen_test]
async fn test_nav_click_activates_one_link_scrolls_and_closes_menu() {
	let _fixture = Fixture::new(NAV_HTML);
	let window = dom::window().unwrap();
	window.scroll_to_with_x_and_y(0.0, 0.0);
	let menu = MobileMenu::mount(&document()).unwrap();
	let _nav = NavigationController::mount(
		&window,
		&document(),
		&NavigationConfig::default(),
		Some(Rc::clone(&menu)),
	)
	.unwrap();
	menu.toggle();
	assert_eq!(menu.state(), MenuState::Open);

	element("a[href='#about']").click();

	assert_eq!(active_links(), vec!["#about".to_string()]);
	assert_eq!(menu.state(), MenuState::Closed);
	assert!(!dom::has_class(&element(".nav-links"), "active"));

	TimeoutFuture::new(2000).await;
	let expected = f64::from(element("#about").offset_top()) - 100.0;
	assert!((dom::scroll_y(&window) - expected).abs() <= 2.0);
	window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn test_scroll_rederives_active_link() {
	let _fixture = Fixture::new(NAV_HTML);
	let window = dom::window().unwrap();
	let _nav =
		NavigationController::mount(&window, &document(), &NavigationConfig::default(), None).unwrap();
	let about = element("#about");
	let scroll = || window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();

	window.scroll_to_with_x_and_y(0.0, f64::from(about.offset_top()) - 100.0);
	scroll();
	assert_eq!(active_links(), vec!["#about".to_string()]);

	window.scroll_to_with_x_and_y(0.0, 0.0);
	scroll();
	assert_eq!(active_links(), vec!["#home".to_string()]);
}

// Scroll reveal

const REVEAL_HTML: &str = r#"
	<div class="skill-progress" data-width="85" style="height: 10px; min-width: 10px"></div>
	<span class="stat-number" data-count="5" style="display: inline-block">?</span>
"#;

fn mount_reveal(counter: CounterConfig) -> ScrollReveal {
	let window = dom::window().unwrap();
	window.scroll_to_with_x_and_y(0.0, 0.0);
	let config = RevealConfig {
		skill_bar_delay_ms: 20,
		..RevealConfig::default()
	};
	ScrollReveal::mount(&window, &document(), &config, CounterAnimator::new(&counter)).unwrap()
}

#[wasm_bindgen_test]
async fn test_revealed_skill_bar_fills_to_data_width() {
	let _fixture = Fixture::new(REVEAL_HTML);
	let reveal = mount_reveal(CounterConfig::default());
	let bar = element(".skill-progress");
	assert_eq!(reveal.observed(), 2);
	assert_eq!(style(&bar, "width"), "0%");

	TimeoutFuture::new(300).await;
	assert!(dom::has_class(&bar, "animate-in"));
	assert_eq!(style(&bar, "width"), "85%");
}

#[wasm_bindgen_test]
async fn test_second_reveal_does_not_restart_counter() {
	let _fixture = Fixture::new(REVEAL_HTML);
	let _reveal = mount_reveal(CounterConfig {
		duration_ms: 50,
		tick_ms: 5,
	});
	let counter = element(".stat-number");

	TimeoutFuture::new(300).await;
	assert_eq!(counter.text_content().as_deref(), Some("5"));
	assert!(dom::has_class(&counter, "animate-in"));
	assert!(dom::has_class(&counter, "animated"));

	// Any restarted count would overwrite this text.
	counter.set_text_content(Some("done"));
	dom::set_style(&counter, "display", "none").unwrap();
	TimeoutFuture::new(100).await;
	dom::set_style(&counter, "display", "inline-block").unwrap();
	TimeoutFuture::new(300).await;

	assert_eq!(counter.text_content().as_deref(), Some("done"));
	assert!(dom::has_class(&counter, "animated"));
}

// Counters

#[wasm_bindgen_test]
async fn test_counter_counts_to_target_once() {
	let _fixture = Fixture::new(r#"<span class="stat-number" data-count="50">?</span>"#);
	let animator = CounterAnimator::new(&CounterConfig {
		duration_ms: 50,
		tick_ms: 5,
	});
	let counter = element(".stat-number");
	animator.reset(&[counter.clone()]);
	assert_eq!(counter.text_content().as_deref(), Some("0"));

	assert!(animator.animate(&counter).unwrap());
	assert!(!animator.animate(&counter).unwrap());

	TimeoutFuture::new(200).await;
	assert_eq!(counter.text_content().as_deref(), Some("50"));
	assert!(dom::has_class(&counter, "animated"));
}

#[wasm_bindgen_test]
fn test_counter_with_bad_target_is_marked_and_rejected() {
	let _fixture = Fixture::new(r#"<span class="stat-number" data-count="lots">0</span>"#);
	let animator = CounterAnimator::new(&CounterConfig::default());
	let counter = element(".stat-number");

	assert!(animator.animate(&counter).is_err());
	assert!(dom::has_class(&counter, "animated"));
	assert!(!animator.animate(&counter).unwrap());
}

// Contact form

const FORM_HTML: &str = r#"
	<form id="contactForm">
		<div class="form-group"><input type="text" value=""></div>
		<div class="form-group"><input type="email" value="ada@example.com"></div>
		<button type="submit" class="btn-submit"><span>Send Message</span></button>
	</form>
"#;

#[wasm_bindgen_test]
fn test_form_prefocuses_filled_fields() {
	let _fixture = Fixture::new(FORM_HTML);
	let _form = FormController::mount(&document(), &FormConfig::default()).unwrap();

	let groups = dom::query_all(&document(), ".form-group").unwrap();
	assert!(!dom::has_class(&groups[0], "focused"));
	assert!(dom::has_class(&groups[1], "focused"));
}

#[wasm_bindgen_test]
fn test_form_focus_and_blur() {
	let _fixture = Fixture::new(FORM_HTML);
	let _form = FormController::mount(&document(), &FormConfig::default()).unwrap();
	let groups = dom::query_all(&document(), ".form-group").unwrap();
	let input: HtmlInputElement = dom::query_all(&document(), "input").unwrap()[0]
		.clone()
		.dyn_into()
		.unwrap();

	input.dispatch_event(&Event::new("focus").unwrap()).unwrap();
	assert!(dom::has_class(&groups[0], "focused"));

	input.dispatch_event(&Event::new("blur").unwrap()).unwrap();
	assert!(!dom::has_class(&groups[0], "focused"));

	input.set_value("Ada");
	input.dispatch_event(&Event::new("focus").unwrap()).unwrap();
	input.dispatch_event(&Event::new("blur").unwrap()).unwrap();
	assert!(dom::has_class(&groups[0], "focused"));
}

#[wasm_bindgen_test]
async fn test_form_submit_cycle() {
	let _fixture = Fixture::new(FORM_HTML);
	let typed: HtmlInputElement = element("#contactForm input").dyn_into().unwrap();
	typed.set_value("Ada Lovelace");
	let config = FormConfig {
		sending_ms: 30,
		sent_ms: 60,
		..FormConfig::default()
	};
	let form = FormController::mount(&document(), &config).unwrap();
	let form_element = element("#contactForm");
	let button: HtmlButtonElement = element(".btn-submit").dyn_into().unwrap();
	let label = element(".btn-submit span");

	let submit = || form_element.dispatch_event(&Event::new("submit").unwrap()).unwrap();

	submit();
	assert_eq!(form.phase(), Some(SubmitPhase::Sending));
	assert_eq!(label.text_content().as_deref(), Some("Sending..."));
	assert!(button.disabled());

	submit();
	assert_eq!(form.phase(), Some(SubmitPhase::Sending));

	TimeoutFuture::new(45).await;
	assert_eq!(form.phase(), Some(SubmitPhase::Sent));
	assert_eq!(label.text_content().as_deref(), Some("Message Sent!"));
	assert!(!style(&button, "background").is_empty());
	let groups = dom::query_all(&document(), ".form-group").unwrap();
	assert!(groups.iter().all(|group| !dom::has_class(group, "focused")));
	for input in dom::query_all(&document(), "#contactForm input").unwrap() {
		let input: HtmlInputElement = input.dyn_into().unwrap();
		assert_eq!(input.value(), "");
	}

	TimeoutFuture::new(90).await;
	assert_eq!(form.phase(), Some(SubmitPhase::Idle));
	assert_eq!(label.text_content().as_deref(), Some("Send Message"));
	assert!(!button.disabled());
}

#[wasm_bindgen_test]
fn test_form_without_contact_form() {
	let _fixture = Fixture::new(r#"<div class="form-group"><textarea></textarea></div>"#);
	let form = FormController::mount(&document(), &FormConfig::default()).unwrap();
	assert_eq!(form.phase(), None);
}

// Pointer effects

#[wasm_bindgen_test]
async fn test_ripple_is_added_and_removed() {
	let _fixture = Fixture::new(r#"<button class="btn">Hire me</button>"#);
	let config = EffectsConfig {
		ripple_lifetime_ms: 30,
		..EffectsConfig::default()
	};
	let effects = EffectsController::mount(&document(), &config).unwrap();
	assert_eq!(effects.listener_count(), 1);

	let button = element(".btn");
	button.click();
	assert_eq!(dom::query_all(&document(), ".btn-ripple").unwrap().len(), 1);

	TimeoutFuture::new(80).await;
	assert!(dom::query_all(&document(), ".btn-ripple").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_card_lifts_on_hover() {
	let _fixture = Fixture::new(r#"<div class="project-card"></div>"#);
	let _effects = EffectsController::mount(&document(), &EffectsConfig::default()).unwrap();
	let card = element(".project-card");

	card.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
	assert_eq!(style(&card, "transform"), "translateY(-10px)");
	card.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
	assert!(style(&card, "transform").starts_with("translateY(0"));
}

// Custom cursor

const CURSOR_HTML: &str = r##"
	<div class="cursor-dot"></div>
	<div class="cursor-ring"></div>
	<a href="#about">About</a>
"##;

#[wasm_bindgen_test]
fn test_cursor_switches_with_viewport() {
	let _fixture = Fixture::new(CURSOR_HTML);
	let cursor = CustomCursor::mount(&document(), &CursorConfig::default(), 768.0, 1280.0).unwrap();
	assert_eq!(cursor.mode(), Some(CursorMode::Desktop));

	cursor.apply_viewport(600.0).unwrap();
	assert_eq!(cursor.mode(), Some(CursorMode::Hidden));
	assert_eq!(style(&element(".cursor-dot"), "display"), "none");

	cursor.apply_viewport(1024.0).unwrap();
	assert_eq!(cursor.mode(), Some(CursorMode::Desktop));
	assert_eq!(style(&element(".cursor-ring"), "display"), "");
}

#[wasm_bindgen_test]
fn test_cursor_hover_enlarges() {
	let _fixture = Fixture::new(CURSOR_HTML);
	let _cursor = CustomCursor::mount(&document(), &CursorConfig::default(), 768.0, 1280.0).unwrap();
	let link = element("a[href='#about']");

	link.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
	assert_eq!(style(&element(".cursor-dot"), "width"), "16px");
	assert_eq!(style(&element(".cursor-ring"), "width"), "50px");

	link.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
	assert_eq!(style(&element(".cursor-dot"), "width"), "8px");
}

#[wasm_bindgen_test]
fn test_hidden_cursor_ignores_hover() {
	let _fixture = Fixture::new(CURSOR_HTML);
	let _cursor = CustomCursor::mount(&document(), &CursorConfig::default(), 768.0, 400.0).unwrap();
	let link = element("a[href='#about']");

	link.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
	assert_eq!(style(&element(".cursor-dot"), "width"), "");
}

// Particles

#[wasm_bindgen_test]
fn test_particle_count_follows_viewport() {
	let _fixture = Fixture::new(r#"<div id="particles"></div>"#);
	let config = ParticleConfig::default();

	let field = ParticleField::mount(&document(), &config, true).unwrap();
	assert_eq!(field.len(), 40);
	assert_eq!(element("#particles").child_element_count(), 40);
}

#[wasm_bindgen_test]
fn test_narrow_viewport_gets_fewer_particles() {
	let _fixture = Fixture::new(r#"<div id="particles"></div>"#);
	let field = ParticleField::mount(&document(), &ParticleConfig::default(), false).unwrap();
	assert_eq!(field.len(), 20);
}

#[wasm_bindgen_test]
fn test_no_particle_container() {
	let field = ParticleField::mount(&document(), &ParticleConfig::default(), true).unwrap();
	assert!(field.is_empty());
}

// Page bootstrap

#[wasm_bindgen_test]
async fn test_page_without_loader_mounts_interactions_immediately() {
	let _fixture = Fixture::new(&format!(
		r##"{MENU_HTML}
		<script type="application/json" id="folio-config">
			{{ "particles": {{ "desktop_count": 3, "narrow_count": 3 }} }}
		</script>
		<div id="particles"></div>
		<a class="nav-link" href="#intro">Intro</a>
		<button class="btn">Hire me</button>
		<h1><span class="letter-anim">H</span><span class="letter-anim">i</span></h1>"##
	));
	let window = dom::window().unwrap();
	let page = PageController::boot(&window, &document());

	assert!(page.is_interactive());
	assert_eq!(page.loader_progress(), None);
	assert_eq!(page.config().particles.desktop_count, 3);
	assert_eq!(page.particle_count(), 3);
	assert_eq!(page.hero_letters(), 2);
	assert!(page.menu().is_some());
	assert_eq!(page.nav_links(), 1);
	assert_eq!(page.effect_listeners(), 1);
	assert_eq!(page.form_phase(), None);

	page.start_interactions();
	assert_eq!(page.particle_count(), 3);

	TimeoutFuture::new(400).await;
	for letter in dom::query_all(&document(), ".letter-anim").unwrap() {
		assert_eq!(style(&letter, "opacity"), "1");
	}
}
