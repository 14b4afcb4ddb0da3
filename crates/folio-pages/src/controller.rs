//! Page bootstrap
//!
//! [`launch`] waits for the DOM, reads the configuration and starts the
//! loading screen. Once the loader hides, [`PageController`] mounts every
//! interaction feature in turn. Each feature is mounted through a guard:
//! a failure is logged and the remaining features still mount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::counter::CounterAnimator;
use crate::cursor::{CursorMode, CustomCursor};
use crate::dom::{self, EventHandle};
use crate::effects::EffectsController;
use crate::error::Result;
use crate::form::{FormController, SubmitPhase};
use crate::hero;
use crate::loader::LoaderSequencer;
use crate::menu::MobileMenu;
use crate::nav::NavigationController;
use crate::particles::ParticleField;
use crate::reveal::ScrollReveal;

/// Runs `init`, logging and swallowing its error.
fn guarded<T>(feature: &'static str, init: impl FnOnce() -> Result<T>) -> Option<T> {
	match init() {
		Ok(value) => Some(value),
		Err(err) => {
			crate::error_log!("[page] {} disabled: {}", feature, err);
			None
		}
	}
}

/// Everything mounted after the loader hides.
#[derive(Default)]
struct Interactions {
	hero_letters: usize,
	menu: Option<Rc<MobileMenu>>,
	reveal: Option<ScrollReveal>,
	nav: Option<NavigationController>,
	form: Option<FormController>,
	effects: Option<EffectsController>,
	cursor: Option<Rc<CustomCursor>>,
	particles: Option<ParticleField>,
	_resize: Option<EventHandle>,
}

/// Owns every controller of the page.
pub struct PageController {
	window: Window,
	document: Document,
	config: PageConfig,
	loader: RefCell<Option<LoaderSequencer>>,
	started: Cell<bool>,
	interactions: RefCell<Interactions>,
}

impl PageController {
	/// Reads the configuration and starts the loading screen. Interactions
	/// mount when it hides, or right away if the page has no loader.
	pub fn boot(window: &Window, document: &Document) -> Rc<Self> {
		let controller = Rc::new(Self {
			window: window.clone(),
			document: document.clone(),
			config: PageConfig::from_document(document),
			loader: RefCell::new(None),
			started: Cell::new(false),
			interactions: RefCell::new(Interactions::default()),
		});

		match guarded("loader", || LoaderSequencer::mount(document, &controller.config.loader)) {
			Some(loader) => {
				let ready = Rc::clone(&controller);
				loader.start(move || ready.start_interactions());
				*controller.loader.borrow_mut() = Some(loader);
			}
			None => controller.start_interactions(),
		}
		controller
	}

	pub fn config(&self) -> &PageConfig {
		&self.config
	}

	/// Whether the interaction features have been mounted.
	pub fn is_interactive(&self) -> bool {
		self.started.get()
	}

	/// Loader progress in percent, if the page has a loader.
	pub fn loader_progress(&self) -> Option<f64> {
		self.loader.borrow().as_ref().map(LoaderSequencer::progress)
	}

	/// The mobile menu, once mounted.
	pub fn menu(&self) -> Option<Rc<MobileMenu>> {
		self.interactions.borrow().menu.clone()
	}

	/// Current cursor mode, once mounted.
	pub fn cursor_mode(&self) -> Option<CursorMode> {
		self.interactions
			.borrow()
			.cursor
			.as_ref()
			.and_then(|cursor| cursor.mode())
	}

	/// Number of particles created.
	pub fn particle_count(&self) -> usize {
		self.interactions
			.borrow()
			.particles
			.as_ref()
			.map_or(0, ParticleField::len)
	}

	/// Number of elements the scroll reveal observes.
	pub fn revealed_targets(&self) -> usize {
		self.interactions
			.borrow()
			.reveal
			.as_ref()
			.map_or(0, ScrollReveal::observed)
	}

	/// Number of navigation links under control.
	pub fn nav_links(&self) -> usize {
		self.interactions
			.borrow()
			.nav
			.as_ref()
			.map_or(0, NavigationController::link_count)
	}

	/// Submit phase of the contact form, if the page has one.
	pub fn form_phase(&self) -> Option<SubmitPhase> {
		self.interactions
			.borrow()
			.form
			.as_ref()
			.and_then(FormController::phase)
	}

	/// Number of ripple and lift listeners.
	pub fn effect_listeners(&self) -> usize {
		self.interactions
			.borrow()
			.effects
			.as_ref()
			.map_or(0, EffectsController::listener_count)
	}

	/// Number of hero letters scheduled for the entrance animation.
	pub fn hero_letters(&self) -> usize {
		self.interactions.borrow().hero_letters
	}

	/// Mounts every interaction feature. Only the first call does anything.
	pub fn start_interactions(&self) {
		if self.started.replace(true) {
			return;
		}
		let (window, document, config) = (&self.window, &self.document, &self.config);
		let width = dom::viewport_width(window);

		let hero_letters = guarded("hero", || hero::animate_title(document, &config.hero)).unwrap_or(0);
		let menu = guarded("menu", || MobileMenu::mount(document));
		let reveal = guarded("reveal", || {
			ScrollReveal::mount(window, document, &config.reveal, CounterAnimator::new(&config.counter))
		});
		let nav = guarded("navigation", || {
			NavigationController::mount(window, document, &config.navigation, menu.clone())
		});
		let form = guarded("form", || FormController::mount(document, &config.form));
		let effects = guarded("effects", || EffectsController::mount(document, &config.effects));
		let cursor = guarded("cursor", || {
			CustomCursor::mount(document, &config.cursor, config.desktop_breakpoint, width).map(Rc::new)
		});
		let particles = guarded("particles", || {
			ParticleField::mount(document, &config.particles, config.is_desktop(width))
		});

		let resize = guarded("resize", || {
			let window_ref = window.clone();
			let cursor = cursor.clone();
			let menu = menu.clone();
			let config = config.clone();
			dom::listen(window, "resize", move |_| {
				let width = dom::viewport_width(&window_ref);
				if let Some(cursor) = &cursor {
					if let Err(err) = cursor.apply_viewport(width) {
						crate::warn_log!("[page] cursor resize: {}", err);
					}
				}
				if config.is_desktop(width) {
					if let Some(menu) = &menu {
						menu.close();
					}
				}
			})
		});

		*self.interactions.borrow_mut() = Interactions {
			hero_letters,
			menu,
			reveal,
			nav,
			form,
			effects,
			cursor,
			particles,
			_resize: resize,
		};
		crate::info_log!("[page] interactions mounted at {}px", width);
	}
}

/// Boots the page as soon as the DOM is parsed. The controller lives for
/// the rest of the page.
pub fn launch() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let globals = || -> Result<(Window, Document)> { Ok((dom::window()?, dom::document()?)) };
	let (window, document) = match globals() {
		Ok(globals) => globals,
		Err(err) => {
			crate::error_log!("[page] cannot start: {}", err);
			return;
		}
	};

	if document.ready_state() != "loading" {
		std::mem::forget(PageController::boot(&window, &document));
		return;
	}

	let ready_document = document.clone();
	let mut pending = Some(window);
	let handle = dom::listen(&document, "DOMContentLoaded", move |_| {
		if let Some(window) = pending.take() {
			std::mem::forget(PageController::boot(&window, &ready_document));
		}
	});
	match handle {
		Ok(handle) => std::mem::forget(handle),
		Err(err) => crate::error_log!("[page] cannot wait for DOMContentLoaded: {}", err),
	}
}
