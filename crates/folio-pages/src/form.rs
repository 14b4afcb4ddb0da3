//! Contact form
//!
//! Field groups get a `focused` class while their input has focus, and keep
//! it on blur only if the input holds a value.
//!
//! Submission is simulated locally; nothing is sent over the network:
//!
//! ```text
//! Idle ──submit──► Sending ──1500ms──► Sent ──3000ms──► Idle
//!        disable,   label       label, reset fields,   restore label,
//!        prevent    "Sending..." green background       background, enable
//! ```

use crate::config::FormConfig;

/// Id of the contact form.
pub const FORM_ID: &str = "contactForm";
/// Selector of field wrappers.
pub const GROUP_SELECTOR: &str = ".form-group";
/// Selector of the editable control inside a group.
pub const FIELD_SELECTOR: &str = "input, textarea";
/// Selector of the submit button inside the form.
pub const SUBMIT_SELECTOR: &str = ".btn-submit";
/// Selector of the submit button's label.
pub const LABEL_SELECTOR: &str = "span";
/// Class marking a focused (or filled) field group.
pub const FOCUSED_CLASS: &str = "focused";

/// Phase of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
	#[default]
	Idle,
	Sending,
	Sent,
}

impl SubmitPhase {
	/// Button label for this phase; `original` is the idle label.
	pub fn label<'a>(self, original: &'a str, config: &'a FormConfig) -> &'a str {
		match self {
			Self::Idle => original,
			Self::Sending => &config.sending_label,
			Self::Sent => &config.sent_label,
		}
	}

	/// Whether the submit button is disabled in this phase.
	pub fn disables_button(self) -> bool {
		!matches!(self, Self::Idle)
	}

	/// Inline background of the submit button; empty restores the stylesheet.
	pub fn background(self, config: &FormConfig) -> &str {
		match self {
			Self::Sent => &config.sent_background,
			Self::Idle | Self::Sending => "",
		}
	}
}

/// Transition table of the submit simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitCycle {
	phase: SubmitPhase,
}

impl SubmitCycle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn phase(&self) -> SubmitPhase {
		self.phase
	}

	/// Idle → Sending. A submit in any other phase is ignored.
	pub fn begin(&mut self) -> bool {
		self.transition(SubmitPhase::Idle, SubmitPhase::Sending)
	}

	/// Sending → Sent.
	pub fn mark_sent(&mut self) -> bool {
		self.transition(SubmitPhase::Sending, SubmitPhase::Sent)
	}

	/// Sent → Idle.
	pub fn finish(&mut self) -> bool {
		self.transition(SubmitPhase::Sent, SubmitPhase::Idle)
	}

	fn transition(&mut self, from: SubmitPhase, to: SubmitPhase) -> bool {
		if self.phase != from {
			return false;
		}
		self.phase = to;
		true
	}
}

/// Whether a field group stays marked after its input loses focus.
pub fn keeps_focus(value: &str) -> bool {
	!value.is_empty()
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::FormController;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::RefCell;
	use std::rc::Rc;

	use wasm_bindgen::JsCast;
	use web_sys::{
		Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
		HtmlTextAreaElement,
	};

	use super::{
		FIELD_SELECTOR, FOCUSED_CLASS, FORM_ID, GROUP_SELECTOR, LABEL_SELECTOR, SUBMIT_SELECTOR,
		SubmitCycle, SubmitPhase, keeps_focus,
	};
	use crate::config::FormConfig;
	use crate::dom::{self, EventHandle};
	use crate::error::{PageError, Result};
	use crate::timer::{TaskSlot, Timeout};

	fn field_value(field: &HtmlElement) -> String {
		if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
			area.value()
		} else {
			String::new()
		}
	}

	fn clear_field(field: &HtmlElement) {
		if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
			input.set_value("");
		} else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
			area.set_value("");
		}
	}

	struct SubmitState {
		form: HtmlFormElement,
		button: HtmlButtonElement,
		label: HtmlElement,
		fields: Vec<HtmlElement>,
		groups: Vec<HtmlElement>,
		config: FormConfig,
		cycle: RefCell<SubmitCycle>,
		original_label: RefCell<String>,
		pending: TaskSlot<Timeout>,
	}

	impl SubmitState {
		fn render(&self, phase: SubmitPhase) {
			let original = self.original_label.borrow();
			self.label
				.set_text_content(Some(phase.label(&original, &self.config)));
			self.button.set_disabled(phase.disables_button());
			let _ = dom::set_style(&self.button, "background", phase.background(&self.config));
		}

		fn submit(self: &Rc<Self>) {
			if !self.cycle.borrow_mut().begin() {
				return;
			}
			*self.original_label.borrow_mut() = self.label.text_content().unwrap_or_default();
			self.render(SubmitPhase::Sending);
			crate::info_log!("[form] simulating submission");

			let state = Rc::clone(self);
			self.pending.replace(Timeout::new(self.config.sending_ms, move || state.sent()));
		}

		fn sent(self: Rc<Self>) {
			if !self.cycle.borrow_mut().mark_sent() {
				return;
			}
			self.render(SubmitPhase::Sent);
			// reset() restores `value` attributes; the fields must end up empty.
			self.form.reset();
			for field in &self.fields {
				clear_field(field);
			}
			for group in &self.groups {
				let _ = dom::remove_class(group, FOCUSED_CLASS);
			}

			let state = Rc::clone(&self);
			self.pending.replace(Timeout::new(self.config.sent_ms, move || state.idle()));
		}

		fn idle(self: Rc<Self>) {
			if self.cycle.borrow_mut().finish() {
				self.render(SubmitPhase::Idle);
			}
		}
	}

	/// Focus styling for field groups and the simulated submit cycle.
	pub struct FormController {
		submit: Option<Rc<SubmitState>>,
		_listeners: Vec<EventHandle>,
	}

	impl FormController {
		pub fn mount(document: &Document, config: &FormConfig) -> Result<Self> {
			let groups = dom::query_all(document, GROUP_SELECTOR)?;
			let mut listeners = Vec::new();

			for group in &groups {
				let Some(field) = dom::query_all_within(group, FIELD_SELECTOR)?.into_iter().next() else {
					continue;
				};
				if keeps_focus(&field_value(&field)) {
					dom::add_class(group, FOCUSED_CLASS)?;
				}

				let focus_group = group.clone();
				listeners.push(dom::listen(&field, "focus", move |_| {
					let _ = dom::add_class(&focus_group, FOCUSED_CLASS);
				})?);

				let blur_group = group.clone();
				let blur_field = field.clone();
				listeners.push(dom::listen(&field, "blur", move |_| {
					if !keeps_focus(&field_value(&blur_field)) {
						let _ = dom::remove_class(&blur_group, FOCUSED_CLASS);
					}
				})?);
			}

			let submit = match document.get_element_by_id(FORM_ID) {
				Some(form) => {
					let form: HtmlFormElement = dom::cast(form, FORM_ID, "HtmlFormElement")?;
					let button = form
						.query_selector(SUBMIT_SELECTOR)?
						.ok_or_else(|| PageError::missing(SUBMIT_SELECTOR))?;
					let button: HtmlButtonElement = dom::cast(button, SUBMIT_SELECTOR, "HtmlButtonElement")?;
					let label = button
						.query_selector(LABEL_SELECTOR)?
						.ok_or_else(|| PageError::missing(LABEL_SELECTOR))?;
					let label: HtmlElement = dom::cast(label, LABEL_SELECTOR, "HtmlElement")?;

					let state = Rc::new(SubmitState {
						form: form.clone(),
						button,
						label,
						fields: dom::query_all_within(&form, FIELD_SELECTOR)?,
						groups: groups.clone(),
						config: config.clone(),
						cycle: RefCell::new(SubmitCycle::new()),
						original_label: RefCell::new(String::new()),
						pending: TaskSlot::new(),
					});
					let submit_state = Rc::clone(&state);
					listeners.push(dom::listen(&form, "submit", move |event| {
						event.prevent_default();
						submit_state.submit();
					})?);
					Some(state)
				}
				None => {
					crate::info_log!("[form] no #{}, submit simulation disabled", FORM_ID);
					None
				}
			};

			Ok(Self {
				submit,
				_listeners: listeners,
			})
		}

		/// Current submit phase, if the page has a contact form.
		pub fn phase(&self) -> Option<SubmitPhase> {
			self.submit.as_ref().map(|state| state.cycle.borrow().phase())
		}
	}
}
