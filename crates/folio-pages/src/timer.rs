//! Deferred work.
//!
//! Timers come from `gloo-timers`, whose `Timeout` and `Interval` cancel
//! themselves when dropped. [`TaskSlot`] holds at most one such handle per
//! effect: storing a new one drops (and so cancels) the previous one, which
//! makes "latest scheduled wins" explicit instead of racing timers.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared holder for the pending task of one effect.
///
/// Clones share the same slot, so a callback can clear the slot it was
/// scheduled from.
pub struct TaskSlot<T> {
	inner: Rc<RefCell<Option<T>>>,
}

impl<T> TaskSlot<T> {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(None)),
		}
	}

	/// Stores `task`, dropping whatever was pending before.
	pub fn replace(&self, task: T) {
		let previous = self.inner.borrow_mut().replace(task);
		drop(previous);
	}

	/// Drops the pending task, if any. Returns whether one was pending.
	pub fn cancel(&self) -> bool {
		// Take first so the drop runs without the RefCell borrowed.
		let previous = self.inner.borrow_mut().take();
		previous.is_some()
	}

	/// Whether a task is currently stored.
	pub fn is_pending(&self) -> bool {
		self.inner.borrow().is_some()
	}
}

impl<T> Clone for TaskSlot<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T> Default for TaskSlot<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> std::fmt::Debug for TaskSlot<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TaskSlot")
			.field("pending", &self.is_pending())
			.finish()
	}
}

#[cfg(target_arch = "wasm32")]
pub use gloo_timers::callback::{Interval, Timeout};

/// Runs `f` once after `millis` and forgets the handle.
///
/// For effects that are never superseded (letter staggers, ripple removal).
#[cfg(target_arch = "wasm32")]
pub fn defer<F>(millis: u32, f: F)
where
	F: FnOnce() + 'static,
{
	Timeout::new(millis, f).forget();
}
