//! Trailing-edge debouncer.
//!
//! Each [`Debouncer::call`] replaces the pending call, so the callback only
//! runs once the input has been quiet for the full delay, and it runs with the
//! arguments of the last call.

use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::Scheduler;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

pub struct Debouncer<A, S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn new(scheduler: S, delay_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self { scheduler, delay_ms, callback: Rc::new(callback), pending: RefCell::new(None) }
    }

    /// Schedule the callback with `args`, cancelling any call still pending.
    pub fn call(&self, args: A) {
        self.cancel();
        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.once(self.delay_ms, Box::new(move || callback(args)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        drop(pending);
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}
