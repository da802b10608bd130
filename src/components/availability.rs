//! Periodic availability refresh.
//!
//! There is no availability endpoint yet, so each tick only logs. The poller
//! keeps its timer handle; dropping the poller stops the refresh.

use std::cell::Cell;
use std::rc::Rc;

use crate::util::scheduler::Scheduler;

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

pub struct AvailabilityPoller<S: Scheduler> {
    ticks: Rc<Cell<u64>>,
    period_ms: u32,
    _timer: S::Handle,
}

impl<S: Scheduler> AvailabilityPoller<S> {
    pub fn start(scheduler: &S, period_ms: u32) -> Self {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let timer = scheduler.every(
            period_ms,
            Box::new(move || {
                counter.set(counter.get() + 1);
                log::info!("Updating availability data...");
            }),
        );
        log::debug!("availability refresh every {period_ms}ms");
        Self { ticks, period_ms, _timer: timer }
    }

    /// Refreshes performed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}
