//! Cancellable timers with explicit handles.
//!
//! DESIGN
//! ======
//! Every timer the page starts goes through [`Scheduler`], and every scheduled
//! task is owned by a handle that cancels it on drop. Fire-and-forget timers
//! call [`TaskHandle::forget`] explicitly. In the browser the scheduler is
//! backed by `gloo-timers`; [`ManualScheduler`] drives the same code from a
//! virtual clock.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Handle to a scheduled task. Dropping the handle cancels the task.
pub trait TaskHandle {
    /// Let the task run to completion without keeping the handle around.
    fn forget(self);
}

/// Source of one-shot and repeating timers.
pub trait Scheduler {
    type Handle: TaskHandle;

    /// Run `task` once, `delay_ms` from now.
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `task` every `period_ms` until the handle is dropped.
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;
}

// =============================================================================
// BROWSER TIMERS
// =============================================================================

/// Scheduler backed by `setTimeout`/`setInterval`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

#[cfg(feature = "hydrate")]
pub enum TimerHandle {
    Timeout(gloo_timers::callback::Timeout),
    Interval(gloo_timers::callback::Interval),
}

#[cfg(feature = "hydrate")]
impl TaskHandle for TimerHandle {
    fn forget(self) {
        match self {
            Self::Timeout(timeout) => {
                timeout.forget();
            }
            Self::Interval(interval) => {
                interval.forget();
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl Scheduler for TimerScheduler {
    type Handle = TimerHandle;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Timeout(gloo_timers::callback::Timeout::new(delay_ms, task))
    }

    fn every(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Interval(gloo_timers::callback::Interval::new(period_ms, move || task()))
    }
}

// =============================================================================
// VIRTUAL CLOCK
// =============================================================================

enum Task {
    Once(Box<dyn FnOnce()>),
    Every { period_ms: u64, task: Box<dyn FnMut()> },
}

struct Entry {
    id: u64,
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct ManualInner {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
    /// Ids cancelled while their task was running (and so out of `entries`).
    cancelled: HashSet<u64>,
    running: Option<u64>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Tasks due at the same instant run in scheduling order. Tasks may schedule
/// or cancel other tasks while running.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

pub struct ManualHandle {
    id: u64,
    inner: Option<Rc<RefCell<ManualInner>>>,
}

impl TaskHandle for ManualHandle {
    fn forget(mut self) {
        self.inner = None;
    }
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.entries.len();
        let id = self.id;
        inner.entries.retain(|entry| entry.id != id);
        if inner.entries.len() == before && inner.running == Some(id) {
            inner.cancelled.insert(id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scheduler was created.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Move the clock forward by `ms`, running every task that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now_ms + ms;
        while let Some(entry) = self.pop_due(target) {
            let id = entry.id;
            match entry.task {
                Task::Once(task) => {
                    task();
                    let mut inner = self.inner.borrow_mut();
                    inner.running = None;
                    inner.cancelled.remove(&id);
                }
                Task::Every { period_ms, mut task } => {
                    task();
                    let mut inner = self.inner.borrow_mut();
                    inner.running = None;
                    if !inner.cancelled.remove(&id) {
                        let due_ms = entry.due_ms + period_ms;
                        inner.entries.push(Entry { id, due_ms, task: Task::Every { period_ms, task } });
                    }
                }
            }
        }
        self.inner.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<Entry> {
        let mut inner = self.inner.borrow_mut();
        let index = inner
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= target)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.id))
            .map(|(index, _)| index)?;
        let entry = inner.entries.remove(index);
        inner.now_ms = entry.due_ms;
        inner.running = Some(entry.id);
        Some(entry)
    }

    fn push(&self, delay_ms: u64, task: Task) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due_ms = inner.now_ms + delay_ms;
        inner.entries.push(Entry { id, due_ms, task });
        ManualHandle { id, inner: Some(Rc::clone(&self.inner)) }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        self.push(u64::from(delay_ms), Task::Once(task))
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> ManualHandle {
        let period_ms = u64::from(period_ms.max(1));
        self.push(period_ms, Task::Every { period_ms, task })
    }
}
