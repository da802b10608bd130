use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::scheduler::ManualScheduler;

fn recording(scheduler: &ManualScheduler, delay_ms: u32) -> (Debouncer<String, ManualScheduler>, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let debouncer = Debouncer::new(scheduler.clone(), delay_ms, move |query: String| sink.borrow_mut().push(query));
    (debouncer, calls)
}

#[test]
fn burst_fires_once_with_last_arguments() {
    let scheduler = ManualScheduler::new();
    let (debouncer, calls) = recording(&scheduler, 300);

    debouncer.call("l".to_owned());
    scheduler.advance(100);
    debouncer.call("la".to_owned());
    scheduler.advance(100);
    debouncer.call("lab".to_owned());
    scheduler.advance(300);

    assert_eq!(*calls.borrow(), vec!["lab".to_owned()]);
}

#[test]
fn delay_restarts_from_last_call() {
    let scheduler = ManualScheduler::new();
    let (debouncer, calls) = recording(&scheduler, 300);

    debouncer.call("a".to_owned());
    scheduler.advance(250);
    debouncer.call("b".to_owned());
    scheduler.advance(250);
    assert!(calls.borrow().is_empty());

    scheduler.advance(50);
    assert_eq!(*calls.borrow(), vec!["b".to_owned()]);
}

#[test]
fn separate_quiet_windows_fire_separately() {
    let scheduler = ManualScheduler::new();
    let (debouncer, calls) = recording(&scheduler, 300);

    debouncer.call("first".to_owned());
    scheduler.advance(300);
    debouncer.call("second".to_owned());
    scheduler.advance(300);

    assert_eq!(*calls.borrow(), vec!["first".to_owned(), "second".to_owned()]);
}

#[test]
fn cancel_drops_pending_call() {
    let scheduler = ManualScheduler::new();
    let (debouncer, calls) = recording(&scheduler, 300);

    debouncer.call("never".to_owned());
    debouncer.cancel();
    scheduler.advance(1_000);

    assert!(calls.borrow().is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn dropping_debouncer_cancels_pending_call() {
    let scheduler = ManualScheduler::new();
    let (debouncer, calls) = recording(&scheduler, 300);

    debouncer.call("gone".to_owned());
    drop(debouncer);
    scheduler.advance(1_000);

    assert!(calls.borrow().is_empty());
}

#[test]
fn cancel_without_pending_call_is_noop() {
    let scheduler = ManualScheduler::new();
    let (debouncer, calls) = recording(&scheduler, 300);
    debouncer.cancel();
    assert_eq!(debouncer.delay_ms(), 300);
    assert!(calls.borrow().is_empty());
}
