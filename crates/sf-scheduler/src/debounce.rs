use crate::{SharedScheduler, TaskId};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Trailing-edge debounce: every [`call`](Debounced::call) restarts the wait,
/// and the callback runs once with the latest arguments after `wait_ms` of quiet.
///
/// Dropping the wrapper cancels whatever is still pending.
pub struct Debounced<A: 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: SharedScheduler,
    wait_ms: u32,
    pending: Cell<Option<TaskId>>,
    callback: Box<dyn Fn(A)>,
}

impl<A: 'static> Debounced<A> {
    pub fn new(scheduler: SharedScheduler, wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                wait_ms,
                pending: Cell::new(None),
                callback: Box::new(callback),
            }),
        }
    }

    pub fn call(&self, args: A) {
        self.cancel();
        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        let id = self.inner.scheduler.schedule(
            self.inner.wait_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.pending.set(None);
                    (inner.callback)(args);
                }
            }),
        );
        self.inner.pending.set(Some(id));
    }

    /// Drop the pending invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.inner.pending.take() {
            Some(id) => self.inner.scheduler.cancel(id),
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

impl<A: 'static> Drop for Debounced<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualScheduler;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<(u64, u32)>>>, Rc<ManualScheduler>) {
        (Rc::new(RefCell::new(Vec::new())), Rc::new(ManualScheduler::new()))
    }

    #[test]
    fn burst_of_calls_fires_once_with_last_arguments() {
        let (calls, scheduler) = recorder();
        let clock = scheduler.clone();
        let sink = calls.clone();
        let debounced = Debounced::new(scheduler.clone(), 300, move |n: u32| {
            sink.borrow_mut().push((clock.now_ms(), n));
        });

        for n in 1..=5 {
            debounced.call(n);
            scheduler.advance(100);
        }
        assert!(calls.borrow().is_empty());

        // last call happened at t=400
        scheduler.advance(199);
        assert!(calls.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*calls.borrow(), vec![(700, 5)]);
        assert!(!debounced.is_pending());
    }

    #[test]
    fn cancel_discards_pending_call() {
        let (calls, scheduler) = recorder();
        let sink = calls.clone();
        let debounced = Debounced::new(scheduler.clone(), 300, move |n: u32| {
            sink.borrow_mut().push((0, n));
        });

        debounced.call(7);
        assert!(debounced.is_pending());
        assert!(debounced.cancel());
        assert!(!debounced.cancel());
        scheduler.run_until_idle();
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn dropping_the_wrapper_cancels() {
        let (calls, scheduler) = recorder();
        let sink = calls.clone();
        let debounced = Debounced::new(scheduler.clone(), 10, move |n: u32| {
            sink.borrow_mut().push((0, n));
        });
        debounced.call(1);
        drop(debounced);

        assert_eq!(scheduler.pending(), 0);
        scheduler.run_until_idle();
        assert!(calls.borrow().is_empty());
    }
}
