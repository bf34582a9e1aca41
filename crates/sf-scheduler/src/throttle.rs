use crate::SharedScheduler;
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Leading-edge throttle: the first call runs immediately and opens a window
/// of `limit_ms` during which further calls are dropped.
pub struct Throttled<A: 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: SharedScheduler,
    limit_ms: u32,
    closed: Cell<bool>,
    callback: Box<dyn Fn(A)>,
}

impl<A: 'static> Throttled<A> {
    pub fn new(scheduler: SharedScheduler, limit_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                limit_ms,
                closed: Cell::new(false),
                callback: Box::new(callback),
            }),
        }
    }

    /// Returns `true` when the callback ran.
    pub fn call(&self, args: A) -> bool {
        if self.inner.closed.get() {
            tracing::trace!("throttled call dropped");
            return false;
        }
        (self.inner.callback)(args);
        self.inner.closed.set(true);

        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        self.inner.scheduler.schedule(
            self.inner.limit_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.closed.set(false);
                }
            }),
        );
        true
    }
}
