//! Delayed-task scheduling shared by the storefront components.
//!
//! Everything here is single-threaded: tasks are `FnOnce` closures run on the
//! host's event loop, never across threads. The browser frontend implements
//! [`Scheduler`] on top of `setTimeout`; [`ManualScheduler`] drives the same
//! code from a virtual clock.

mod debounce;
mod manual;
mod throttle;

pub use debounce::Debounced;
pub use manual::ManualScheduler;
pub use throttle::Throttled;

use std::rc::Rc;

/// Identifies a scheduled task so it can be cancelled before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskId;

    /// Cancel a pending task. Returns `false` if it already ran or was unknown.
    fn cancel(&self, id: TaskId) -> bool;
}

pub type SharedScheduler = Rc<dyn Scheduler>;

/// Schedule `task` after `delay_ms` without keeping the handle.
pub fn after(scheduler: &dyn Scheduler, delay_ms: u32, task: impl FnOnce() + 'static) {
    scheduler.schedule(delay_ms, Box::new(task));
}
