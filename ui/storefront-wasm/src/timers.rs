//! `setTimeout`-backed scheduler.

use gloo_timers::callback::Timeout;
use sf_scheduler::{Scheduler, Task, TaskId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Owns one [`Timeout`] per pending task. Dropping a handle clears the timer
/// and frees its closure, so cancelled tasks leave nothing behind.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    timers: Rc<Timers>,
}

#[derive(Default)]
struct Timers {
    pending: RefCell<HashMap<TaskId, Timeout>>,
    // Handles whose callback already ran. A timeout cannot be dropped from
    // inside its own callback, so these are released on the next schedule.
    spent: RefCell<Vec<Timeout>>,
}

impl BrowserScheduler {
    pub fn pending(&self) -> usize {
        self.timers.pending.borrow().len()
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskId {
        let id = TaskId(self.next_id.get() + 1);
        self.next_id.set(id.0);

        let released: Vec<Timeout> = self.timers.spent.borrow_mut().drain(..).collect();
        drop(released);

        let timers = self.timers.clone();
        let timeout = Timeout::new(delay_ms, move || {
            let fired = timers.pending.borrow_mut().remove(&id);
            task();
            if let Some(fired) = fired {
                timers.spent.borrow_mut().push(fired);
            }
        });
        self.timers.pending.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TaskId) -> bool {
        let timeout = self.timers.pending.borrow_mut().remove(&id);
        match timeout {
            Some(timeout) => {
                drop(timeout);
                true
            }
            None => false,
        }
    }
}
