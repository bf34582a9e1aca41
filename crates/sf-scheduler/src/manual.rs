use crate::{Scheduler, Task, TaskId};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

/// Delayed-task queue driven by an explicit virtual clock.
///
/// Tasks due at the same instant run in scheduling order. A task may schedule
/// or cancel other tasks while it runs.
#[derive(Default)]
pub struct ManualScheduler {
    inner: RefCell<Queue>,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_id: u64,
    due: BTreeMap<(u64, TaskId), Task>,
    index: HashMap<TaskId, u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().due.len()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now_ms + ms;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.inner.borrow_mut().now_ms = target;
    }

    /// Run everything still queued, however far in the future.
    pub fn run_until_idle(&self) {
        while let Some(task) = self.pop_due(u64::MAX) {
            task();
        }
    }

    fn pop_due(&self, limit: u64) -> Option<Task> {
        let mut queue = self.inner.borrow_mut();
        let (&(at, id), _) = queue.due.first_key_value()?;
        if at > limit {
            return None;
        }
        let task = queue.due.remove(&(at, id))?;
        queue.index.remove(&id);
        queue.now_ms = queue.now_ms.max(at);
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskId {
        let mut queue = self.inner.borrow_mut();
        queue.next_id += 1;
        let id = TaskId(queue.next_id);
        let at = queue.now_ms + u64::from(delay_ms);
        queue.due.insert((at, id), task);
        queue.index.insert(id, at);
        id
    }

    fn cancel(&self, id: TaskId) -> bool {
        let mut queue = self.inner.borrow_mut();
        match queue.index.remove(&id) {
            Some(at) => queue.due.remove(&(at, id)).is_some(),
            None => false,
        }
    }
}
