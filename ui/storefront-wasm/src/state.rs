//! Global runtime state.
//!
//! `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded). Holds
//! the host services and whatever storefront is currently mounted.

use crate::app::Storefront;
use crate::diagnostics::Diagnostics;
use crate::storage::LocalStore;
use crate::timers::BrowserScheduler;
use sf_behavior::storage::KeyValueStore;
use sf_scheduler::SharedScheduler;
use std::cell::RefCell;
use std::rc::Rc;

pub struct Runtime {
    pub scheduler: SharedScheduler,
    pub store: Rc<dyn KeyValueStore>,
    pub mounted: Option<Storefront>,
    pub diagnostics: Option<Diagnostics>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            scheduler: Rc::new(BrowserScheduler::default()),
            store: Rc::new(LocalStore),
            mounted: None,
            diagnostics: None,
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&Runtime) -> R,
{
    RUNTIME.with(|s| f(&s.borrow()))
}

pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn scheduler() -> SharedScheduler {
    with(|s| s.scheduler.clone())
}

pub fn store() -> Rc<dyn KeyValueStore> {
    with(|s| s.store.clone())
}

/// Replace the mounted storefront, returning the previous one. The caller
/// drops it outside the borrow.
pub fn replace_mounted(next: Option<Storefront>) -> Option<Storefront> {
    with_mut(|s| std::mem::replace(&mut s.mounted, next))
}

/// Install page diagnostics once.
pub fn ensure_diagnostics() {
    if with(|s| s.diagnostics.is_some()) {
        return;
    }
    let diagnostics = Diagnostics::install();
    with_mut(|s| s.diagnostics = Some(diagnostics));
}
