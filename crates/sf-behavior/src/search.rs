//! Debounced search field.
//!
//! Typing schedules a dispatch once the trimmed query is longer than two
//! characters; Enter dispatches immediately. Shortening the query below the
//! minimum cancels the pending dispatch and sends nothing.

use sf_scheduler::{Debounced, SharedScheduler};
use std::rc::Rc;
use tracing::trace;

pub const SEARCH_SELECTOR: &str = r#"input[type="search"], input[placeholder*="search" i]"#;
pub const DEBOUNCE_MS: u32 = 300;
pub const MIN_QUERY_CHARS: usize = 3;

/// Border tint shown on every search field after a dispatch, and for how long.
pub const FEEDBACK: (&str, u32) = ("#3B82F6", 1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Scheduled,
    TooShort,
}

pub struct SearchBox {
    pending: Debounced<String>,
    dispatch: Rc<dyn Fn(&str)>,
}

impl SearchBox {
    pub fn new(scheduler: SharedScheduler, dispatch: impl Fn(&str) + 'static) -> Self {
        let dispatch: Rc<dyn Fn(&str)> = Rc::new(dispatch);
        let delayed = dispatch.clone();
        Self {
            pending: Debounced::new(scheduler, DEBOUNCE_MS, move |query: String| delayed(&query)),
            dispatch,
        }
    }

    /// Handle one keystroke with the field's current value.
    pub fn on_input(&self, raw: &str) -> InputOutcome {
        self.pending.cancel();
        let query = raw.trim();
        let len = query.chars().count();
        if len < MIN_QUERY_CHARS {
            trace!(len, "search query below minimum");
            return InputOutcome::TooShort;
        }
        self.pending.call(query.to_owned());
        InputOutcome::Scheduled
    }

    /// Enter bypasses the debounce and the length minimum. A keystroke-scheduled
    /// dispatch is left pending.
    pub fn on_enter(&self, raw: &str) {
        (self.dispatch)(raw.trim());
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }
}
