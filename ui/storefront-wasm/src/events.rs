//! Event listener ownership.
//!
//! A [`Listener`] keeps its closure alive and unregisters it when dropped, so a
//! component detaches by dropping its listeners.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Listener
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            tracing::warn!(event, ?err, "could not attach listener");
        }
        Listener {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::trace!(event = self.event, "listener already gone");
        }
    }
}

/// A mounted feature that owns its listeners.
pub trait Component {
    fn name(&self) -> &'static str;

    fn listeners(&self) -> &[Listener];
}
