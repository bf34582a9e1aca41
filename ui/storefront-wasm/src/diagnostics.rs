//! Page-wide error and load-time logging.

use crate::events::{Component, Listener};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

pub struct Diagnostics {
    listeners: Vec<Listener>,
}

impl Diagnostics {
    pub fn install() -> Diagnostics {
        let window = gloo_utils::window();
        let mut listeners = vec![Listener::new(&window, "error", |event| {
            if let Some(event) = event.dyn_ref::<ErrorEvent>() {
                gloo_console::error!("JavaScript error:", event.error());
            }
        })];

        if window.performance().is_some() {
            // The module may start after `load` has already fired.
            if crate::dom::document().ready_state() == "complete" {
                schedule_load_time();
            } else {
                listeners.push(Listener::new(&window, "load", |_| schedule_load_time()));
            }
        }

        Diagnostics { listeners }
    }
}

impl Component for Diagnostics {
    fn name(&self) -> &'static str {
        "diagnostics"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}

/// Load timing is only final after the load handlers return.
fn schedule_load_time() {
    wasm_bindgen_futures::spawn_local(async {
        TimeoutFuture::new(0).await;
        log_load_time();
    });
}

fn log_load_time() {
    let Some(performance) = gloo_utils::window().performance() else {
        return;
    };
    let entry = performance.get_entries_by_type("navigation").get(0);
    if entry.is_undefined() {
        return;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(&entry, &name.into())
            .ok()
            .and_then(|v| v.as_f64())
    };
    match (field("loadEventEnd"), field("loadEventStart")) {
        (Some(end), Some(start)) if end > 0.0 => tracing::info!("Page load time: {} ms", end - start),
        _ => tracing::debug!("navigation timing not final, load time skipped"),
    }
}
