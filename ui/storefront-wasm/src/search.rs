//! Search inputs: debounced on typing, immediate on Enter.

use crate::events::{Component, Listener};
use crate::feedback;
use sf_behavior::search::{self, SearchBox};
use sf_scheduler::SharedScheduler;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

pub struct SearchFields {
    listeners: Vec<Listener>,
    // Dropping a box cancels its pending dispatch.
    _boxes: Vec<Rc<SearchBox>>,
}

impl SearchFields {
    pub fn bind(inputs: Vec<HtmlInputElement>, scheduler: SharedScheduler) -> SearchFields {
        let fields: Rc<[HtmlElement]> = inputs.iter().map(|i| i.clone().unchecked_into()).collect();
        let mut listeners = Vec::with_capacity(inputs.len() * 2);
        let mut boxes = Vec::with_capacity(inputs.len());

        for input in &inputs {
            let (flash_scheduler, fields) = (scheduler.clone(), fields.clone());
            let search_box = Rc::new(SearchBox::new(scheduler.clone(), move |query: &str| {
                perform_search(&flash_scheduler, &fields, query)
            }));

            let (typed, on_input) = (input.clone(), search_box.clone());
            listeners.push(Listener::new(input, "input", move |_| {
                on_input.on_input(&typed.value());
            }));

            let (entered, on_enter) = (input.clone(), search_box.clone());
            listeners.push(Listener::new(input, "keypress", move |event| {
                let is_enter = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Enter");
                if is_enter {
                    event.prevent_default();
                    on_enter.on_enter(&entered.value());
                }
            }));

            boxes.push(search_box);
        }

        SearchFields {
            listeners,
            _boxes: boxes,
        }
    }
}

/// Stand-in for a backend query: logs and tints every search field.
fn perform_search(scheduler: &SharedScheduler, fields: &[HtmlElement], query: &str) {
    tracing::info!("Searching for: {query}");
    let (color, hold_ms) = search::FEEDBACK;
    for field in fields {
        feedback::flash(scheduler, field, "border-color", color, "", hold_ms);
    }
    tracing::info!("Search results for: {query}");
}

impl Component for SearchFields {
    fn name(&self) -> &'static str {
        "search"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
