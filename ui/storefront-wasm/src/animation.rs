//! Fire-once scroll reveal and card hover lift.

use crate::dom;
use crate::events::{Component, Listener};
use sf_behavior::reveal::{self, ObserverOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct ScrollReveal {
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    listeners: Vec<Listener>,
}

impl ScrollReveal {
    pub fn bind(targets: &[Element], cards: &[HtmlElement], options: ObserverOptions) -> ScrollReveal {
        let observer = if targets.is_empty() {
            None
        } else {
            match observe(targets, options) {
                Ok(pair) => Some(pair),
                Err(err) => {
                    tracing::warn!(?err, "IntersectionObserver unavailable, reveal disabled");
                    None
                }
            }
        };

        let mut listeners = Vec::with_capacity(cards.len() * 2);
        for card in cards {
            let lifted = card.clone();
            listeners.push(Listener::new(card, "mouseenter", move |_| {
                dom::set_style(&lifted, "transform", reveal::LIFTED);
            }));
            let resting = card.clone();
            listeners.push(Listener::new(card, "mouseleave", move |_| {
                dom::set_style(&resting, "transform", reveal::RESTING);
            }));
        }

        ScrollReveal { observer, listeners }
    }
}

fn observe(targets: &[Element], options: ObserverOptions) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                dom::add_class(&target, reveal::REVEALED_CLASS);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin().to_string());

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    Ok((observer, callback))
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
    }
}

impl Component for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
