//! Right-to-left layout toggle.
//!
//! The flip is approximated with inline styles on flex and spacing
//! containers, re-queried on every change so late markup is covered.

use crate::dom;
use crate::events::{Component, Listener};
use crate::feedback;
use sf_behavior::direction::{self, Direction, StyleOverride};
use sf_behavior::storage::KeyValueStore;
use sf_scheduler::SharedScheduler;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub struct DirectionToggle {
    listeners: Vec<Listener>,
}

impl DirectionToggle {
    /// Restores a saved right-to-left preference and wires the toggle.
    /// Without a toggle nothing is restored.
    pub fn bind(
        toggle: Option<&HtmlElement>,
        root: &Element,
        store: Rc<dyn KeyValueStore>,
        scheduler: SharedScheduler,
    ) -> Option<DirectionToggle> {
        let toggle = toggle?;

        if direction::load_preference(&*store) == Some(Direction::Rtl) {
            let _ = root.set_attribute(direction::DIR_ATTRIBUTE, Direction::Rtl.attribute());
            apply_overrides(Direction::Rtl);
        }

        let root = root.clone();
        let pressed = toggle.clone();
        let listener = Listener::new(toggle, "click", move |_| {
            let current = Direction::from_attribute(root.get_attribute(direction::DIR_ATTRIBUTE).as_deref());
            let next = direction::toggle(&*store, current);
            let _ = root.set_attribute(direction::DIR_ATTRIBUTE, next.attribute());
            apply_overrides(next);

            let (active, rest, hold_ms) = direction::PULSE;
            feedback::flash(&scheduler, &pressed, "transform", active, rest, hold_ms);
        });

        Some(DirectionToggle {
            listeners: vec![listener],
        })
    }
}

/// Apply or clear the inline direction overrides for `dir`.
pub fn apply_overrides(dir: Direction) {
    for el in dom::query_all(direction::FLEX_SELECTOR) {
        let rule = direction::flex_override(&dom::class_attribute(&el), dir);
        apply(&el, "flex-direction", rule);
    }
    for el in dom::query_all(direction::SPACING_SELECTOR) {
        let rule = direction::spacing_override(&dom::class_attribute(&el), dir);
        apply(&el, "direction", rule);
    }
}

fn apply(el: &Element, property: &str, rule: StyleOverride) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    match rule {
        StyleOverride::Set(value) => dom::set_style(el, property, value),
        StyleOverride::Clear => dom::set_style(el, property, ""),
        StyleOverride::Keep => {}
    }
}

impl Component for DirectionToggle {
    fn name(&self) -> &'static str {
        "direction"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
