//! Mobile menu and in-page anchor scrolling.

use crate::dom;
use crate::events::{Component, Listener};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const HIDDEN: &str = "hidden";

pub struct Navigation {
    listeners: Vec<Listener>,
}

impl Navigation {
    pub fn bind(menu_button: Option<&Element>, menu: Option<&Element>, anchors: &[Element]) -> Navigation {
        let mut listeners = Vec::new();

        if let (Some(button), Some(menu)) = (menu_button, menu) {
            let toggled = menu.clone();
            listeners.push(Listener::new(button, "click", move |_| {
                dom::toggle_class(&toggled, HIDDEN);
            }));

            // Close when clicking anywhere outside the button and the menu.
            let (button, menu) = (button.clone(), menu.clone());
            listeners.push(Listener::new(&dom::document(), "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = |el: &Element| el.contains(target.as_ref());
                if !inside(&button) && !inside(&menu) {
                    dom::add_class(&menu, HIDDEN);
                }
            }));
        }

        for link in anchors {
            let anchor = link.clone();
            listeners.push(Listener::new(link, "click", move |event| {
                event.prevent_default();
                let href = anchor.get_attribute("href").unwrap_or_default();
                let fragment = href.strip_prefix('#').unwrap_or(&href);
                if let Some(target) = dom::by_id(fragment) {
                    scroll_to(&target);
                }
            }));
        }

        Navigation { listeners }
    }
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

impl Component for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
