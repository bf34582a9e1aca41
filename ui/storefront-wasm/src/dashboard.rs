//! Dashboard tab switching.

use crate::dom;
use crate::events::{Component, Listener};
use sf_behavior::tabs;
use std::rc::Rc;
use web_sys::Element;

pub struct TabController {
    listeners: Vec<Listener>,
}

struct TabSet {
    tabs: Vec<Element>,
    panels: Vec<Element>,
}

impl TabController {
    pub fn bind(tabs: Vec<Element>, panels: Vec<Element>) -> Option<TabController> {
        if tabs.is_empty() {
            return None;
        }
        let set = Rc::new(TabSet { tabs, panels });
        let listeners = set
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let set = set.clone();
                Listener::new(tab, "click", move |_| set.activate(index))
            })
            .collect();
        Some(TabController { listeners })
    }
}

impl TabSet {
    fn activate(&self, clicked: usize) {
        let targets: Vec<Option<String>> = self
            .tabs
            .iter()
            .map(|tab| tab.get_attribute(tabs::TARGET_ATTRIBUTE))
            .collect();
        let panel_ids: Vec<String> = self.panels.iter().map(Element::id).collect();
        let selection = tabs::select(&targets, &panel_ids, clicked);

        for (index, tab) in self.tabs.iter().enumerate() {
            set_tab_style(tab, index == selection.active_tab);
        }
        for (index, panel) in self.panels.iter().enumerate() {
            if Some(index) == selection.visible_panel {
                dom::remove_class(panel, tabs::HIDDEN_CLASS);
            } else {
                dom::add_class(panel, tabs::HIDDEN_CLASS);
            }
        }
    }
}

fn set_tab_style(tab: &Element, active: bool) {
    let swap = |selector: &str, (inactive, active_class): (&str, &str)| {
        if let Some(el) = dom::query_within(tab, selector) {
            let (from, to) = if active { (inactive, active_class) } else { (active_class, inactive) };
            dom::remove_class(&el, from);
            dom::add_class(&el, to);
        }
    };
    if active {
        dom::add_class(tab, tabs::ACTIVE_CLASS);
    } else {
        dom::remove_class(tab, tabs::ACTIVE_CLASS);
    }
    swap("svg", tabs::ICON_CLASSES);
    swap("span", tabs::LABEL_CLASSES);
}

impl Component for TabController {
    fn name(&self) -> &'static str {
        "tabs"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
