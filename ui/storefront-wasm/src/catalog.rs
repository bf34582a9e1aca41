//! Product listing grid/list switch.

use crate::dom;
use crate::events::{Component, Listener};
use sf_behavior::view_mode::{self, ViewMode};
use web_sys::Element;

pub struct ViewModeToggle {
    listeners: Vec<Listener>,
}

impl ViewModeToggle {
    /// Needs both buttons and the container.
    pub fn bind(grid_btn: Option<&Element>, list_btn: Option<&Element>, container: Option<&Element>) -> Option<ViewModeToggle> {
        let (grid_btn, list_btn, container) = (grid_btn?, list_btn?, container?);
        let listeners = [(grid_btn, ViewMode::Grid), (list_btn, ViewMode::List)]
            .into_iter()
            .map(|(button, mode)| {
                let (grid_btn, list_btn, container) = (grid_btn.clone(), list_btn.clone(), container.clone());
                Listener::new(button, "click", move |_| {
                    let button_for = |mode: ViewMode| match mode {
                        ViewMode::Grid => &grid_btn,
                        ViewMode::List => &list_btn,
                    };
                    mark(button_for(mode), true);
                    mark(button_for(mode.other()), false);
                    container.set_class_name(mode.container_classes());
                })
            })
            .collect();
        Some(ViewModeToggle { listeners })
    }
}

fn mark(button: &Element, selected: bool) {
    let (add, remove) = if selected {
        (view_mode::SELECTED_CLASSES, view_mode::UNSELECTED_CLASSES)
    } else {
        (view_mode::UNSELECTED_CLASSES, view_mode::SELECTED_CLASSES)
    };
    for cls in add {
        dom::add_class(button, cls);
    }
    for cls in remove {
        dom::remove_class(button, cls);
    }
}

impl Component for ViewModeToggle {
    fn name(&self) -> &'static str {
        "view-mode"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
