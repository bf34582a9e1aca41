//! Short-lived visual feedback: style flashes, toasts and loading placeholders.

use crate::dom;
use sf_behavior::toast::{self, ToastKind, ToastSurface};
use sf_scheduler::{SharedScheduler, after};
use std::rc::Rc;
use web_sys::{Element, HtmlElement};

pub const SPINNER_HTML: &str = r#"<div class="loading-spinner mx-auto"></div>"#;

/// Set `property` to `active` now and to `rest` after `hold_ms`.
/// An empty `rest` removes the inline property.
pub fn flash(
    scheduler: &SharedScheduler,
    el: &HtmlElement,
    property: &'static str,
    active: &str,
    rest: &'static str,
    hold_ms: u32,
) {
    dom::set_style(el, property, active);
    let el = el.clone();
    after(&**scheduler, hold_ms, move || dom::set_style(&el, property, rest));
}

/// Flash every element with a `(active, rest, hold_ms)` transform pulse.
pub fn pulse_all(scheduler: &SharedScheduler, elements: &[HtmlElement], pulse: (&str, &'static str, u32)) {
    let (active, rest, hold_ms) = pulse;
    for el in elements {
        flash(scheduler, el, "transform", active, rest, hold_ms);
    }
}

struct DomToast {
    el: Element,
}

impl ToastSurface for DomToast {
    fn slide_in(&self) {
        dom::remove_class(&self.el, toast::OFFSCREEN_CLASS);
    }

    fn slide_out(&self) {
        dom::add_class(&self.el, toast::OFFSCREEN_CLASS);
    }

    fn remove(&self) {
        self.el.remove();
    }
}

/// Append a toast to `<body>` and run its lifecycle. Returns the element.
pub fn show_toast(scheduler: &SharedScheduler, message: &str, kind: ToastKind) -> Option<Element> {
    let Some(body) = dom::document().body() else {
        tracing::warn!("no <body> to attach toast to");
        return None;
    };
    let el = dom::create_element("div")?;
    el.set_class_name(toast::BASE_CLASSES);
    dom::add_class(&el, kind.color_class());
    dom::set_text(&el, message);
    if body.append_child(&el).is_err() {
        return None;
    }
    toast::run(scheduler, Rc::new(DomToast { el: el.clone() }));
    Some(el)
}

pub fn show_loading(el: &Element) {
    el.set_inner_html(SPINNER_HTML);
}

pub fn hide_loading(el: &Element, original_content: &str) {
    el.set_inner_html(original_content);
}
