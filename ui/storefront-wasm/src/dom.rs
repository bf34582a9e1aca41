//! DOM element bindings.
//!
//! Every role in the page contract is resolved once into [`Elements`]. Roles
//! are optional: a missing element only disables the feature that needs it.

use crate::config::StorefrontConfig;
use sf_behavior::cart;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// All elements matching `selector`; an invalid selector matches nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(list) => collect(&list),
        Err(_) => {
            tracing::warn!(selector, "invalid selector");
            Vec::new()
        }
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| collect(&list))
        .unwrap_or_default()
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    query_all(selector)
        .into_iter()
        .filter_map(|e| e.dyn_into::<T>().ok())
        .collect()
}

fn collect(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Raw `class` attribute; also readable on SVG elements.
pub fn class_attribute(el: &Element) -> String {
    el.get_attribute("class").unwrap_or_default()
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

/// Set an inline style property; an empty value removes it.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn style_value(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

// ── Elements struct ──

/// One `.quantity-control` group with all three parts present.
#[derive(Clone)]
pub struct QuantityControl {
    pub minus: Element,
    pub plus: Element,
    pub input: HtmlInputElement,
}

impl QuantityControl {
    pub fn within(group: &Element) -> Option<QuantityControl> {
        Some(QuantityControl {
            minus: query_within(group, cart::MINUS_SELECTOR)?,
            plus: query_within(group, cart::PLUS_SELECTOR)?,
            input: query_within(group, cart::INPUT_SELECTOR)?.dyn_into().ok()?,
        })
    }
}

/// All DOM element references used by the storefront components.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub root: Element,

    // Navigation
    pub mobile_menu_btn: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub anchor_links: Vec<Element>,

    // Layout direction
    pub rtl_toggle: Option<HtmlElement>,

    // Dashboard
    pub tabs: Vec<Element>,
    pub panels: Vec<Element>,

    // Product listing
    pub grid_view_btn: Option<Element>,
    pub list_view_btn: Option<Element>,
    pub products_grid: Option<Element>,

    // Animation
    pub reveal_targets: Vec<Element>,
    pub hover_cards: Vec<HtmlElement>,

    // Forms
    pub forms: Vec<HtmlFormElement>,

    // Cart
    pub add_to_cart_buttons: Vec<HtmlElement>,
    pub quantity_controls: Vec<QuantityControl>,
    pub cart_badges: Vec<Element>,
    pub cart_totals: Vec<HtmlElement>,

    // Search
    pub search_inputs: Vec<HtmlInputElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document has been parsed.
    pub fn bind(config: &StorefrontConfig) -> Result<Elements, JsValue> {
        let root = document()
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;

        let add_to_cart_buttons = query_all_typed::<HtmlElement>(&config.add_to_cart_selector)
            .into_iter()
            .filter(|btn| {
                let text = btn.text_content().unwrap_or_default();
                cart::is_add_to_cart(&text, &config.add_to_cart_label)
            })
            .collect();

        Ok(Elements {
            root,

            mobile_menu_btn: by_id(&config.mobile_menu_button_id),
            mobile_menu: by_id(&config.mobile_menu_id),
            anchor_links: query_all(&config.anchor_selector),

            rtl_toggle: by_id_typed(&config.rtl_toggle_id),

            tabs: query_all(&config.tab_selector),
            panels: query_all(&config.panel_selector),

            grid_view_btn: by_id(&config.grid_view_id),
            list_view_btn: by_id(&config.list_view_id),
            products_grid: by_id(&config.products_grid_id),

            reveal_targets: query_all(&config.reveal_selector),
            hover_cards: query_all_typed(&config.hover_selector),

            forms: query_all_typed(&config.form_selector),

            add_to_cart_buttons,
            quantity_controls: query_all(&config.quantity_control_selector)
                .iter()
                .filter_map(QuantityControl::within)
                .collect(),
            cart_badges: query_all(&config.cart_count_selector),
            cart_totals: query_all_typed(&config.cart_total_selector),

            search_inputs: query_all_typed(&config.search_selector),
        })
    }
}
