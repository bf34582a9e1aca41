//! Page contract configuration.
//!
//! Defaults describe the stock storefront markup. A page can override any
//! field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="storefront-config">
//!   { "searchSelector": "#siteSearch", "logFilter": "debug" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};
use sf_behavior::{cart, reveal, search, tabs};
use wasm_bindgen::JsValue;

pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub mobile_menu_button_id: String,
    pub mobile_menu_id: String,
    pub anchor_selector: String,
    pub rtl_toggle_id: String,
    pub tab_selector: String,
    pub panel_selector: String,
    pub grid_view_id: String,
    pub list_view_id: String,
    pub products_grid_id: String,
    pub reveal_selector: String,
    pub hover_selector: String,
    pub form_selector: String,
    /// Candidates for the add-to-cart text match.
    pub add_to_cart_selector: String,
    pub add_to_cart_label: String,
    pub quantity_control_selector: String,
    pub cart_count_selector: String,
    pub cart_total_selector: String,
    pub search_selector: String,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            mobile_menu_button_id: "mobileMenuBtn".into(),
            mobile_menu_id: "mobileMenu".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            rtl_toggle_id: "rtlToggle".into(),
            tab_selector: tabs::TAB_SELECTOR.into(),
            panel_selector: tabs::PANEL_SELECTOR.into(),
            grid_view_id: "gridView".into(),
            list_view_id: "listView".into(),
            products_grid_id: "productsGrid".into(),
            reveal_selector: reveal::REVEAL_SELECTOR.into(),
            hover_selector: reveal::HOVER_SELECTOR.into(),
            form_selector: "form".into(),
            add_to_cart_selector: "button".into(),
            add_to_cart_label: cart::ADD_LABEL.into(),
            quantity_control_selector: cart::CONTROL_SELECTOR.into(),
            cart_count_selector: cart::BADGE_SELECTOR.into(),
            cart_total_selector: cart::TOTAL_SELECTOR.into(),
            search_selector: search::SEARCH_SELECTOR.into(),
            log_filter: "info".into(),
        }
    }
}

impl StorefrontConfig {
    /// Read the inline config block. Absent or blank yields the defaults.
    pub fn from_page() -> Result<Self, serde_json::Error> {
        let text = crate::dom::by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    /// Convert a config object handed over from page script; `undefined`
    /// and `null` mean defaults.
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
    }
}
