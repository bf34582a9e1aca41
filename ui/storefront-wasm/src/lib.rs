//! Storefront WASM Frontend
//!
//! Page interactions for the storefront templates: navigation, layout
//! direction, dashboard tabs, catalog view modes, scroll reveal, form
//! validation, cart feedback and search. Each concern lives in its own module
//! and mounts as a [`events::Component`] that owns its listeners.

pub mod animation;
pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod diagnostics;
pub mod dom;
pub mod events;
pub mod feedback;
pub mod forms;
pub mod logging;
pub mod nav;
pub mod rtl;
pub mod search;
pub mod state;
pub mod storage;
pub mod timers;

use app::Storefront;
use config::StorefrontConfig;
use serde::Serialize;
use sf_behavior::storage as store;
use sf_behavior::toast::ToastKind;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (config, config_error) = match StorefrontConfig::from_page() {
        Ok(config) => (config, None),
        Err(err) => (StorefrontConfig::default(), Some(err)),
    };
    logging::init(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!(%err, "ignoring malformed storefront config");
    }

    state::ensure_diagnostics();

    let document = dom::document();
    if document.ready_state() == "loading" {
        let deferred = Closure::once_into_js(move || {
            if let Err(err) = mount(&config) {
                tracing::error!(?err, "storefront mount failed");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
        Ok(())
    } else {
        mount(&config)
    }
}

/// Detach whatever is mounted, then bind every component afresh.
fn mount(config: &StorefrontConfig) -> Result<(), JsValue> {
    if let Some(previous) = state::replace_mounted(None) {
        previous.detach();
    }
    let els = dom::Elements::bind(config)?;
    let storefront = Storefront::mount(els, state::scheduler(), state::store());
    tracing::info!(
        components = ?storefront.component_names(),
        listeners = storefront.listener_count(),
        "storefront mounted"
    );
    state::replace_mounted(Some(storefront));
    Ok(())
}

/// Re-resolve the page with `config` (a partial config object, or nothing
/// for defaults) and mount again.
#[wasm_bindgen]
pub fn reinitialize(config: JsValue) -> Result<(), JsValue> {
    let config = StorefrontConfig::from_js(config)?;
    mount(&config)
}

/// Remove every storefront listener. Diagnostics stay installed.
#[wasm_bindgen]
pub fn detach() {
    match state::replace_mounted(None) {
        Some(storefront) => storefront.detach(),
        None => tracing::debug!("detach called with nothing mounted"),
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Option<Element> {
    let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
    feedback::show_toast(&state::scheduler(), message, kind)
}

#[wasm_bindgen(js_name = saveToLocalStorage)]
pub fn save_to_local_storage(key: &str, value: JsValue) {
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
        Ok(value) => store::save_json(&*state::store(), key, &value),
        Err(err) => tracing::error!(key, %err, "error saving to storage"),
    }
}

/// The stored value, or `null` when absent or unreadable.
#[wasm_bindgen(js_name = loadFromLocalStorage)]
pub fn load_from_local_storage(key: &str) -> JsValue {
    let Some(value) = store::load_json::<serde_json::Value>(&*state::store(), key) else {
        return JsValue::NULL;
    };
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Option<Element>) {
    if let Some(el) = element {
        feedback::show_loading(&el);
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element: Option<Element>, original_content: &str) {
    if let Some(el) = element {
        feedback::hide_loading(&el, original_content);
    }
}
