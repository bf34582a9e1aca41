//! `localStorage` behind the [`KeyValueStore`] seam.

use sf_behavior::storage::{KeyValueStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn storage() -> Result<web_sys::Storage, StoreError> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Ok(storage),
        _ => Err(StoreError::Unavailable),
    }
}

fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => format!("{}: {}", String::from(e.name()), String::from(e.message())),
        None => format!("{err:?}"),
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        storage()?
            .get_item(key)
            .map_err(|err| StoreError::Backend(describe(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage()?.set_item(key, value).map_err(|err| {
            let quota = err
                .dyn_ref::<js_sys::Error>()
                .is_some_and(|e| String::from(e.name()) == "QuotaExceededError");
            if quota {
                StoreError::QuotaExceeded(key.to_owned())
            } else {
                StoreError::Backend(describe(&err))
            }
        })
    }
}
