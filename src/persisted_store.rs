use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

use crate::app_config;
use portfolio_core::{Accent, AccentPreference, KeyValueStore, StorageError};

pub(crate) struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub(crate) fn open() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| {
                report(StorageError::Read {
                    key: key.to_string(),
                    reason: js_err(err),
                })
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| {
                report(StorageError::Write {
                    key: key.to_string(),
                    reason: js_err(err),
                })
            })
    }
}

fn report(err: StorageError) -> StorageError {
    if app_config::debug_enabled() {
        gloo::console::warn!("storage", err.to_string());
    }
    err
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    "js error".to_string()
}

fn accent_preference() -> AccentPreference<LocalStore> {
    let store = LocalStore::open();
    if store.is_none() {
        report(StorageError::Unavailable);
    }
    AccentPreference::new(store)
}

pub(crate) fn load_accent() -> Accent {
    accent_preference().load()
}

pub(crate) fn save_accent(accent: &Accent) {
    accent_preference().save(accent);
}
