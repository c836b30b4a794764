use flavorshare_core::storage::KeyValueStorage;
use flavorshare_core::{Error, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window".into()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::Storage("localStorage unavailable".into()))
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
