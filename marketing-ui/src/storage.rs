//! Browser Storage Backend
//!
//! `window.localStorage` behind the store's key-value trait. When the browser
//! refuses access (private mode, disabled storage) the app keeps working on
//! an in-memory map that lasts for the page session.

use marketing_bot::store::{KeyValueBackend, MemoryBackend, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum BrowserBackend {
    Local(web_sys::Storage),
    Session(MemoryBackend),
}

impl BrowserBackend {
    /// Use `localStorage` if the browser allows it
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserBackend::Local(storage),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("localStorage unavailable, changes will not persist: {}", e).into(),
                );
                BrowserBackend::Session(MemoryBackend::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserBackend::Local(_))
    }
}

fn local_storage() -> StoreResult<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Backend("no window object".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StoreError::Backend("localStorage is disabled".to_string()))
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueBackend for BrowserBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            BrowserBackend::Local(storage) => storage.get_item(key).map_err(js_error),
            BrowserBackend::Session(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            BrowserBackend::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserBackend::Session(memory) => memory.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        match self {
            BrowserBackend::Local(storage) => storage.remove_item(key).map_err(js_error),
            BrowserBackend::Session(memory) => memory.remove_item(key),
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let backend = BrowserBackend::open();
        assert!(backend.is_persistent());
        backend.set_item("marketing_ui_test", "1").unwrap();
        assert_eq!(backend.get_item("marketing_ui_test").unwrap().as_deref(), Some("1"));
        backend.remove_item("marketing_ui_test").unwrap();
    }
}
