//! # Browser local storage token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. The
//! token lives in `window.localStorage` under [`TOKEN_KEY`], so it survives page
//! reloads and browser restarts until an explicit logout.
//!
//! `localStorage` is looked up on every call rather than cached: `web_sys::Storage`
//! is not `Clone`-friendly across the app and the lookup is cheap.

use web_sys::Storage;

use crate::{StoreError, TokenStore, TOKEN_KEY};

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(TOKEN_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
