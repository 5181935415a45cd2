//! Platform token store selection.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a file under the data dir via [`store::FileTokenStore`]
//! - **WASM without `web`**: in-memory only

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileTokenStore;

/// Create the platform-appropriate token store.
pub fn make_token_store() -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileTokenStore::default_location()
    }
}
