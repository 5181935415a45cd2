//! # Store crate — client-side persistence for the account client
//!
//! Holds the one piece of durable client state (the session token) behind the
//! [`TokenStore`] trait, and the [`ClientConfig`] that tells the client where the
//! account API lives and how long its timers run.
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`LocalStorageStore`] | web (WASM + `web` feature) | `local_storage` |
//! | [`FileTokenStore`] | desktop / native | `file_store` |
//! | [`MemoryTokenStore`] | tests, fallback | `memory` |

pub mod config;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "account-client";

/// Per-user data directory for this client (`<data_dir>/account-client`),
/// or `./account-client` when the platform has no data dir.
#[cfg(not(target_arch = "wasm32"))]
pub fn app_data_dir() -> std::path::PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR),
        None => {
            tracing::warn!("No platform data directory; using ./{}", APP_DIR);
            std::path::PathBuf::from(".").join(APP_DIR)
        }
    }
}

/// Fixed key the session token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Errors raised by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable single-slot storage for the bearer token.
///
/// Implementations must be cheap to clone and share one underlying slot
/// between clones, so every flow observes the last write.
pub trait TokenStore: Clone + 'static {
    /// Read the persisted token, if any.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist `token`, replacing whatever was stored.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Delete the persisted token. Deleting an absent token is not an error.
    fn remove(&self) -> Result<(), StoreError>;
}
