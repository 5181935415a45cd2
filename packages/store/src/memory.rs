use std::sync::{Arc, Mutex};

use crate::{StoreError, TokenStore};

/// In-memory TokenStore for testing and as a fallback when no durable
/// storage is reachable.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StoreError> {
        self.token
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        *self.slot()? = None;
        Ok(())
    }
}
