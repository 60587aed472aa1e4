//! In-memory key-value store, used in tests and for throwaway sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use recipes_core::error::{RecipeError, Result};
use recipes_core::storage::KeyValueStore;

/// A [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects values larger than `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: RwLock::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize> {
        let items = self
            .items
            .read()
            .map_err(|e| RecipeError::internal(format!("Lock poisoned: {}", e)))?;
        Ok(items.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| RecipeError::internal(format!("Lock poisoned: {}", e)))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(RecipeError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    limit,
                });
            }
        }
        let mut items = self
            .items
            .write()
            .map_err(|e| RecipeError::internal(format!("Lock poisoned: {}", e)))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| RecipeError::internal(format!("Lock poisoned: {}", e)))?;
        items.remove(key);
        Ok(())
    }
}
