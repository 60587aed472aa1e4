//! Local key-value storage abstraction.
//!
//! Mirrors the browser `localStorage` contract: string keys mapping to string
//! values, whole-value reads and writes, no partial updates.

use crate::error::Result;

/// Key under which the serialized recipe collection is stored.
pub const RECIPES_STORAGE_KEY: &str = "culinary_recipes";

/// Key under which the logged-in user's display name is stored.
pub const SESSION_STORAGE_KEY: &str = "userName";

/// A synchronous string key-value store.
///
/// Implementations must make `set_item` all-or-nothing: when it fails, the
/// previous value under the key stays readable.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}
