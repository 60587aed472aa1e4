//! Recipe persistence over local key-value storage.
//!
//! The whole collection is stored as one JSON value under
//! [`RECIPES_STORAGE_KEY`]. Reads and writes are always whole-collection.

use std::sync::Arc;

use recipes_core::error::Result;
use recipes_core::recipe::{Recipe, RecipePersistence};
use recipes_core::storage::{KeyValueStore, RECIPES_STORAGE_KEY};

use crate::dto::{decode_collection, encode_collection};

/// The persistence adapter between [`recipes_core::RecipeStore`] and a
/// [`KeyValueStore`].
///
/// The fallible `try_load`/`try_save` report errors; the
/// [`RecipePersistence`] impl absorbs them: a failed load yields an empty
/// collection and a failed save leaves the stored value untouched, both
/// logged at error level.
pub struct LocalRecipeRepository {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl LocalRecipeRepository {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, RECIPES_STORAGE_KEY)
    }

    /// Uses a custom storage key (for testing).
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Reads the stored collection. An absent key is an empty collection.
    pub fn try_load(&self) -> Result<Vec<Recipe>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => decode_collection(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the stored collection.
    pub fn try_save(&self, recipes: &[Recipe]) -> Result<()> {
        let raw = encode_collection(recipes)?;
        self.storage.set_item(&self.key, &raw)
    }
}

impl RecipePersistence for LocalRecipeRepository {
    fn load(&self) -> Vec<Recipe> {
        match self.try_load() {
            Ok(recipes) => {
                tracing::debug!("Loaded {} recipes from '{}'", recipes.len(), self.key);
                recipes
            }
            Err(e) => {
                tracing::error!("Failed to load recipes, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, recipes: &[Recipe]) {
        match self.try_save(recipes) {
            Ok(()) => tracing::debug!("Saved {} recipes to '{}'", recipes.len(), self.key),
            Err(e) => tracing::error!("Failed to save recipes: {}", e),
        }
    }
}
