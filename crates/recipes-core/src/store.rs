//! The recipe store: authoritative in-memory collection plus persistence sync.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::recipe::{Recipe, RecipeData, RecipePersistence};
use crate::search;

/// Owns the recipe collection and keeps the persisted copy in sync.
///
/// The collection is ordered most-recent-first: `add` prepends, nothing else
/// reorders. Every mutation writes the full collection through the
/// [`RecipePersistence`] boundary, except while the store is still loading,
/// so an empty default never overwrites data that has not been read yet.
///
/// # Example
///
/// ```ignore
/// let mut store = RecipeStore::open(persistence);
/// let id = store.add(data).id.clone();
/// store.update(&id, changed);
/// store.delete(&id);
/// ```
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    loading: bool,
    persistence: Arc<dyn RecipePersistence>,
}

impl RecipeStore {
    /// Creates an empty store in the loading state.
    ///
    /// Call [`initialize`](Self::initialize) to read the persisted collection.
    pub fn new(persistence: Arc<dyn RecipePersistence>) -> Self {
        Self {
            recipes: Vec::new(),
            loading: true,
            persistence,
        }
    }

    /// Creates a store and immediately loads the persisted collection.
    pub fn open(persistence: Arc<dyn RecipePersistence>) -> Self {
        let mut store = Self::new(persistence);
        store.initialize();
        store
    }

    /// Loads the persisted collection, replacing the in-memory one.
    pub fn initialize(&mut self) {
        self.loading = true;
        self.recipes = self.persistence.load();
        self.loading = false;
        tracing::debug!("Recipe store initialized with {} recipes", self.recipes.len());
    }

    /// Whether the initial load has not completed yet.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Adds a new recipe at the front of the collection.
    ///
    /// Assigns a fresh unique id and the current time as `created_at`.
    /// Does not validate `data`.
    pub fn add(&mut self, data: RecipeData) -> &Recipe {
        let id = self.generate_id();
        let recipe = Recipe::from_data(id, Utc::now(), data);
        tracing::info!("Adding recipe '{}' ({})", recipe.title, recipe.id);

        self.recipes.insert(0, recipe);
        self.persist();
        &self.recipes[0]
    }

    /// Replaces every field except `id` and `created_at` of the recipe `id`.
    ///
    /// Returns `false` and leaves the collection unchanged when no recipe has
    /// that id.
    pub fn update(&mut self, id: &str, data: RecipeData) -> bool {
        let found = match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.apply(data);
                tracing::info!("Updated recipe {}", id);
                true
            }
            None => {
                tracing::debug!("Update skipped, no recipe with id {}", id);
                false
            }
        };
        self.persist();
        found
    }

    /// Removes the recipe `id`, keeping the order of the others.
    ///
    /// Returns `false` when no recipe has that id.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        let removed = self.recipes.len() != before;
        if removed {
            tracing::info!("Deleted recipe {}", id);
        } else {
            tracing::debug!("Delete skipped, no recipe with id {}", id);
        }
        self.persist();
        removed
    }

    /// The current collection, most recent first.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes whose title, category or an ingredient contains `query`.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        search::filter(&self.recipes, query)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Flushes the collection one last time and releases the store.
    pub fn shutdown(self) {
        self.persist();
        tracing::debug!("Recipe store shut down");
    }

    fn persist(&self) {
        if self.loading {
            tracing::debug!("Store still loading, skipping save");
            return;
        }
        self.persistence.save(&self.recipes);
    }

    fn generate_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
