pub mod profile;
pub mod recipe;
pub mod session;

use std::sync::Arc;

use anyhow::Result;
use recipes_core::RecipeStore;
use recipes_core::error::{RecipeError, Result as CoreResult};
use recipes_core::recipe::Recipe;
use recipes_core::session::SessionService;
use recipes_core::storage::KeyValueStore;
use recipes_infrastructure::{
    AppConfig, FileKeyValueStore, LocalRecipeRepository, LocalSessionRepository,
};

/// Everything a command needs: configuration, the recipe store and the
/// session service, all sharing one key-value store.
pub struct App {
    pub config: AppConfig,
    pub store: RecipeStore,
    pub session: SessionService,
}

impl App {
    pub fn open(config: AppConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        tracing::debug!("Using local storage at {}", data_dir.display());

        let storage: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::new(data_dir).with_quota(config.storage.quota_bytes));
        let store = RecipeStore::open(Arc::new(LocalRecipeRepository::new(storage.clone())));
        let session = SessionService::new(Arc::new(LocalSessionRepository::new(storage)));

        Ok(Self {
            config,
            store,
            session,
        })
    }

    /// Flushes the store. Call after any mutating command.
    pub fn close(self) {
        self.store.shutdown();
    }
}

/// Printed ids are never shorter than this, so they stay stable as the
/// collection grows.
const MIN_ID_CHARS: usize = 8;

/// Shortest prefix of `id`, at least [`MIN_ID_CHARS`] long, that no other
/// recipe in `recipes` shares. Falls back to the full id.
pub(crate) fn short_id<'a>(recipes: &[Recipe], id: &'a str) -> &'a str {
    let shared = recipes
        .iter()
        .filter(|r| r.id != id)
        .map(|r| common_prefix_chars(&r.id, id))
        .max()
        .unwrap_or(0);
    let chars = (shared + 1).max(MIN_ID_CHARS);
    match id.char_indices().nth(chars) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

fn common_prefix_chars(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Looks up a recipe by full id or by a prefix such as the one `list` prints.
///
/// # Errors
///
/// - [`RecipeError::NotFound`] when nothing matches.
/// - [`RecipeError::Validation`] on field `id` when the prefix matches several
///   recipes; the message lists them.
pub(crate) fn resolve<'a>(store: &'a RecipeStore, id: &str) -> CoreResult<&'a Recipe> {
    if let Some(recipe) = store.get(id) {
        return Ok(recipe);
    }
    if id.is_empty() {
        return Err(RecipeError::not_found("recipe", id));
    }

    let candidates: Vec<&Recipe> = store
        .list()
        .iter()
        .filter(|r| r.id.starts_with(id))
        .collect();
    match candidates.as_slice() {
        [] => Err(RecipeError::not_found("recipe", id)),
        [recipe] => Ok(*recipe),
        several => {
            let listed: Vec<String> = several
                .iter()
                .map(|r| format!("{} ({})", r.id, r.title))
                .collect();
            Err(RecipeError::validation(
                "id",
                format!("'{}' matches several recipes: {}", id, listed.join(", ")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recipes_core::recipe::{Difficulty, RecipeData, RecipePersistence};

    /// Serves a fixed collection and ignores saves.
    struct Fixed(Vec<Recipe>);

    impl RecipePersistence for Fixed {
        fn load(&self) -> Vec<Recipe> {
            self.0.clone()
        }
        fn save(&self, _recipes: &[Recipe]) {}
    }

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe::from_data(
            id.to_string(),
            Utc::now(),
            RecipeData {
                title: title.to_string(),
                ingredients: vec!["salt".to_string()],
                instructions: "Season.".to_string(),
                image_url: String::new(),
                prep_time: 5,
                difficulty: Difficulty::Easy,
                category: "Appetizers".to_string(),
            },
        )
    }

    fn store_with(recipes: Vec<Recipe>) -> RecipeStore {
        RecipeStore::open(Arc::new(Fixed(recipes)))
    }

    #[test]
    fn test_timestamp_ids_print_distinct_resolvable_prefixes() {
        // browser ids from Date.now(), created 50 seconds apart
        let store = store_with(vec![
            recipe("1709296250000", "Pudim"),
            recipe("1709296200000", "Brigadeiro"),
        ]);

        let printed: Vec<&str> = store
            .list()
            .iter()
            .map(|r| short_id(store.list(), &r.id))
            .collect();
        assert_eq!(printed, vec!["170929625", "170929620"]);

        for (recipe, prefix) in store.list().iter().zip(&printed) {
            assert_eq!(resolve(&store, prefix).unwrap().id, recipe.id);
        }
    }

    #[test]
    fn test_ambiguous_prefix_lists_candidates() {
        let store = store_with(vec![
            recipe("1709296250000", "Pudim"),
            recipe("1709296200000", "Brigadeiro"),
        ]);

        let err = resolve(&store, "17092962").unwrap_err();
        assert!(matches!(err, RecipeError::Validation { field: "id", .. }));
        let message = err.to_string();
        assert!(message.contains("1709296250000 (Pudim)"));
        assert!(message.contains("1709296200000 (Brigadeiro)"));
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let store = store_with(vec![recipe("1709296200000", "Brigadeiro")]);
        assert!(resolve(&store, "zzzz").unwrap_err().is_not_found());
        assert!(resolve(&store, "").unwrap_err().is_not_found());
    }

    #[test]
    fn test_uuid_ids_keep_minimum_length() {
        let mut store = store_with(Vec::new());
        let id = store.add(recipe("", "Olives").data()).id.clone();

        let printed = short_id(store.list(), &id);
        assert_eq!(printed.len(), MIN_ID_CHARS);
        assert_eq!(resolve(&store, printed).unwrap().id, id);
        assert_eq!(resolve(&store, &id).unwrap().id, id);
    }

    #[test]
    fn test_short_id_of_short_or_nested_ids() {
        let store = store_with(vec![recipe("17", "A"), recipe("170", "B")]);
        assert_eq!(short_id(store.list(), "17"), "17");
        assert_eq!(short_id(store.list(), "170"), "170");
        assert_eq!(resolve(&store, "17").unwrap().title, "A");
    }
}
