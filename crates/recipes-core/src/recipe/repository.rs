//! Recipe persistence trait.

use super::model::Recipe;

/// Boundary between the in-memory recipe collection and its stored form.
///
/// Both operations work on the whole collection and never fail from the
/// caller's point of view: implementations log storage problems and fall back
/// (empty collection on load, previous stored state kept on save).
pub trait RecipePersistence: Send + Sync {
    /// Reads the stored collection, or an empty one if nothing usable is stored.
    fn load(&self) -> Vec<Recipe>;

    /// Replaces the stored collection with `recipes`.
    fn save(&self, recipes: &[Recipe]);
}
