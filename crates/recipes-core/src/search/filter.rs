//! Case-insensitive substring filter.

use crate::recipe::Recipe;

/// Returns true if `recipe` matches the already-lowercased `needle`.
///
/// A recipe matches when the title, the category, or any single ingredient
/// line contains the needle.
fn matches_lowercase(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe.category.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

/// Returns true if `recipe` matches `query` (case-insensitive).
///
/// An empty query matches everything.
pub fn matches(recipe: &Recipe, query: &str) -> bool {
    query.is_empty() || matches_lowercase(recipe, &query.to_lowercase())
}

/// Filters `recipes` by `query`, preserving input order.
///
/// # Examples
///
/// ```
/// use recipes_core::search::filter;
///
/// let none: Vec<recipes_core::recipe::Recipe> = Vec::new();
/// assert!(filter(&none, "choc").is_empty());
/// ```
pub fn filter<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    if query.is_empty() {
        return recipes.iter().collect();
    }
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_lowercase(recipe, &needle))
        .collect()
}
