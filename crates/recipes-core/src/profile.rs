//! Profile statistics computed from the recipe collection.

use std::collections::HashMap;

use crate::recipe::Recipe;

/// Summary numbers shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStats {
    pub recipe_count: usize,
    /// Sum of all preparation times, in minutes
    pub total_prep_time: u64,
    /// Category used by the most recipes, `None` for an empty collection
    pub favorite_category: Option<String>,
}

impl ProfileStats {
    /// Computes statistics over `recipes`.
    ///
    /// Ties for the favorite category go to the category that first appears
    /// later in collection order.
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for recipe in recipes {
            let count = counts.entry(recipe.category.as_str()).or_insert(0);
            if *count == 0 {
                order.push(recipe.category.as_str());
            }
            *count += 1;
        }

        let favorite_category = order
            .iter()
            .copied()
            .reduce(|best, next| if counts[best] > counts[next] { best } else { next })
            .map(str::to_string);

        Self {
            recipe_count: recipes.len(),
            total_prep_time: recipes.iter().map(|r| u64::from(r.prep_time)).sum(),
            favorite_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Difficulty, RecipeData};
    use chrono::Utc;

    fn recipe(category: &str, prep_time: u32) -> Recipe {
        Recipe::from_data(
            format!("{}-{}", category, prep_time),
            Utc::now(),
            RecipeData {
                title: "x".to_string(),
                ingredients: vec!["y".to_string()],
                instructions: "z".to_string(),
                image_url: String::new(),
                prep_time,
                difficulty: Difficulty::Hard,
                category: category.to_string(),
            },
        )
    }

    #[test]
    fn test_empty_collection() {
        let stats = ProfileStats::from_recipes(&[]);
        assert_eq!(stats.recipe_count, 0);
        assert_eq!(stats.total_prep_time, 0);
        assert!(stats.favorite_category.is_none());
    }

    #[test]
    fn test_counts_and_favorite() {
        let recipes = vec![
            recipe("Desserts", 40),
            recipe("Salads", 10),
            recipe("Desserts", 60),
        ];
        let stats = ProfileStats::from_recipes(&recipes);
        assert_eq!(stats.recipe_count, 3);
        assert_eq!(stats.total_prep_time, 110);
        assert_eq!(stats.favorite_category.as_deref(), Some("Desserts"));
    }

    #[test]
    fn test_tie_goes_to_later_category() {
        let recipes = vec![recipe("Drinks", 5), recipe("Breakfast", 15)];
        let stats = ProfileStats::from_recipes(&recipes);
        assert_eq!(stats.favorite_category.as_deref(), Some("Breakfast"));
    }
}
