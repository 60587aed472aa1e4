//! Raw recipe form input and its validation.
//!
//! The store accepts whatever [`RecipeData`] it is given; checking required
//! fields and normalizing the ingredient block happens here, before any state
//! is touched.

use super::model::{DEFAULT_IMAGE_URL, DEFAULT_PREP_TIME, Difficulty, Recipe, RecipeData};
use crate::error::{RecipeError, Result};

/// Whether the form creates a new recipe or edits an existing one.
///
/// Editing does not require the ingredient block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Defaults applied to blank optional fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub image_url: String,
    pub prep_time: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_IMAGE_URL.to_string(),
            prep_time: DEFAULT_PREP_TIME,
        }
    }
}

/// Recipe form as the user typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeForm {
    pub title: String,
    /// One ingredient per line
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
    pub prep_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub category: String,
}

impl RecipeForm {
    /// Pre-fills an edit form from an existing record.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.clone(),
            image_url: recipe.image_url.clone(),
            prep_time: Some(recipe.prep_time),
            difficulty: Some(recipe.difficulty),
            category: recipe.category.clone(),
        }
    }

    /// Validates the form and converts it into store input.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Validation`] naming the first offending field.
    pub fn validate(&self, mode: FormMode, defaults: &FormDefaults) -> Result<RecipeData> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(RecipeError::validation("title", "is required"));
        }

        let ingredients = split_ingredients(&self.ingredients);
        if mode == FormMode::Create && ingredients.is_empty() {
            return Err(RecipeError::validation(
                "ingredients",
                "at least one ingredient is required",
            ));
        }

        if self.instructions.trim().is_empty() {
            return Err(RecipeError::validation("instructions", "are required"));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(RecipeError::validation("category", "is required"));
        }

        let prep_time = self.prep_time.unwrap_or(defaults.prep_time);
        if prep_time == 0 {
            return Err(RecipeError::validation(
                "prepTime",
                "must be at least 1 minute",
            ));
        }

        let image_url = if self.image_url.trim().is_empty() {
            defaults.image_url.clone()
        } else {
            self.image_url.trim().to_string()
        };

        Ok(RecipeData {
            title: title.to_string(),
            ingredients,
            instructions: self.instructions.clone(),
            image_url,
            prep_time,
            difficulty: self.difficulty.unwrap_or_default(),
            category: category.to_string(),
        })
    }
}

/// Splits a newline-separated ingredient block, dropping blank lines.
pub fn split_ingredients(block: &str) -> Vec<String> {
    block
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
