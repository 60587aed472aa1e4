//! Recipe domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecipeError;

/// Placeholder shown for recipes saved without an image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546548970-71785318a17b?w=400&h=300&fit=crop";

/// Preparation time used when the form leaves it blank, in minutes.
pub const DEFAULT_PREP_TIME: u32 = 30;

/// Recommended categories offered by the recipe form.
///
/// The set is not enforced; any label is accepted by the store.
pub const RECOMMENDED_CATEGORIES: [&str; 6] = [
    "Desserts",
    "Main Courses",
    "Salads",
    "Appetizers",
    "Drinks",
    "Breakfast",
];

/// Returns true if `category` is one of [`RECOMMENDED_CATEGORIES`] (case-insensitive).
pub fn is_recommended_category(category: &str) -> bool {
    RECOMMENDED_CATEGORIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category.trim()))
}

/// How hard a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "Fácil")]
    Easy,
    #[default]
    #[serde(alias = "Médio")]
    Medium,
    #[serde(alias = "Difícil")]
    Hard,
}

impl Difficulty {
    /// The display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Self::Easy),
            "medium" | "médio" | "medio" => Ok(Self::Medium),
            "hard" | "difícil" | "dificil" => Ok(Self::Hard),
            other => Err(RecipeError::validation(
                "difficulty",
                format!("unknown difficulty '{}', expected Easy, Medium or Hard", other),
            )),
        }
    }
}

/// One dish record in the catalog.
///
/// `id` and `created_at` are assigned by the store when the recipe is added
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Ingredient lines in display order, never blank
    pub ingredients: Vec<String>,
    /// Free-text preparation steps
    pub instructions: String,
    /// Remote URL or embedded data URL; empty means "use the placeholder"
    pub image_url: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub difficulty: Difficulty,
    pub category: String,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a record from store input plus the identity assigned at creation.
    pub fn from_data(id: String, created_at: DateTime<Utc>, data: RecipeData) -> Self {
        Self {
            id,
            title: data.title,
            ingredients: data.ingredients,
            instructions: data.instructions,
            image_url: data.image_url,
            prep_time: data.prep_time,
            difficulty: data.difficulty,
            category: data.category,
            created_at,
        }
    }

    /// Replaces every mutable field with `data`, keeping `id` and `created_at`.
    pub fn apply(&mut self, data: RecipeData) {
        self.title = data.title;
        self.ingredients = data.ingredients;
        self.instructions = data.instructions;
        self.image_url = data.image_url;
        self.prep_time = data.prep_time;
        self.difficulty = data.difficulty;
        self.category = data.category;
    }

    /// The mutable fields of this record.
    pub fn data(&self) -> RecipeData {
        RecipeData {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            image_url: self.image_url.clone(),
            prep_time: self.prep_time,
            difficulty: self.difficulty,
            category: self.category.clone(),
        }
    }

    /// The image to display, falling back to the placeholder when unset.
    pub fn display_image_url(&self) -> &str {
        if self.image_url.trim().is_empty() {
            DEFAULT_IMAGE_URL
        } else {
            &self.image_url
        }
    }
}

/// Recipe fields supplied by callers of `add` and `update`.
///
/// Everything except `id` and `created_at`. The store does not validate this;
/// use [`crate::recipe::RecipeForm`] to build it from raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeData {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
    pub prep_time: u32,
    pub difficulty: Difficulty,
    pub category: String,
}
