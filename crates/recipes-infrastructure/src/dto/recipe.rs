//! Recipe DTO and collection codec.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use recipes_core::error::{RecipeError, Result};
use recipes_core::recipe::{Difficulty, Recipe};

/// One stored recipe, as it appears inside the collection array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDTO {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
    pub prep_time: u32,
    pub difficulty: Difficulty,
    pub category: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<&Recipe> for RecipeDTO {
    fn from(recipe: &Recipe) -> Self {
        RecipeDTO {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            image_url: recipe.image_url.clone(),
            prep_time: recipe.prep_time,
            difficulty: recipe.difficulty,
            category: recipe.category.clone(),
            created_at: recipe
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl TryFrom<RecipeDTO> for Recipe {
    type Error = RecipeError;

    fn try_from(dto: RecipeDTO) -> Result<Self> {
        if dto.prep_time == 0 {
            return Err(RecipeError::Serialization {
                format: "JSON".to_string(),
                message: format!("recipe '{}' has a prepTime of 0", dto.id),
            });
        }
        let created_at = DateTime::parse_from_rfc3339(&dto.created_at)?.with_timezone(&Utc);

        Ok(Recipe {
            id: dto.id,
            title: dto.title,
            ingredients: dto.ingredients,
            instructions: dto.instructions,
            image_url: dto.image_url,
            prep_time: dto.prep_time,
            difficulty: dto.difficulty,
            category: dto.category,
            created_at,
        })
    }
}

// ============================================================================
// Collection codec
// ============================================================================

/// Serializes the full collection into its stored JSON form.
pub fn encode_collection(recipes: &[Recipe]) -> Result<String> {
    let dtos: Vec<RecipeDTO> = recipes.iter().map(RecipeDTO::from).collect();
    Ok(serde_json::to_string(&dtos)?)
}

/// Parses a stored collection. Any bad record fails the whole collection.
pub fn decode_collection(raw: &str) -> Result<Vec<Recipe>> {
    let dtos: Vec<RecipeDTO> = serde_json::from_str(raw)?;
    dtos.into_iter().map(Recipe::try_from).collect()
}
