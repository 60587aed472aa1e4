//! Recipe domain module.
//!
//! # Module Structure
//!
//! - `model`: Recipe record, store input and difficulty labels
//! - `form`: Raw form input and validation
//! - `repository`: Persistence trait used by the store
//!
//! # Usage
//!
//! ```ignore
//! use recipes_core::recipe::{Recipe, RecipeData, RecipeForm, RecipePersistence};
//! ```

mod form;
mod model;
mod repository;

pub use form::{FormDefaults, FormMode, RecipeForm, split_ingredients};
pub use model::{
    DEFAULT_IMAGE_URL, DEFAULT_PREP_TIME, Difficulty, RECOMMENDED_CATEGORIES, Recipe, RecipeData,
    is_recommended_category,
};
pub use repository::RecipePersistence;
