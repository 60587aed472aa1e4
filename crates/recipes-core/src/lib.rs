//! Domain layer of the recipe catalog.
//!
//! Holds the recipe model, the authoritative [`RecipeStore`], the search
//! filter, the local session and the storage traits implemented by
//! `recipes-infrastructure`.

pub mod error;
pub mod profile;
pub mod recipe;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;

// Re-export common types
pub use error::RecipeError;
pub use profile::ProfileStats;
pub use store::RecipeStore;
