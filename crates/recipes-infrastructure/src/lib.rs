//! Infrastructure layer of the recipe catalog: key-value storage backends,
//! the stored recipe format, repositories, configuration and image uploads.

pub mod config;
pub mod dto;
pub mod image_upload;
pub mod local_recipe_repository;
pub mod local_session_repository;
pub mod paths;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::image_upload::ImageUpload;
pub use crate::local_recipe_repository::LocalRecipeRepository;
pub use crate::local_session_repository::LocalSessionRepository;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
