//! Path management for the recipe catalog.
//!
//! ```text
//! ~/.config/recipes/            # Config directory
//! ├── config.toml               # Application configuration
//! └── logs/                     # Rolling log files
//!     └── recipes.log.YYYY-MM-DD
//!
//! ~/.local/share/recipes/       # Data directory
//! └── local_storage/            # Key-value store, one file per key
//!     ├── culinary_recipes.value
//!     └── userName.value
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "recipes";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves platform-specific locations (XDG on Linux, the usual places
/// elsewhere) via `dirs`.
pub struct RecipesPaths;

impl RecipesPaths {
    /// Returns the configuration directory (e.g. `~/.config/recipes/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g. `~/.local/share/recipes/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default key-value store directory.
    pub fn local_storage_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("local_storage"))
    }

    /// Returns the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let Ok(config_file) = RecipesPaths::config_file() else {
            return;
        };
        assert!(config_file.ends_with("recipes/config.toml"));
        assert!(config_file.starts_with(RecipesPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_local_storage_dir_is_under_data_dir() {
        let Ok(dir) = RecipesPaths::local_storage_dir() else {
            return;
        };
        assert!(dir.ends_with("local_storage"));
        assert!(dir.starts_with(RecipesPaths::data_dir().unwrap()));
    }

    #[test]
    fn test_logs_dir() {
        let Ok(logs_dir) = RecipesPaths::logs_dir() else {
            return;
        };
        assert!(logs_dir.ends_with("logs"));
    }
}
