//! TOML configuration for the recipe catalog.
//!
//! Every section and field is optional; a missing file yields the defaults.
//!
//! ```toml
//! [storage]
//! data_dir = "/tmp/recipes"
//! quota_bytes = 5242880
//!
//! [logging]
//! level = "debug"
//! file = true
//!
//! [recipes]
//! default_prep_time = 20
//! ```

use std::path::{Path, PathBuf};

use recipes_core::error::{RecipeError, Result};
use recipes_core::recipe::{DEFAULT_IMAGE_URL, DEFAULT_PREP_TIME, FormDefaults};
use serde::{Deserialize, Serialize};

use crate::paths::RecipesPaths;

/// Default per-key quota, matching the usual browser local-storage budget.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Key-value storage settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory for stored values
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Maximum serialized size of a single value
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: default_quota_bytes(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. "info" or "recipes_core=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Also write daily-rolling log files to the logs directory
    #[serde(default)]
    pub file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: false,
        }
    }
}

/// Recipe form defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecipesConfig {
    #[serde(default = "default_image_url")]
    pub default_image_url: String,
    #[serde(default = "default_prep_time")]
    pub default_prep_time: u32,
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

fn default_prep_time() -> u32 {
    DEFAULT_PREP_TIME
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            default_image_url: default_image_url(),
            default_prep_time: default_prep_time(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub recipes: RecipesConfig,
}

impl AppConfig {
    /// Loads configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        match RecipesPaths::config_file() {
            Ok(path) if path.exists() => Self::load_from(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RecipeError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            RecipeError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.storage.quota_bytes == 0 {
            return Err(RecipeError::config("storage.quota_bytes must be greater than 0"));
        }
        if self.recipes.default_prep_time == 0 {
            return Err(RecipeError::config(
                "recipes.default_prep_time must be at least 1 minute",
            ));
        }
        Ok(())
    }

    /// Directory holding the key-value store.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => RecipesPaths::local_storage_dir().map_err(|e| RecipeError::config(e.to_string())),
        }
    }

    /// Defaults applied by the recipe form.
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            image_url: self.recipes.default_image_url.clone(),
            prep_time: self.recipes.default_prep_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.form_defaults(), FormDefaults::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[storage]
data_dir = "/tmp/recipes-test"

[logging]
level = "debug"
file = true

[recipes]
default_prep_time = 20
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/recipes-test"));
        assert_eq!(config.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
        assert!(config.logging.file);
        assert_eq!(config.form_defaults().prep_time, 20);
        assert_eq!(config.form_defaults().image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage\nquota_bytes = ").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, RecipeError::Config(_)));
    }

    #[test]
    fn test_zero_quota_rejected() {
        let mut config = AppConfig::default();
        config.storage.quota_bytes = 0;
        assert!(config.validate().is_err());
    }
}
