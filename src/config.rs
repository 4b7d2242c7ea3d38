// Runtime configuration
//
// Nothing is baked into the code: the database path and the optional
// completion-API key come from a config file in the home directory,
// with environment variables taking precedence.

use crate::error::{LadleError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the database path
const ENV_DB_PATH: &str = "LADLE_DB";
/// Environment variable overriding the completion-API key
const ENV_API_KEY: &str = "LADLE_COMPLETION_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Path to the SQLite database file. Defaults to ~/.ladle/recipes.db.
    pub db_path: Option<PathBuf>,
    /// API key for an external text-completion service, if configured.
    pub completion_api_key: Option<String>,
}

impl Config {
    /// Load configuration from ~/.ladle/config.json, then apply
    /// environment overrides. Missing file means defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        if let Ok(path) = std::env::var(ENV_DB_PATH) {
            config.db_path = Some(PathBuf::from(path));
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            config.completion_api_key = Some(key);
        }

        Ok(config)
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(".ladle").join("config.json"))
    }

    /// Resolve the database path, falling back to ~/.ladle/recipes.db.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        Ok(Self::home_dir()?.join(".ladle").join("recipes.db"))
    }

    fn home_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .ok_or_else(|| LadleError::Config("could not find home directory".to_string()))
    }
}
