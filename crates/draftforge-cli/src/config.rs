//! CLI configuration file handling.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Process-wide Gemini API key, used when neither the flag nor the
    /// environment provides one.
    pub api_key: Option<String>,
    /// Model identifier override.
    pub model: Option<String>,
    /// Database file override.
    pub db_path: Option<String>,
}

impl CliConfig {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("Warning: Failed to parse config: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("Warning: Failed to read config: {err}");
                Self::default()
            }
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("draftforge")
            .join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        if let Some(path) = &self.db_path {
            return PathBuf::from(path);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("draftforge")
            .join("draftforge.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_override() {
        let config = CliConfig {
            db_path: Some("/tmp/custom.db".to_string()),
            ..Default::default()
        };
        assert_eq!(config.db_path(), PathBuf::from("/tmp/custom.db"));
    }
}
