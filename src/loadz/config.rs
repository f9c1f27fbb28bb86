use crate::error::{LoadzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;

/// Configuration for loadz, stored as config.json in the user data dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadzConfig {
    /// Path to a catalog JSON file used instead of the built-in dataset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Width budget for list rendering when the terminal width is unknown
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for LoadzConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl LoadzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LoadzError::Io)?;
        let config: LoadzConfig =
            serde_json::from_str(&content).map_err(LoadzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LoadzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LoadzError::Serialization)?;
        fs::write(config_path, content).map_err(LoadzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadzConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = LoadzConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, LoadzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = LoadzConfig::default();
        config.catalog = Some(PathBuf::from("/tmp/catalog.json"));
        config.line_width = 80;
        config.save(temp_dir.path()).unwrap();

        let loaded = LoadzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = LoadzConfig {
            catalog: Some(PathBuf::from("catalog.json")),
            line_width: 120,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: LoadzConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
