use crate::error::{PatrolError, Result};
use patrol_designer_common::{ExportOptions, KeyValueStorage, TOKEN_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "PATROL_DESIGNER_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub mapbox_token: Option<String>,
    /// Default for `--media` when a command does not pass it
    pub include_media_fields: bool,
}

impl Config {
    /// Dialect for one command; `choice` comes from `--media`/`--no-media`
    pub fn export_options(&self, choice: Option<bool>) -> ExportOptions {
        ExportOptions {
            include_media_fields: choice.unwrap_or(self.include_media_fields),
            ..ExportOptions::default()
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // env var wins
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| PatrolError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("patrol-designer").join("config.json"))
    }
}

/// Key/value view over the config file.
///
/// Every write re-reads the file first so unrelated settings survive.
#[derive(Debug, Clone)]
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Config::config_path()?))
    }
}

fn to_common(e: PatrolError) -> patrol_designer_common::Error {
    match e {
        PatrolError::Document(inner) => inner,
        PatrolError::Io(inner) => inner.into(),
        PatrolError::JsonParse(inner) => inner.into(),
        other => patrol_designer_common::Error::Storage(other.to_string()),
    }
}

impl KeyValueStorage for ConfigStorage {
    fn get(&self, key: &str) -> patrol_designer_common::Result<Option<String>> {
        if key != TOKEN_STORAGE_KEY {
            return Ok(None);
        }
        let config = Config::load_from(&self.path).map_err(to_common)?;
        Ok(config.mapbox_token)
    }

    fn set(&mut self, key: &str, value: &str) -> patrol_designer_common::Result<()> {
        if key != TOKEN_STORAGE_KEY {
            return Err(patrol_designer_common::Error::Storage(format!(
                "unsupported key: {}",
                key
            )));
        }
        let mut config = Config::load_from(&self.path).map_err(to_common)?;
        config.mapbox_token = Some(value.to_string());
        config.save_to(&self.path).map_err(to_common)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_designer_common::AccessToken;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            mapbox_token: Some("pk.test".to_string()),
            include_media_fields: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_token_through_config_storage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config {
            mapbox_token: None,
            include_media_fields: true,
        }
        .save_to(&path)
        .unwrap();

        let mut token = AccessToken::load(ConfigStorage::new(path.clone()));
        assert_eq!(token.get(), "");
        token.set("pk.saved").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mapbox_token.as_deref(), Some("pk.saved"));
        // other settings kept
        assert!(config.include_media_fields);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let mut storage = ConfigStorage::new(dir.path().join("config.json"));
        assert_eq!(storage.get("other").unwrap(), None);
        assert!(storage.set("other", "x").is_err());
    }

    #[test]
    fn test_command_line_overrides_media_default() {
        let config = Config {
            include_media_fields: true,
            ..Config::default()
        };

        assert!(config.export_options(None).include_media_fields);
        assert!(!config.export_options(Some(false)).include_media_fields);
        assert!(Config::default().export_options(Some(true)).include_media_fields);
        assert!(!Config::default().export_options(None).include_media_fields);
    }
}
