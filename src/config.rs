//! User configuration.
//!
//! A small optional TOML file controls the bits users may want to pin
//! down: where session data lives and which map theme to render with.
//! Missing file means defaults; a present file must parse.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LifePathError, Result};
use crate::render::MapTheme;

/// Application directory name used under the platform config/data roots.
const APP_DIR: &str = "lifepath";

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Map theme name; must be a built-in theme
    pub theme: String,
    /// Override for the session data directory
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "summit".to_string(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Platform path of the configuration file, if a config root exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the platform config path; defaults when absent.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::InvalidConfig`] when the file cannot be
    /// read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| LifePathError::InvalidConfig {
            field: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: AppConfig =
            toml::from_str(&contents).map_err(|e| LifePathError::InvalidConfig {
                field: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.theme_ref()?;
        Ok(config)
    }

    /// Resolve the session data directory.
    ///
    /// Priority: CLI override, then config file, then the platform data
    /// root, then a dotted directory in the working directory.
    #[must_use]
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(".lifepath"))
    }

    /// Resolve the configured theme.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::InvalidConfig`] for an unknown name.
    pub fn theme_ref(&self) -> Result<&'static MapTheme> {
        MapTheme::by_name(&self.theme).ok_or_else(|| LifePathError::InvalidConfig {
            field: "theme".to_string(),
            reason: format!(
                "unknown theme '{}' (available: {})",
                self.theme,
                MapTheme::names().join(", ")
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, "summit");
        assert!(config.data_dir.is_none());
        assert!(config.theme_ref().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "theme = \"trail\"\ndata_dir = \"/tmp/lp\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.theme, "trail");
        assert_eq!(config.data_dir.as_deref(), Some(Path::new("/tmp/lp")));
    }

    #[test]
    fn test_load_from_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "theme = \"trail\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_theme() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "theme = \"neon\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, LifePathError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "theme = [not toml").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_data_dir_priority() {
        let config = AppConfig {
            theme: "summit".to_string(),
            data_dir: Some(PathBuf::from("/from/config")),
        };
        assert_eq!(
            config.resolve_data_dir(Some(Path::new("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            config.resolve_data_dir(None),
            PathBuf::from("/from/config")
        );
    }
}
