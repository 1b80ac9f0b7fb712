//! YAML configuration file
//!
//! Default location is `<config_dir>/domcp/config.yaml`
//! (`~/.config/domcp/config.yaml` on Linux).
//!
//! ```yaml
//! services:
//!   - droplets:all
//!   - networking:dns
//! api_endpoint: https://api.digitalocean.com
//! log_level: debug
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::error::ConfigResult;

/// Configuration file structure; every field is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// `service[:category]` tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Reads the configuration file, caching the parsed result
///
/// # Example
///
/// ```no_run
/// use domcp_core::config::FileConfigProvider;
///
/// let file = FileConfigProvider::user().load().unwrap();
/// println!("{:?}", file.services);
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    cache: RwLock<Option<ConfigFile>>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Provider for the default user-level file
    pub fn user() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Parsed file, or an empty one if the file does not exist
    pub fn load(&self) -> ConfigResult<ConfigFile> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        self.reload()
    }

    /// Re-read from disk, replacing the cache
    pub fn reload(&self) -> ConfigResult<ConfigFile> {
        let config = if self.path.exists() {
            let content = fs::read_to_string(&self.path)?;
            if content.trim().is_empty() {
                ConfigFile::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            ConfigFile::default()
        };

        *self.cache.write() = Some(config.clone());
        Ok(config)
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

/// `<config_dir>/domcp/config.yaml`
pub fn default_config_path() -> PathBuf {
    // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("domcp").join("config.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));
        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "services:\n  - droplets:all\n  - accounts\nlog_level: debug\n").unwrap();

        let config = FileConfigProvider::new(&path).load().unwrap();
        assert_eq!(config.services, Some(vec!["droplets:all".to_string(), "accounts".to_string()]));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.api_endpoint.is_none());
    }

    #[test]
    fn test_cache_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: info\n").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert_eq!(provider.load().unwrap().log_level.as_deref(), Some("info"));

        fs::write(&path, "log_level: warn\n").unwrap();
        assert_eq!(provider.load().unwrap().log_level.as_deref(), Some("info"));
        assert_eq!(provider.reload().unwrap().log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(FileConfigProvider::new(&path).load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "services: [unterminated\n").unwrap();

        let err = FileConfigProvider::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_default_path() {
        let path = default_config_path();
        assert!(path.ends_with("domcp/config.yaml"));
    }
}
