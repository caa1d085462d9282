//! Configuration loading for the relay
//!
//! # Configuration Hierarchy
//!
//! 1. **Repository-level**: `{config_root}/{Owner}/{Repo}/config.toml`
//! 2. **Global**: `{config_root}/config.toml`
//! 3. Built-in defaults
//!
//! The default `config_root` is `~/.config/hookrelay` on Linux (the platform
//! config directory elsewhere).

pub mod types;

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::results::validate_component;

pub use types::{EffectiveConfig, FileConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves effective configuration for hooks
///
/// # Example
///
/// ```rust,no_run
/// use hookrelay::config::ConfigManager;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manager = ConfigManager::new(None)?;
///     let config = manager.effective_config("Acme", "widget")?;
///     println!("Results go to {}", config.result_root.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_root: PathBuf,
    global: FileConfig,
}

impl ConfigManager {
    /// Creates a new ConfigManager
    ///
    /// Reads the global configuration once. A missing file is the same as an
    /// empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if no config root is given and the platform config
    /// directory cannot be determined, or if the global file cannot be parsed.
    pub fn new(config_root: Option<PathBuf>) -> AppResult<Self> {
        let config_root = match config_root {
            Some(root) => root,
            None => Self::default_config_root()?,
        };
        let global = Self::load_file(&config_root.join(CONFIG_FILE_NAME))?;

        Ok(ConfigManager {
            config_root,
            global,
        })
    }

    pub fn default_config_root() -> AppResult<PathBuf> {
        ProjectDirs::from("", "", "hookrelay")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| AppError::config("Failed to get base directories"))
    }

    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    /// Global settings as loaded from disk
    pub fn global(&self) -> &FileConfig {
        &self.global
    }

    /// Path of the per-repository override file
    pub fn repo_config_path(&self, owner: &str, repo: &str) -> PathBuf {
        self.config_root.join(owner).join(repo).join(CONFIG_FILE_NAME)
    }

    /// Resolve the settings used to process a hook for `owner/repo`
    ///
    /// Empty `owner` or `repo` resolves global settings only. Any other value
    /// must be a single path component so the lookup stays under the config root.
    pub fn effective_config(&self, owner: &str, repo: &str) -> AppResult<EffectiveConfig> {
        let repo_file = if owner.is_empty() || repo.is_empty() {
            FileConfig::default()
        } else {
            validate_component("Owner", owner)?;
            validate_component("Repo", repo)?;
            Self::load_file(&self.repo_config_path(owner, repo))?
        };

        Ok(repo_file.over(self.global.clone()).into())
    }

    fn load_file(path: &Path) -> AppResult<FileConfig> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(FileConfig::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::io_with_source(path, "read config file", e))?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_give_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

        let config = manager.effective_config("Acme", "widget").unwrap();
        assert_eq!(config, EffectiveConfig::default());
    }

    #[test]
    fn test_repo_file_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            "result_root = \"/srv/results\"\nhipchat_room = \"builds\"\nhipchat_token = \"t\"\n",
        )
        .unwrap();
        let repo_dir = temp_dir.path().join("Acme").join("widget");
        fs::create_dir_all(&repo_dir).unwrap();
        fs::write(
            repo_dir.join("config.toml"),
            "hipchat_room = \"widget\"\nsuccess_template = \"yay {{UserName}}\"\n",
        )
        .unwrap();

        let manager = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

        let widget = manager.effective_config("Acme", "widget").unwrap();
        assert_eq!(widget.result_root, PathBuf::from("/srv/results"));
        assert_eq!(widget.hipchat_room, "widget");
        assert_eq!(widget.hipchat_token, "t");
        assert_eq!(widget.success_template, "yay {{UserName}}");

        let other = manager.effective_config("Acme", "gadget").unwrap();
        assert_eq!(other.hipchat_room, "builds");
        assert_eq!(other.success_template, types::DEFAULT_SUCCESS_TEMPLATE);
    }

    #[test]
    fn test_unparsable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.toml"), "result_root = [").unwrap();

        let err = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, AppError::TomlParsing { .. }), "got {err:?}");
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_repo_lookup_stays_under_config_root() {
        let temp_dir = TempDir::new().unwrap();
        let config_root = temp_dir.path().join("etc").join("hookrelay");
        fs::create_dir_all(&config_root).unwrap();
        fs::write(temp_dir.path().join("config.toml"), "hipchat_room = \"leaked\"\n").unwrap();

        let manager = ConfigManager::new(Some(config_root)).unwrap();

        for (owner, repo) in [("..", ".."), ("Acme", "../.."), ("a/b", "widget"), (".", "widget")] {
            let err = manager.effective_config(owner, repo).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidPathComponent { .. }),
                "expected rejection for {owner:?}/{repo:?}, got {err:?}"
            );
        }
        assert_eq!(manager.effective_config("", "").unwrap().hipchat_room, "");
    }
}
