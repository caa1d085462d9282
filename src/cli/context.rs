//! CLI context shared by all command handlers

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::types::DEFAULT_LOG_LEVEL;
use crate::config::ConfigManager;

/// CLI execution context containing shared dependencies and configuration
#[derive(Clone)]
pub struct CliContext {
    pub verbose: bool,
    pub config_manager: Arc<ConfigManager>,
}

impl CliContext {
    pub fn new(config_root: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config_manager = Arc::new(ConfigManager::new(config_root)?);

        Ok(Self {
            verbose,
            config_manager,
        })
    }

    /// Initialize logging based on verbosity and the global log level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = if self.verbose {
            "debug"
        } else {
            self.config_manager
                .global()
                .log_level
                .as_deref()
                .unwrap_or(DEFAULT_LOG_LEVEL)
        };

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(
                    log_level
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                ),
            )
            .init();

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!("Config root: {}", self.config_manager.config_root().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_creation() {
        let temp_dir = TempDir::new().unwrap();
        let context = CliContext::new(Some(temp_dir.path().to_path_buf()), true).unwrap();

        assert!(context.verbose);
        assert_eq!(context.config_manager.config_root(), temp_dir.path());
    }

    #[test]
    fn test_context_rejects_broken_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "timeout_secs = \"soon\"").unwrap();

        assert!(CliContext::new(Some(temp_dir.path().to_path_buf()), false).is_err());
    }
}
