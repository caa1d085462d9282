//! Configuration inspection handler

use anyhow::{Context, Result};

use super::super::{CliContext, ConfigAction};

pub struct ConfigHandler<'a> {
    context: &'a CliContext,
}

impl<'a> ConfigHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn handle_config(&self, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Show { owner, repo } => {
                let manager = &self.context.config_manager;
                let config = manager.effective_config(&owner, &repo)?;
                let content = toml::to_string_pretty(&config.redacted())
                    .context("Failed to serialize config")?;

                println!("# Effective configuration for {owner}/{repo}");
                println!("# Global: {}", manager.config_root().join("config.toml").display());
                println!("# Repository: {}", manager.repo_config_path(&owner, &repo).display());
                println!("{content}");
            }
        }

        Ok(())
    }
}
