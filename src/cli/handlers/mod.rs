//! Command handlers for all CLI operations

pub mod config;
pub mod hook;
pub mod test;

use anyhow::Result;

use super::{CliContext, Commands};
use config::ConfigHandler;
use hook::HookHandler;
use test::TestHandler;

/// Routes parsed commands to their handlers
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Hook { command, dry_run } => {
                HookHandler::new(&self.context).handle_hook(&command, dry_run)
            }
            Commands::Config { action } => ConfigHandler::new(&self.context).handle_config(action),
            Commands::Test {
                message,
                owner,
                repo,
            } => TestHandler::new(&self.context).handle_test(message, owner, repo),
        }
    }
}
