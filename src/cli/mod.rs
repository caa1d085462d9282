//! CLI module providing the command-line front end

pub mod action;
pub mod commands;
pub mod context;
pub mod handlers;

use anyhow::Result;
use clap::Parser;

pub use action::CommandAction;
pub use commands::{Cli, Commands, ConfigAction};
pub use context::CliContext;
pub use handlers::CommandHandler;

pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command
    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        let context = CliContext::new(cli.config_root.clone(), cli.verbose)?;
        context.init_logging()?;

        CommandHandler::new(context).handle_command(cli.command)
    }
}
