//! Hook processing handler
//!
//! Reads a hook event from stdin, resolves its configuration and runs it
//! through the orchestrator with a shell command as the action.

use anyhow::{Context, Result};
use std::io::{self, Read};
use tracing::debug;

use super::super::{CliContext, CommandAction};
use crate::hooks::{on_hook, HookEvent};
use crate::notify::{HipChatClient, TemplateContext, TemplateEngine, TracingLog};

/// Handler for hook processing operations
pub struct HookHandler<'a> {
    context: &'a CliContext,
}

impl<'a> HookHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn handle_hook(&self, command: &str, dry_run: bool) -> Result<()> {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read hook event from stdin")?;

        let event: HookEvent =
            serde_json::from_str(&buffer).context("Failed to parse hook event JSON")?;
        debug!("Hook event: {:?}", event);

        let config = self
            .context
            .config_manager
            .effective_config(&event.owner, &event.repo)?;

        if dry_run {
            let pending = TemplateEngine::new()
                .render(&config.pending_template, &TemplateContext::from(&event));
            println!("Dry run - would send notification:");
            println!("Room: {}", config.hipchat_room);
            println!("Message: {pending}");
            println!("Results under: {}", config.result_root.display());
            return Ok(());
        }

        let sender = HipChatClient::from_config(&config)?;
        let action = CommandAction::new(command);

        let report = on_hook(&buffer, &config, &event, &action, &sender, Some(&TracingLog))
            .context("Failed to record hook")?;

        println!("Hook processed: {}", report.state);
        println!("Run directory: {}", report.run_dir.display());
        if let Some(exit_code) = report.exit_code {
            println!("Exit code: {exit_code}");
        }

        Ok(())
    }
}
