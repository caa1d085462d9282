//! Test notification handler
//!
//! Sends a message straight to the configured room to check credentials.

use anyhow::{bail, Result};

use super::super::CliContext;
use crate::hooks::HookState;
use crate::notify::{ChatMessage, ChatSender, HipChatClient};

pub struct TestHandler<'a> {
    context: &'a CliContext,
}

impl<'a> TestHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn handle_test(
        &self,
        message: String,
        owner: Option<String>,
        repo: Option<String>,
    ) -> Result<()> {
        let manager = &self.context.config_manager;
        let config = match (owner, repo) {
            (Some(owner), Some(repo)) => manager.effective_config(&owner, &repo)?,
            _ => manager.effective_config("", "")?,
        };

        if !config.has_chat_credentials() {
            bail!("hipchat_token and hipchat_room must be configured to send a test message");
        }

        let client = HipChatClient::from_config(&config)?;
        client.send(&ChatMessage::for_state(
            HookState::Success,
            config.hipchat_room.clone(),
            message.clone(),
        ))?;

        println!("Test notification sent successfully");
        println!("Room: {}", config.hipchat_room);
        println!("Message: {message}");

        Ok(())
    }
}
