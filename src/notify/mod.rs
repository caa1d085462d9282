//! Chat notifications for hook state changes
//!
//! A [`Notifier`] renders the configured template for a state, records the
//! attempt in the status log, and hands the text to a [`ChatSender`].
//! Delivery is best effort: failures are logged and swallowed.

pub mod client;
pub mod log;
pub mod templates;

use tracing::{debug, warn};

use crate::config::EffectiveConfig;
use crate::errors::AppResult;
use crate::hooks::{HookEvent, HookState};

pub use client::{ChatMessage, ChatSender, HipChatClient};
pub use log::{log_line, StatusLog, TracingLog};
pub use templates::{TemplateContext, TemplateEngine};

/// Renders and delivers state notifications for one hook
pub struct Notifier<'a> {
    engine: TemplateEngine,
    sender: &'a dyn ChatSender,
    log: Option<&'a dyn StatusLog>,
}

impl<'a> Notifier<'a> {
    pub fn new(sender: &'a dyn ChatSender, log: Option<&'a dyn StatusLog>) -> Self {
        Self {
            engine: TemplateEngine::new(),
            sender,
            log,
        }
    }

    /// Template configured for `state`
    pub fn template_for(state: HookState, config: &EffectiveConfig) -> &str {
        match state {
            HookState::Pending => &config.pending_template,
            HookState::Error => &config.error_template,
            HookState::Failure => &config.failure_template,
            HookState::Success => &config.success_template,
        }
    }

    /// Render the text announcing `state` for `event`
    pub fn render(&self, state: HookState, config: &EffectiveConfig, event: &HookEvent) -> String {
        let context = TemplateContext::from(event);
        self.engine
            .render(Self::template_for(state, config), &context)
    }

    /// Announce `state`, never failing
    ///
    /// Returns the rendered message so callers can report what was sent.
    pub fn notify(&self, state: HookState, config: &EffectiveConfig, event: &HookEvent) -> String {
        let text = self.render(state, config, event);
        log_line(
            self.log,
            &format!("Hipchat: {}/{} {}: {}", event.owner, event.repo, state, text),
        );

        if let Err(e) = self.deliver(state, &text, config) {
            warn!(
                category = e.category(),
                "Failed to send {} notification for {}/{}: {}",
                state,
                event.owner,
                event.repo,
                e
            );
            log_line(self.log, &format!("Hipchat: error sending message: {e}"));
        }

        text
    }

    fn deliver(&self, state: HookState, text: &str, config: &EffectiveConfig) -> AppResult<()> {
        if !config.has_chat_credentials() {
            debug!("Chat token or room not configured, skipping {} notification", state);
            return Ok(());
        }

        let message = ChatMessage::for_state(state, config.hipchat_room.clone(), text);
        self.sender.send(&message)
    }
}
