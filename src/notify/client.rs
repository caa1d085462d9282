use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::EffectiveConfig;
use crate::errors::{AppError, AppResult};
use crate::hooks::HookState;

/// A rendered chat message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub room: String,
    pub message: String,
    pub color: String,
    pub notify: bool,
}

impl ChatMessage {
    /// Build the message announcing `state` in `room`
    pub fn for_state(state: HookState, room: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            message: message.into(),
            color: state_color(state).to_string(),
            notify: state.is_terminal(),
        }
    }
}

pub fn state_color(state: HookState) -> &'static str {
    match state {
        HookState::Pending => "yellow",
        HookState::Error => "gray",
        HookState::Failure => "red",
        HookState::Success => "green",
    }
}

/// Delivers chat messages
pub trait ChatSender: Send + Sync {
    fn send(&self, message: &ChatMessage) -> AppResult<()>;
}

/// HipChat v2 room notification client
pub struct HipChatClient {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl HipChatClient {
    pub fn new(base_url: String, auth_token: String, timeout_secs: Option<u64>) -> AppResult<Self> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(30));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hookrelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::notification_with_source("Failed to create HTTP client", e))?;

        Ok(HipChatClient {
            client,
            base_url,
            auth_token,
        })
    }

    pub fn from_config(config: &EffectiveConfig) -> AppResult<Self> {
        Self::new(
            config.hipchat_url.clone(),
            config.hipchat_token.clone(),
            Some(config.timeout_secs),
        )
    }

    fn build_url(&self, room: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| AppError::notification(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(&["v2", "room", room, "notification"]);
        Ok(url)
    }

    fn build_headers(&self) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth_value = format!("Bearer {}", self.auth_token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| AppError::notification_with_source("Invalid auth token", e))?,
        );
        Ok(headers)
    }

    fn build_message_body(message: &ChatMessage) -> serde_json::Value {
        serde_json::json!({
            "message": message.message,
            "color": message.color,
            "notify": message.notify,
            "message_format": "text",
        })
    }
}

impl ChatSender for HipChatClient {
    fn send(&self, message: &ChatMessage) -> AppResult<()> {
        let url = self.build_url(&message.room)?;
        debug!("Posting chat notification to {}", url);

        let response = self
            .client
            .post(url)
            .headers(self.build_headers()?)
            .json(&Self::build_message_body(message))
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::HttpStatus {
                status_code: status.as_u16(),
                reason: error_text,
            });
        }

        Ok(())
    }
}
