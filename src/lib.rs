//! Hookrelay library
//!
//! Processes repository webhooks: announces the build in chat, runs an
//! injected action, records the event under the result root, and announces
//! the outcome.

pub mod config;
pub mod errors;
pub mod hooks;
pub mod notify;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{ConfigManager, EffectiveConfig};
pub use errors::{AppError, AppResult};
pub use hooks::{on_hook, ActionOutcome, ExecuteResult, HookAction, HookEvent, HookReport, HookState};
pub use notify::{ChatMessage, ChatSender, HipChatClient, StatusLog, TracingLog};
pub use results::ResultRecorder;
