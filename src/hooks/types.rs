//! Type definitions for hook processing
//!
//! The hook event is the value persisted as `hook.json`; its JSON field names
//! are PascalCase so a record written by one run reads back field-for-field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

/// One incoming event describing a repository action
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HookEvent {
    /// Repository owner or organisation
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Event kind, e.g. "push"
    #[serde(default)]
    pub event_name: String,

    /// Opaque identifier echoed back (target ref or SHA)
    #[serde(default)]
    pub status_ref: String,

    /// Sub-action reported by the source, e.g. "opened"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// User who triggered the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Git ref the event refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,

    /// Branch or ref being built; preferred over `Ref` in messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Head commit of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,

    /// Set when the event deleted its ref
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// Fields this crate does not model, preserved for the audit record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HookEvent {
    /// Create an event with the identifying fields set
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        event_name: impl Into<String>,
        status_ref: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            event_name: event_name.into(),
            status_ref: status_ref.into(),
            ..Default::default()
        }
    }

    /// The value bound to the `Target` placeholder
    pub fn display_target(&self) -> &str {
        self.target
            .as_deref()
            .or(self.r#ref.as_deref())
            .unwrap_or(&self.status_ref)
    }
}

/// Outcome of running an action
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteResult {
    /// Process-style exit code; zero is success
    pub exit_code: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl ExecuteResult {
    /// Result with no captured output
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            output: None,
        }
    }
}

/// What an action hands back when it ran to completion
#[derive(Debug, Clone, Default)]
pub struct ActionOutcome {
    pub result: ExecuteResult,

    /// Where the action left its output, if anywhere
    pub output_path: Option<PathBuf>,
}

impl From<ExecuteResult> for ActionOutcome {
    fn from(result: ExecuteResult) -> Self {
        Self {
            result,
            output_path: None,
        }
    }
}

/// Lifecycle states a hook moves through, as announced in chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookState {
    Pending,
    Error,
    Failure,
    Success,
}

impl HookState {
    /// Classify an action outcome into a terminal state
    ///
    /// An action error wins over any exit code.
    pub fn classify(action_failed: bool, exit_code: i32) -> Self {
        if action_failed {
            HookState::Error
        } else if exit_code != 0 {
            HookState::Failure
        } else {
            HookState::Success
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, HookState::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HookState::Pending => "pending",
            HookState::Error => "error",
            HookState::Failure => "failure",
            HookState::Success => "success",
        }
    }
}

impl fmt::Display for HookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one processed hook
#[derive(Debug, Clone)]
pub struct HookReport {
    /// Terminal state the hook ended in
    pub state: HookState,

    /// Run directory holding `hook.json`
    pub run_dir: PathBuf,

    /// Exit code reported by the action; `None` when the action errored
    pub exit_code: Option<i32>,

    /// Output location reported by the action, if any
    pub action_output: Option<PathBuf>,
}
