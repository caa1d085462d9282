//! Shell command action used by `hookrelay hook`

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::config::EffectiveConfig;
use crate::hooks::{ActionOutcome, ExecuteResult, HookAction, HookEvent};

pub const BUILD_LOG_FILE_NAME: &str = "build.log";

/// Runs a command through `sh -c`, saving its combined output in the run directory
pub struct CommandAction {
    command: String,
}

impl CommandAction {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl HookAction for CommandAction {
    fn run(
        &self,
        _raw: &str,
        result_path: &Path,
        _config: &EffectiveConfig,
        event: &HookEvent,
    ) -> Result<ActionOutcome> {
        debug!("Running `{}` for {}/{}", self.command, event.owner, event.repo);

        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env("HOOKRELAY_OWNER", &event.owner)
            .env("HOOKRELAY_REPO", &event.repo)
            .env("HOOKRELAY_EVENT", &event.event_name)
            .env("HOOKRELAY_STATUS_REF", &event.status_ref)
            .env("HOOKRELAY_RESULT_PATH", result_path)
            .output()
            .with_context(|| format!("Failed to start `{}`", self.command))?;

        let log_path = result_path.join(BUILD_LOG_FILE_NAME);
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        fs::write(&log_path, &combined)
            .with_context(|| format!("Failed to write {}", log_path.display()))?;

        // Killed by a signal: no exit code, counts as a failed build.
        let exit_code = output.status.code().unwrap_or(-1);

        Ok(ActionOutcome {
            result: ExecuteResult {
                exit_code,
                output: Some(String::from_utf8_lossy(&combined).into_owned()),
            },
            output_path: Some(log_path),
        })
    }
}
