//! Common test utilities and helpers
//!
//! Shared by the CLI tests and the library-level hook scenarios.

#![allow(dead_code)]

use assert_cmd::Command;
use hookrelay::{
    ActionOutcome, AppResult, ChatMessage, ChatSender, EffectiveConfig, ExecuteResult, HookAction,
    HookEvent,
};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

pub const TEST_OWNER: &str = "AcmeTesting";
pub const TEST_REPO: &str = "gizmo";

/// Test command builder for the hookrelay CLI
pub struct TestCommand {
    cmd: Command,
}

impl TestCommand {
    pub fn new() -> Self {
        let cmd = Command::cargo_bin("hookrelay").expect("Failed to find hookrelay binary");
        Self { cmd }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    pub fn stdin<S: AsRef<str>>(mut self, input: S) -> Self {
        self.cmd.write_stdin(input.as_ref());
        self
    }

    pub fn expect_success(mut self) -> TestAssertion {
        let assert = self.cmd.assert().success();
        TestAssertion { assert }
    }

    pub fn expect_failure(mut self) -> TestAssertion {
        let assert = self.cmd.assert().failure();
        TestAssertion { assert }
    }
}

impl Default for TestCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Test assertion wrapper with convenient methods
pub struct TestAssertion {
    assert: assert_cmd::assert::Assert,
}

impl TestAssertion {
    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stdout(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    pub fn stdout_not_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self
            .assert
            .stdout(predicate::str::contains(text.as_ref()).not());
        Self { assert }
    }

    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stderr(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    pub fn done(self) {}
}

/// A config root and result root in one temporary directory
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    /// Create an environment whose global config points results into the temp dir
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let results = temp_dir.path().join("results");
        let config = format!("result_root = {:?}\n", results.to_string_lossy());
        fs::write(temp_dir.path().join("config.toml"), config).expect("Failed to write config");

        Self { temp_dir }
    }

    pub fn config_root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn result_root(&self) -> PathBuf {
        self.temp_dir.path().join("results")
    }

    /// Write a per-repository override file
    pub fn write_repo_config(&self, owner: &str, repo: &str, content: &str) {
        let dir = self.config_root().join(owner).join(repo);
        fs::create_dir_all(&dir).expect("Failed to create repo config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write repo config");
    }

    /// Create a command configured for this environment
    pub fn command(&self) -> TestCommand {
        TestCommand::new()
            .arg("--config-root")
            .arg(self.config_root().to_string_lossy())
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat sender that keeps every message instead of delivering it
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<ChatMessage>>,
}

impl RecordingSender {
    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.message.clone())
            .collect()
    }
}

impl ChatSender for RecordingSender {
    fn send(&self, message: &ChatMessage) -> AppResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// An action that returns a fixed exit code, or fails with `error`
pub fn fixed_action(exit_code: i32, error: Option<&'static str>) -> impl HookAction {
    move |_: &str, _: &Path, _: &EffectiveConfig, _: &HookEvent| -> anyhow::Result<ActionOutcome> {
        match error {
            Some(message) => Err(anyhow::anyhow!(message)),
            None => Ok(ExecuteResult::with_exit_code(exit_code).into()),
        }
    }
}

pub fn chat_config(result_root: &Path) -> EffectiveConfig {
    EffectiveConfig {
        pending_template: "pending {{.Owner}}".to_string(),
        error_template: "error {{.Repo}}".to_string(),
        failure_template: "failure {{.Target}}".to_string(),
        success_template: "success {{.UserName}}".to_string(),
        hipchat_token: "NOT_EMPTY".to_string(),
        hipchat_room: "NON_EMPTY".to_string(),
        result_root: result_root.to_path_buf(),
        ..Default::default()
    }
}

/// The single run directory under `root/owner/repo`, or why there isn't one
pub fn results_directory_exists(root: &Path, owner: &str, repo: &str) -> Result<PathBuf, String> {
    let repo_results = root.join(owner).join(repo);
    if !repo_results.exists() {
        return Err(format!("{} was not created", repo_results.display()));
    }

    let runs: Vec<PathBuf> = fs::read_dir(&repo_results)
        .map_err(|e| e.to_string())?
        .map(|entry| entry.map(|e| e.path()).map_err(|e| e.to_string()))
        .collect::<Result<_, _>>()?;

    match runs.as_slice() {
        [run] => Ok(run.clone()),
        _ => Err(format!("expected one run directory, found {}", runs.len())),
    }
}
