//! On-disk audit records
//!
//! Every processed hook gets its own run directory:
//!
//! ```text
//! {result_root}/{Owner}/{Repo}/{run_id}/hook.json
//! ```
//!
//! Run ids are `{UTC timestamp}-{random uuid}` and each directory is created
//! exclusively, so concurrent hooks for the same repository never share or
//! overwrite a run.

use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::hooks::HookEvent;

pub const HOOK_FILE_NAME: &str = "hook.json";

const MAX_ALLOCATION_ATTEMPTS: u32 = 8;

#[derive(Debug, Clone)]
pub struct ResultRecorder {
    result_root: PathBuf,
}

impl ResultRecorder {
    pub fn new(result_root: impl Into<PathBuf>) -> Self {
        Self {
            result_root: result_root.into(),
        }
    }

    pub fn result_root(&self) -> &Path {
        &self.result_root
    }

    /// Directory holding every run for `owner/repo`
    pub fn repo_dir(&self, owner: &str, repo: &str) -> AppResult<PathBuf> {
        validate_component("Owner", owner)?;
        validate_component("Repo", repo)?;
        Ok(self.result_root.join(owner).join(repo))
    }

    /// Create a fresh, uniquely named run directory for the event
    pub fn allocate_run(&self, event: &HookEvent) -> AppResult<PathBuf> {
        let repo_dir = self.repo_dir(&event.owner, &event.repo)?;
        fs::create_dir_all(&repo_dir)
            .map_err(|e| AppError::io_with_source(&repo_dir, "create results directory", e))?;

        for _ in 0..MAX_ALLOCATION_ATTEMPTS {
            let run_dir = repo_dir.join(new_run_id());
            match fs::create_dir(&run_dir) {
                Ok(()) => {
                    debug!("Allocated run directory {}", run_dir.display());
                    return Ok(run_dir);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(AppError::io_with_source(&run_dir, "create run directory", e));
                }
            }
        }

        Err(AppError::Io {
            path: repo_dir,
            operation: "allocate unique run directory".to_string(),
            source: None,
        })
    }

    /// Write the event as `hook.json` inside an allocated run directory
    pub fn write_event(&self, run_dir: &Path, event: &HookEvent) -> AppResult<PathBuf> {
        let hook_file = run_dir.join(HOOK_FILE_NAME);
        let content = serde_json::to_string_pretty(event)?;
        fs::write(&hook_file, content)
            .map_err(|e| AppError::io_with_source(&hook_file, "write hook record", e))?;
        Ok(hook_file)
    }

    /// Allocate a run and record the event in one step
    pub fn record(&self, event: &HookEvent) -> AppResult<PathBuf> {
        let run_dir = self.allocate_run(event)?;
        self.write_event(&run_dir, event)?;
        Ok(run_dir)
    }

    /// Read a recorded event back
    pub fn read_event(run_dir: &Path) -> AppResult<HookEvent> {
        let hook_file = run_dir.join(HOOK_FILE_NAME);
        let content = fs::read_to_string(&hook_file)
            .map_err(|e| AppError::io_with_source(&hook_file, "read hook record", e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn new_run_id() -> String {
    format!(
        "{}-{}",
        Utc::now().format("%Y%m%dT%H%M%S"),
        Uuid::new_v4().simple()
    )
}

/// Owner and repo must each be exactly one normal path component
pub(crate) fn validate_component(field: &'static str, value: &str) -> AppResult<()> {
    let mut components = Path::new(value).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == value
    );

    if single_normal && !value.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(AppError::InvalidPathComponent {
            field,
            value: value.to_string(),
        })
    }
}
