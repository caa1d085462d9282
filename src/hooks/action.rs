//! The injected unit of work run for each hook
//!
//! The orchestrator never builds an action itself; callers pass one in. Any
//! closure with the right shape is an action, which keeps the orchestrator
//! testable without real build tooling.

use std::path::Path;

use crate::config::EffectiveConfig;
use super::types::{ActionOutcome, HookEvent};

/// A build/test step triggered by a hook
pub trait HookAction: Send + Sync {
    /// Run the action
    ///
    /// # Arguments
    /// * `raw` - The raw trigger input, passed through untouched
    /// * `result_path` - Run directory allocated for this hook
    /// * `config` - Effective configuration for the hook's repository
    /// * `event` - The hook event
    ///
    /// # Returns
    /// The outcome when the action ran to completion (whatever its exit code),
    /// or an error when it could not run at all.
    fn run(
        &self,
        raw: &str,
        result_path: &Path,
        config: &EffectiveConfig,
        event: &HookEvent,
    ) -> anyhow::Result<ActionOutcome>;
}

impl<F> HookAction for F
where
    F: Fn(&str, &Path, &EffectiveConfig, &HookEvent) -> anyhow::Result<ActionOutcome>
        + Send
        + Sync,
{
    fn run(
        &self,
        raw: &str,
        result_path: &Path,
        config: &EffectiveConfig,
        event: &HookEvent,
    ) -> anyhow::Result<ActionOutcome> {
        self(raw, result_path, config, event)
    }
}
