//! Processing of a single hook
//!
//! The sequence is fixed:
//! 1. announce the pending state
//! 2. allocate a run directory
//! 3. run the action with that directory as its result path
//! 4. write `hook.json`, whatever the action did
//! 5. classify the outcome and announce the terminal state
//!
//! Action errors and delivery failures end up in the logs and in chat. The only
//! error returned to the caller is a failure to record the hook on disk.

use tracing::{error, info, warn};

use crate::config::EffectiveConfig;
use crate::errors::AppResult;
use crate::notify::{log_line, ChatSender, Notifier, StatusLog};
use crate::results::ResultRecorder;
use super::action::HookAction;
use super::types::{HookEvent, HookReport, HookState};

/// Process one hook from start to terminal notification
///
/// # Arguments
/// * `raw` - Raw trigger input, handed to the action untouched
/// * `config` - Effective configuration for the event's repository
/// * `event` - The hook event
/// * `action` - The build/test step to run
/// * `sender` - Chat delivery used for notifications
/// * `log` - Optional status log; `None` discards status lines
///
/// # Errors
/// Returns an error only when the run directory or `hook.json` cannot be
/// written. If the run directory cannot be allocated the action is not run and
/// no terminal notification is sent.
pub fn on_hook(
    raw: &str,
    config: &EffectiveConfig,
    event: &HookEvent,
    action: &dyn HookAction,
    sender: &dyn ChatSender,
    log: Option<&dyn StatusLog>,
) -> AppResult<HookReport> {
    let notifier = Notifier::new(sender, log);
    let recorder = ResultRecorder::new(&config.result_root);

    notifier.notify(HookState::Pending, config, event);

    let run_dir = recorder.allocate_run(event).map_err(|e| {
        error!("Failed to allocate run directory for {}/{}: {}", event.owner, event.repo, e);
        log_line(log, &format!("Error recording hook: {e}"));
        e
    })?;

    let outcome = action.run(raw, &run_dir, config, event);

    if let Err(e) = recorder.write_event(&run_dir, event) {
        error!("Failed to write hook record in {}: {}", run_dir.display(), e);
        log_line(log, &format!("Error recording hook: {e}"));
        return Err(e);
    }

    let (state, exit_code, action_output) = match outcome {
        Ok(outcome) => {
            let state = HookState::classify(false, outcome.result.exit_code);
            (state, Some(outcome.result.exit_code), outcome.output_path)
        }
        Err(e) => {
            warn!("Action failed for {}/{}: {:#}", event.owner, event.repo, e);
            log_line(log, &format!("Action error: {e:#}"));
            (HookState::classify(true, 0), None, None)
        }
    };

    if let Some(path) = &action_output {
        log_line(log, &format!("Action output: {}", path.display()));
    }

    notifier.notify(state, config, event);
    info!(
        state = state.as_str(),
        run = %run_dir.display(),
        "Processed {} hook for {}/{}",
        event.event_name,
        event.owner,
        event.repo
    );

    Ok(HookReport {
        state,
        run_dir,
        exit_code,
        action_output,
    })
}
