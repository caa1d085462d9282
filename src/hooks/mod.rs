//! Hook processing
//!
//! A hook is described by a [`HookEvent`], worked on by an injected
//! [`HookAction`], and driven through its lifecycle by [`on_hook`].

pub mod action;
pub mod orchestrator;
pub mod types;

pub use action::HookAction;
pub use orchestrator::on_hook;
pub use types::{ActionOutcome, ExecuteResult, HookEvent, HookReport, HookState};
