//! Centralized error handling module
//!
//! Typed errors for the relay. Actions report failures with `anyhow::Error`,
//! which converts into `AppError::Other` when it needs to travel further.

pub mod types;

pub use types::{AppError, AppResult};

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other {
            message: format!("{err:#}"),
            source: None,
        }
    }
}
