//! Result type alias shared across the workspace.
//!
//! Functions default their error type to `MqError` and can simply return
//! `Result<T>`.
use crate::error::MqError;

/// Workspace-wide `Result` alias with `MqError` as the default error.
pub type Result<T, E = MqError> = std::result::Result<T, E>;
