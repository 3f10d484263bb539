//! Error Types
//!
//! Failures surfaced by the fetch layer, the list reconciler and config loading.

use thiserror::Error;

use crate::list::ItemId;

/// Outbound request failure.
///
/// Collapsed into `FetchStatus::Error` at the store boundary; the detail is
/// only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request rejected or network unreachable
    #[error("network error: {0}")]
    Network(String),
    /// Body was not JSON or did not match the expected shape
    #[error("parse error: {0}")]
    Parse(String),
}

/// List edit failure, returned synchronously to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("no item with id {0}")]
    NotFound(ItemId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config block: {0}")]
    Parse(#[from] serde_json::Error),
}
