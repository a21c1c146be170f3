//! Preset synchronization — wire ingestion, field coercion, the resource
//! client, and the session store.

pub mod api;
pub mod fields;
pub mod ingest;
pub mod store;

use thiserror::Error;

/// Errors surfaced by preset operations.
#[derive(Debug, Error)]
pub enum PresetError {
    /// Network failure, timeout, or a failed read of the preset resource.
    /// Never fatal; prior session state is left intact.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Locally detected problem. No network call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend rejected a create, update, or delete.
    #[error("{0}")]
    Backend(String),

    /// Another network-bound operation is still outstanding.
    #[error("Another operation is in progress")]
    Busy,
}
