//! Error types for application lookups.

use thiserror::Error;

/// Errors returned by an [`ApplicationRegistry`](crate::ApplicationRegistry).
#[derive(Debug, Error)]
pub enum AppLookupError {
    /// No application is registered for the client id.
    #[error("invalid client: {0}")]
    InvalidClient(String),

    /// An internal error occurred.
    #[error("application lookup failed: {0}")]
    Internal(String),
}

/// Errors returned by [`ApplicationManagement`](crate::ApplicationManagement).
#[derive(Debug, Error)]
pub enum AppManagementError {
    #[error("application not found: {0}")]
    NotFound(String),

    #[error("application management failure: {0}")]
    Internal(String),
}
