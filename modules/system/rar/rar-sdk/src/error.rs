//! Error types for the RAR module.

use thiserror::Error;

/// Errors surfaced by the public RAR API.
///
/// Expected absences (no authorization details, unsupported types, catalog
/// outages) are not errors: they yield empty results. Only genuine faults
/// end up here.
#[derive(Debug, Error)]
pub enum RarError {
    /// A processor failed while validating authorization details.
    #[error("authorization details validation failed: {0}")]
    ValidationFailed(String),

    /// The token being introspected could not be loaded.
    #[error("token lookup failed: {0}")]
    TokenLookup(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure raised by an [`AuthorizationDetailsProcessor`](crate::AuthorizationDetailsProcessor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessorError {
    /// The candidate or a reference entry does not have the shape the
    /// processor's type requires.
    #[error("malformed authorization detail: {0}")]
    Malformed(String),

    /// An internal processor error occurred.
    #[error("processor failure: {0}")]
    Internal(String),
}

/// Errors returned by the API-resource catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached.
    #[error("api resource catalog unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors returned by the token provider.
#[derive(Debug, Error)]
pub enum TokenProviderError {
    /// The token is unknown, revoked or expired.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// An authorization detail could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid authorization detail: {0}")]
pub struct InvalidDetailError(pub String);
