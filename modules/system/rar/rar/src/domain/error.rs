//! Domain errors for the RAR module.

use rar_sdk::{RarError, TokenProviderError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("processor '{processor}' failed on type '{detail_type}': {reason}")]
    ProcessorFailed {
        detail_type: String,
        processor: &'static str,
        reason: String,
    },

    #[error("token lookup failed: {0}")]
    TokenLookup(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TokenProviderError> for DomainError {
    fn from(e: TokenProviderError) -> Self {
        Self::TokenLookup(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<DomainError> for RarError {
    fn from(e: DomainError) -> Self {
        match e {
            e @ DomainError::ProcessorFailed { .. } => Self::ValidationFailed(e.to_string()),
            DomainError::TokenLookup(reason) => Self::TokenLookup(reason),
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
