//! Configuration for the RAR module.

use rar_sdk::REFRESH_TOKEN_TYPE;
use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RarConfig {
    /// Only accept types that the tenant registered in the API-resource
    /// catalog, in addition to having a processor.
    pub require_catalog_registration: bool,

    /// Introspection `token_type` value that selects the refresh-token lookup.
    pub refresh_token_type: String,

    /// Whether expired access tokens are still loaded during introspection.
    pub include_expired_access_tokens: bool,
}

impl Default for RarConfig {
    fn default() -> Self {
        Self {
            require_catalog_registration: true,
            refresh_token_type: REFRESH_TOKEN_TYPE.to_owned(),
            include_expired_access_tokens: false,
        }
    }
}
