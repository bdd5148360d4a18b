//! Configuration for the public client authenticator.

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublicClientAuthnConfig {
    /// Grant types public clients may use. Empty admits no public client.
    pub allowed_grant_types: Vec<String>,
}
