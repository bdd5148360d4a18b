//! Request and application models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod params {
    pub const GRANT_TYPE: &str = "grant_type";
    pub const CLIENT_ID: &str = "client_id";
    pub const RESPONSE_MODE: &str = "response_mode";
}

/// `response_mode` value that marks the API-based authentication flow.
pub const RESPONSE_MODE_DIRECT: &str = "direct";

/// Inbound authentication type of OAuth2 client ids.
pub const OAUTH2_INBOUND_TYPE: &str = "oauth2";

/// The parts of a token or authorize request the authenticator looks at.
#[derive(Debug, Clone, Default)]
pub struct ClientAuthnRequest {
    body: HashMap<String, Vec<String>>,
    query: HashMap<String, String>,
}

impl ClientAuthnRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a form body value; repeated names keep every value.
    #[must_use]
    pub fn with_body_param(mut self, name: &str, value: &str) -> Self {
        self.body
            .entry(name.to_owned())
            .or_default()
            .push(value.to_owned());
        self
    }

    #[must_use]
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_owned(), value.to_owned());
        self
    }

    /// All body values for `name`.
    #[must_use]
    pub fn body_params(&self, name: &str) -> &[String] {
        self.body.get(name).map_or(&[], Vec::as_slice)
    }

    /// First body value for `name`.
    #[must_use]
    pub fn body_param(&self, name: &str) -> Option<&str> {
        self.body_params(name).first().map(String::as_str)
    }

    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Request parameter lookup: query string first, then form body.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.query_param(name).or_else(|| self.body_param(name))
    }

    /// Whether the request belongs to the API-based authentication flow.
    #[must_use]
    pub fn is_api_based_flow(&self) -> bool {
        self.parameter(params::RESPONSE_MODE) == Some(RESPONSE_MODE_DIRECT)
    }

    /// The client id named by the request: the body value, or in the
    /// API-based flow the query value when the body has none. Blank values
    /// count as absent.
    #[must_use]
    pub fn client_id_param(&self) -> Option<&str> {
        let from_body = self
            .body_param(params::CLIENT_ID)
            .filter(|id| !id.trim().is_empty());
        if from_body.is_none() && self.is_api_based_flow() {
            return self
                .query_param(params::CLIENT_ID)
                .filter(|id| !id.trim().is_empty());
        }
        from_body
    }
}

/// Per-request client authentication state shared between authenticators.
#[derive(Debug, Clone, Default)]
pub struct ClientAuthnContext {
    client_id: Option<String>,
}

impl ClientAuthnContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn set_client_id(&mut self, client_id: Option<String>) {
        self.client_id = client_id;
    }

    /// Whether no non-blank client id has been resolved yet.
    #[must_use]
    pub fn is_client_id_blank(&self) -> bool {
        self.client_id.as_deref().is_none_or(|id| id.trim().is_empty())
    }
}

/// An OAuth application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthApp {
    pub application_name: String,
    pub client_id: String,
    /// Whether the application may authenticate without a client secret.
    #[serde(default)]
    pub bypass_client_credentials: bool,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn client_id_prefers_body() {
        let request = ClientAuthnRequest::new()
            .with_body_param(params::CLIENT_ID, "body-client")
            .with_query_param(params::CLIENT_ID, "query-client")
            .with_query_param(params::RESPONSE_MODE, RESPONSE_MODE_DIRECT);

        assert_eq!(request.client_id_param(), Some("body-client"));
    }

    #[test]
    fn query_client_id_only_in_api_based_flow() {
        let plain = ClientAuthnRequest::new().with_query_param(params::CLIENT_ID, "query-client");
        assert_eq!(plain.client_id_param(), None);

        let direct = plain
            .clone()
            .with_query_param(params::RESPONSE_MODE, RESPONSE_MODE_DIRECT);
        assert_eq!(direct.client_id_param(), Some("query-client"));
    }

    #[test]
    fn blank_body_client_id_falls_back_in_api_based_flow() {
        let request = ClientAuthnRequest::new()
            .with_body_param(params::CLIENT_ID, " ")
            .with_body_param(params::RESPONSE_MODE, RESPONSE_MODE_DIRECT)
            .with_query_param(params::CLIENT_ID, "query-client");

        assert!(request.is_api_based_flow());
        assert_eq!(request.client_id_param(), Some("query-client"));
    }

    #[test]
    fn repeated_body_params_keep_all_values() {
        let request = ClientAuthnRequest::new()
            .with_body_param(params::GRANT_TYPE, "password")
            .with_body_param(params::GRANT_TYPE, "refresh_token");

        assert_eq!(request.body_params(params::GRANT_TYPE).len(), 2);
        assert_eq!(request.body_param(params::GRANT_TYPE), Some("password"));
        assert!(request.body_params("scope").is_empty());
    }

    #[test]
    fn blank_context_client_id() {
        let mut ctx = ClientAuthnContext::new();
        assert!(ctx.is_client_id_blank());
        ctx.set_client_id(Some("  ".to_owned()));
        assert!(ctx.is_client_id_blank());
        ctx.set_client_id(Some("c1".to_owned()));
        assert!(!ctx.is_client_id_blank());
    }
}
