//! Token validation and introspection models.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::models::AuthorizationDetails;

/// Introspection `token_type` value identifying a refresh token.
pub const REFRESH_TOKEN_TYPE: &str = "refresh_token";

/// Token presented for validation.
#[derive(Debug, Clone)]
pub struct TokenHandle {
    /// Raw token value. Wrapped so that `Debug` redacts it.
    pub identifier: SecretString,
    /// Token type hint supplied by the caller, if any.
    pub token_type: Option<String>,
}

/// Request received by the introspection endpoint.
#[derive(Debug, Clone)]
pub struct TokenValidationRequest {
    pub access_token: TokenHandle,
    /// Authorization details the resource server wants confirmed.
    /// Empty means "report everything the token was granted".
    pub requested_authorization_details: AuthorizationDetails,
}

impl TokenValidationRequest {
    #[must_use]
    pub fn for_token(identifier: &str) -> Self {
        Self {
            access_token: TokenHandle {
                identifier: SecretString::from(identifier.to_owned()),
                token_type: None,
            },
            requested_authorization_details: AuthorizationDetails::new(),
        }
    }

    #[must_use]
    pub fn with_requested_authorization_details(mut self, details: AuthorizationDetails) -> Self {
        self.requested_authorization_details = details;
        self
    }
}

/// Introspection response as produced by the host's token validator.
#[derive(Debug, Clone, Default)]
pub struct IntrospectionResponse {
    pub active: bool,
    pub error: Option<String>,
    /// Space-delimited scope string.
    pub scope: Option<String>,
    /// Expiry, in seconds since the epoch.
    pub exp: Option<i64>,
    pub token_type: Option<String>,
    /// Validation context the host already built while validating the token.
    pub validation_context: Option<TokenValidationContext>,
}

/// Token validation view derived from an [`IntrospectionResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidationResponse {
    pub valid: bool,
    pub error_msg: Option<String>,
    pub scope: Vec<String>,
    pub expiry_time: Option<i64>,
}

impl From<&IntrospectionResponse> for TokenValidationResponse {
    fn from(response: &IntrospectionResponse) -> Self {
        Self {
            valid: response.active,
            error_msg: response.error.clone(),
            scope: response
                .scope
                .as_deref()
                .map(|s| s.split_whitespace().map(str::to_owned).collect())
                .unwrap_or_default(),
            expiry_time: response.exp,
        }
    }
}

/// A verified access or refresh token, as loaded by the token provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token_id: String,
    pub tenant_id: i32,
    pub consumer_key: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Authorization details the user consented to when the token was issued.
    #[serde(default)]
    pub authorization_details: AuthorizationDetails,
}

/// Everything known about a token while it is being validated.
#[derive(Debug, Clone)]
pub struct TokenValidationContext {
    pub request: TokenValidationRequest,
    pub response: TokenValidationResponse,
    pub access_token: Option<AccessToken>,
}

impl TokenValidationContext {
    #[must_use]
    pub fn new(request: TokenValidationRequest, response: TokenValidationResponse) -> Self {
        Self {
            request,
            response,
            access_token: None,
        }
    }

    #[must_use]
    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Authorization details granted to the token; empty when no token is attached.
    #[must_use]
    pub fn granted_authorization_details(&self) -> AuthorizationDetails {
        self.access_token
            .as_ref()
            .map(|t| t.authorization_details.clone())
            .unwrap_or_default()
    }
}
