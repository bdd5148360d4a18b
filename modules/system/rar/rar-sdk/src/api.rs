//! Public API and collaborator traits for the RAR module.

use async_trait::async_trait;
use request_context::RequestContext;
use serde_json::{Map, Value};

use crate::error::{CatalogError, RarError, TokenProviderError};
use crate::models::AuthorizationDetailsType;
use crate::token::{AccessToken, IntrospectionResponse, TokenValidationRequest};

/// Public API trait consumed by the token introspection endpoint.
///
/// ```ignore
/// let extras = provider.introspection_data(&ctx, &request, &response).await?;
/// // `extras` is empty, or holds exactly `authorization_details`.
/// ```
#[async_trait]
pub trait IntrospectionDataProvider: Send + Sync {
    /// Additional members to merge into the introspection response.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if authorization details could not be validated
    /// - `TokenLookup` if the introspected token could not be loaded
    /// - `Internal` for unexpected errors
    async fn introspection_data(
        &self,
        ctx: &RequestContext,
        request: &TokenValidationRequest,
        response: &IntrospectionResponse,
    ) -> Result<Map<String, Value>, RarError>;
}

/// Per-tenant catalog of registered API resources and the authorization
/// details types they declare.
#[async_trait]
pub trait ApiResourceCatalog: Send + Sync {
    /// List the authorization details types registered for a tenant.
    ///
    /// `filter` uses the catalog's filter syntax; an empty filter lists all types.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the catalog cannot be queried.
    async fn list_authorization_details_types(
        &self,
        filter: &str,
        tenant_domain: &str,
    ) -> Result<Vec<AuthorizationDetailsType>, CatalogError>;
}

/// Loads verified tokens from the token store.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Load and verify an access token.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the token is unknown, revoked or (unless
    ///   `include_expired`) expired
    /// - `Internal` for unexpected errors
    async fn get_verified_access_token(
        &self,
        token_identifier: &str,
        include_expired: bool,
    ) -> Result<AccessToken, TokenProviderError>;

    /// Load and verify a refresh token.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the token is unknown, revoked or expired
    /// - `Internal` for unexpected errors
    async fn get_verified_refresh_token(
        &self,
        token_identifier: &str,
    ) -> Result<AccessToken, TokenProviderError>;
}
