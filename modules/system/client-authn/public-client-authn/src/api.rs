//! Client authenticator seam and the application lookups it depends on.

use async_trait::async_trait;
use request_context::RequestContext;

use crate::error::{AppLookupError, AppManagementError};
use crate::models::{ClientAuthnContext, ClientAuthnRequest, OAuthApp};

/// A pluggable OAuth2 client authentication scheme.
///
/// The host asks each authenticator, in priority order, whether it can
/// handle a request; the first that can is asked to authenticate it.
#[async_trait]
pub trait ClientAuthenticator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lower values run first.
    fn priority(&self) -> i32;

    /// Whether this authenticator applies to the request. May record the
    /// resolved client id in `authn_ctx`.
    async fn can_authenticate(
        &self,
        request: &ClientAuthnRequest,
        authn_ctx: &mut ClientAuthnContext,
        ctx: &RequestContext,
    ) -> bool;

    /// Authenticate a request this authenticator accepted.
    async fn authenticate_client(
        &self,
        request: &ClientAuthnRequest,
        authn_ctx: &mut ClientAuthnContext,
        ctx: &RequestContext,
    ) -> bool;

    /// The client id the request carries, resolved into `authn_ctx` if not
    /// already known.
    fn client_id(
        &self,
        request: &ClientAuthnRequest,
        authn_ctx: &mut ClientAuthnContext,
    ) -> Option<String>;
}

/// OAuth application records keyed by client id.
#[async_trait]
pub trait ApplicationRegistry: Send + Sync {
    /// # Errors
    ///
    /// - `InvalidClient` if no application has this client id
    /// - `Internal` for unexpected errors
    async fn app_by_client_id(
        &self,
        client_id: &str,
        tenant_domain: &str,
    ) -> Result<OAuthApp, AppLookupError>;
}

/// Application management lookups used to relate shared applications to
/// their main application.
#[async_trait]
pub trait ApplicationManagement: Send + Sync {
    /// Resource id of the application owning an inbound key.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no application owns the key
    /// - `Internal` for unexpected errors
    async fn resource_id_by_inbound_key(
        &self,
        inbound_key: &str,
        inbound_type: &str,
        tenant_domain: &str,
    ) -> Result<String, AppManagementError>;

    /// Id of the main application a shared application was shared from.
    ///
    /// # Errors
    ///
    /// `NotFound` if the application is not a shared one.
    async fn main_app_id(&self, shared_app_id: &str) -> Result<String, AppManagementError>;

    /// # Errors
    ///
    /// `NotFound` if the application is unknown.
    async fn tenant_id_by_app(&self, app_id: &str) -> Result<i32, AppManagementError>;

    /// OAuth data of an application by name, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// `Internal` if the lookup itself fails.
    async fn oauth_app_by_name(
        &self,
        app_name: &str,
        tenant_id: i32,
    ) -> Result<Option<OAuthApp>, AppManagementError>;
}
