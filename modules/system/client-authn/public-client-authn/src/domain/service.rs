//! Public client authenticator.

use std::sync::Arc;

use async_trait::async_trait;
use request_context::RequestContext;
use tracing::{debug, error, warn};

use crate::api::{ApplicationManagement, ApplicationRegistry, ClientAuthenticator};
use crate::config::PublicClientAuthnConfig;
use crate::error::{AppLookupError, AppManagementError};
use crate::models::{ClientAuthnContext, ClientAuthnRequest, OAUTH2_INBOUND_TYPE, OAuthApp, params};

/// Admits public clients whose application allows authentication without
/// a client secret.
///
/// Lookup failures never escape: an unknown client or a broken registry
/// simply means this authenticator does not apply.
pub struct PublicClientAuthenticator {
    allowed_grant_types: Vec<String>,
    apps: Arc<dyn ApplicationRegistry>,
    management: Arc<dyn ApplicationManagement>,
}

impl PublicClientAuthenticator {
    pub const NAME: &'static str = "PublicClientAuthenticator";
    pub const PRIORITY: i32 = 200;

    #[must_use]
    pub fn new(
        cfg: &PublicClientAuthnConfig,
        apps: Arc<dyn ApplicationRegistry>,
        management: Arc<dyn ApplicationManagement>,
    ) -> Self {
        Self {
            allowed_grant_types: cfg.allowed_grant_types.clone(),
            apps,
            management,
        }
    }

    fn grant_types_allowed(&self, request: &ClientAuthnRequest) -> bool {
        let rejected = request
            .body_params(params::GRANT_TYPE)
            .iter()
            .find(|grant_type| !self.allowed_grant_types.contains(grant_type));
        if let Some(grant_type) = rejected {
            debug!(
                grant_type = %grant_type,
                "Grant type is not allowed for public clients"
            );
            return false;
        }
        true
    }

    #[tracing::instrument(skip_all, fields(client_id = %client_id))]
    async fn can_bypass_client_credentials(
        &self,
        client_id: &str,
        request: &ClientAuthnRequest,
        ctx: &RequestContext,
    ) -> Result<bool, AppLookupError> {
        let tenant_domain = ctx.tenant_domain();
        // shared apps inherit the main app's flag, API-based flow only
        if request.is_api_based_flow() && ctx.is_organization_scoped() {
            return self.can_bypass_for_shared_app(client_id, tenant_domain).await;
        }
        let app = self.apps.app_by_client_id(client_id, tenant_domain).await?;
        Ok(app.bypass_client_credentials)
    }

    async fn can_bypass_for_shared_app(
        &self,
        client_id: &str,
        tenant_domain: &str,
    ) -> Result<bool, AppLookupError> {
        let shared_app = self.apps.app_by_client_id(client_id, tenant_domain).await?;

        match self.main_app(client_id, tenant_domain, &shared_app).await {
            Ok(Some(main_app)) if main_app.bypass_client_credentials => return Ok(true),
            Ok(_) => {}
            Err(e) => {
                error!(
                    client_id,
                    error = %e,
                    "Failed to resolve the main application of a shared application"
                );
            }
        }
        Ok(shared_app.bypass_client_credentials)
    }

    async fn main_app(
        &self,
        client_id: &str,
        tenant_domain: &str,
        shared_app: &OAuthApp,
    ) -> Result<Option<OAuthApp>, AppManagementError> {
        let shared_app_id = self
            .management
            .resource_id_by_inbound_key(client_id, OAUTH2_INBOUND_TYPE, tenant_domain)
            .await?;
        let main_app_id = self.management.main_app_id(&shared_app_id).await?;
        let main_tenant_id = self.management.tenant_id_by_app(&main_app_id).await?;
        self.management
            .oauth_app_by_name(&shared_app.application_name, main_tenant_id)
            .await
    }
}

#[async_trait]
impl ClientAuthenticator for PublicClientAuthenticator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    async fn can_authenticate(
        &self,
        request: &ClientAuthnRequest,
        authn_ctx: &mut ClientAuthnContext,
        ctx: &RequestContext,
    ) -> bool {
        if self.allowed_grant_types.is_empty() {
            warn!("No grant types are allowed for public clients");
            return false;
        }
        if !self.grant_types_allowed(request) {
            return false;
        }

        let client_id = self.client_id(request, authn_ctx);
        if request.client_id_param().is_none() {
            debug!("Client id is not present in the request parameters");
            return false;
        }
        let Some(client_id) = client_id.filter(|id| !id.trim().is_empty()) else {
            debug!("Client id is not present in the request");
            return false;
        };

        match self
            .can_bypass_client_credentials(&client_id, request, ctx)
            .await
        {
            Ok(true) => {
                authn_ctx.set_client_id(Some(client_id));
                true
            }
            Ok(false) => {
                debug!(
                    client_id = %client_id,
                    "Application does not allow authentication without a client secret"
                );
                false
            }
            Err(AppLookupError::InvalidClient(reason)) => {
                debug!(client_id = %client_id, reason = %reason, "Unknown client");
                false
            }
            Err(e) => {
                error!(client_id = %client_id, error = %e, "Failed to look up application");
                false
            }
        }
    }

    async fn authenticate_client(
        &self,
        _request: &ClientAuthnRequest,
        _authn_ctx: &mut ClientAuthnContext,
        _ctx: &RequestContext,
    ) -> bool {
        true
    }

    fn client_id(
        &self,
        request: &ClientAuthnRequest,
        authn_ctx: &mut ClientAuthnContext,
    ) -> Option<String> {
        if authn_ctx.is_client_id_blank() {
            authn_ctx.set_client_id(request.client_id_param().map(str::to_owned));
        }
        authn_ctx.client_id().map(str::to_owned)
    }
}
