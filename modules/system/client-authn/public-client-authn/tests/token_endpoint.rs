#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Public client authentication as seen from a token endpoint that walks
//! its authenticators in priority order.

use std::sync::Arc;

use async_trait::async_trait;
use public_client_authn::models::params;
use public_client_authn::{
    AppLookupError, AppManagementError, ApplicationManagement, ApplicationRegistry,
    ClientAuthenticator, ClientAuthnContext, ClientAuthnRequest, OAuthApp,
    PublicClientAuthnConfig, PublicClientAuthnModule,
};
use request_context::RequestContext;

const DEVICE_CODE: &str = "urn:ietf:params:oauth:grant-type:device_code";

struct Apps;

#[async_trait]
impl ApplicationRegistry for Apps {
    async fn app_by_client_id(
        &self,
        client_id: &str,
        _tenant_domain: &str,
    ) -> Result<OAuthApp, AppLookupError> {
        match client_id {
            "tv-app" => Ok(OAuthApp {
                application_name: "TV".to_owned(),
                client_id: client_id.to_owned(),
                bypass_client_credentials: true,
            }),
            _ => Err(AppLookupError::InvalidClient(client_id.to_owned())),
        }
    }
}

struct NoSharing;

#[async_trait]
impl ApplicationManagement for NoSharing {
    async fn resource_id_by_inbound_key(
        &self,
        inbound_key: &str,
        _inbound_type: &str,
        _tenant_domain: &str,
    ) -> Result<String, AppManagementError> {
        Err(AppManagementError::NotFound(inbound_key.to_owned()))
    }

    async fn main_app_id(&self, shared_app_id: &str) -> Result<String, AppManagementError> {
        Err(AppManagementError::NotFound(shared_app_id.to_owned()))
    }

    async fn tenant_id_by_app(&self, app_id: &str) -> Result<i32, AppManagementError> {
        Err(AppManagementError::NotFound(app_id.to_owned()))
    }

    async fn oauth_app_by_name(
        &self,
        _app_name: &str,
        _tenant_id: i32,
    ) -> Result<Option<OAuthApp>, AppManagementError> {
        Ok(None)
    }
}

/// First authenticator that can handle the request, if any.
async fn select<'a>(
    chain: &'a [Arc<dyn ClientAuthenticator>],
    request: &ClientAuthnRequest,
    authn_ctx: &mut ClientAuthnContext,
) -> Option<&'a Arc<dyn ClientAuthenticator>> {
    let ctx = RequestContext::default_tenant();
    for authenticator in chain {
        if authenticator.can_authenticate(request, authn_ctx, &ctx).await {
            return Some(authenticator);
        }
    }
    None
}

fn chain(allowed: &[&str]) -> Vec<Arc<dyn ClientAuthenticator>> {
    let cfg: PublicClientAuthnConfig =
        serde_json::from_value(serde_json::json!({ "allowed_grant_types": allowed })).unwrap();
    let mut chain = vec![PublicClientAuthnModule::init(
        &cfg,
        Arc::new(Apps),
        Arc::new(NoSharing),
    )];
    chain.sort_by_key(|a| a.priority());
    chain
}

#[tokio::test]
async fn device_flow_client_is_admitted() {
    let chain = chain(&[DEVICE_CODE]);
    let request = ClientAuthnRequest::new()
        .with_body_param(params::GRANT_TYPE, DEVICE_CODE)
        .with_body_param(params::CLIENT_ID, "tv-app");
    let mut authn_ctx = ClientAuthnContext::new();

    let selected = select(&chain, &request, &mut authn_ctx).await.unwrap();

    assert_eq!(selected.name(), "PublicClientAuthenticator");
    assert_eq!(authn_ctx.client_id(), Some("tv-app"));
}

#[tokio::test]
async fn grant_type_outside_allow_list_is_not_handled() {
    let chain = chain(&[DEVICE_CODE]);
    let request = ClientAuthnRequest::new()
        .with_body_param(params::GRANT_TYPE, "authorization_code")
        .with_body_param(params::CLIENT_ID, "tv-app");

    assert!(
        select(&chain, &request, &mut ClientAuthnContext::new())
            .await
            .is_none()
    );
}

#[tokio::test]
async fn empty_allow_list_handles_nothing() {
    let chain = chain(&[]);
    let request = ClientAuthnRequest::new()
        .with_body_param(params::GRANT_TYPE, DEVICE_CODE)
        .with_body_param(params::CLIENT_ID, "tv-app");

    assert!(
        select(&chain, &request, &mut ClientAuthnContext::new())
            .await
            .is_none()
    );
}

#[test]
fn unknown_config_fields_are_rejected() {
    let result: Result<PublicClientAuthnConfig, _> =
        serde_json::from_value(serde_json::json!({ "allowed_grants": [] }));
    assert!(result.is_err());
}
