//! Configuration-backed implementations of the collaborator traits.

use std::collections::HashMap;

use async_trait::async_trait;
use public_client_authn::{
    AppLookupError, AppManagementError, ApplicationManagement, ApplicationRegistry, OAuthApp,
};
use rar_sdk::{
    AccessToken, ApiResourceCatalog, AuthorizationDetailsType, CatalogError, TokenProvider,
    TokenProviderError,
};

use crate::config::ToolConfig;

/// Catalog listing the types configured for each tenant. The filter is
/// ignored: every configured type is listed.
pub struct ConfiguredCatalog {
    tenants: HashMap<String, Vec<AuthorizationDetailsType>>,
}

impl ConfiguredCatalog {
    #[must_use]
    pub fn from_config(cfg: &ToolConfig) -> Self {
        Self {
            tenants: cfg.catalog.clone(),
        }
    }
}

#[async_trait]
impl ApiResourceCatalog for ConfiguredCatalog {
    async fn list_authorization_details_types(
        &self,
        _filter: &str,
        tenant_domain: &str,
    ) -> Result<Vec<AuthorizationDetailsType>, CatalogError> {
        Ok(self.tenants.get(tenant_domain).cloned().unwrap_or_default())
    }
}

/// Token store holding configured tokens. Expiry is not tracked, so both
/// lookups return the same record.
pub struct ConfiguredTokens {
    tokens: HashMap<String, AccessToken>,
}

impl ConfiguredTokens {
    #[must_use]
    pub fn from_config(cfg: &ToolConfig) -> Self {
        Self {
            tokens: cfg.tokens.clone(),
        }
    }

    fn find(&self, token_identifier: &str) -> Result<AccessToken, TokenProviderError> {
        self.tokens
            .get(token_identifier)
            .cloned()
            .ok_or_else(|| TokenProviderError::InvalidToken("token is not configured".to_owned()))
    }
}

#[async_trait]
impl TokenProvider for ConfiguredTokens {
    async fn get_verified_access_token(
        &self,
        token_identifier: &str,
        _include_expired: bool,
    ) -> Result<AccessToken, TokenProviderError> {
        self.find(token_identifier)
    }

    async fn get_verified_refresh_token(
        &self,
        token_identifier: &str,
    ) -> Result<AccessToken, TokenProviderError> {
        self.find(token_identifier)
    }
}

/// Application registry over the configured applications. There are no
/// shared applications, so every management lookup misses.
pub struct ConfiguredApplications {
    apps: HashMap<String, OAuthApp>,
}

impl ConfiguredApplications {
    #[must_use]
    pub fn from_config(cfg: &ToolConfig) -> Self {
        Self {
            apps: cfg
                .applications
                .iter()
                .map(|app| (app.client_id.clone(), app.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl ApplicationRegistry for ConfiguredApplications {
    async fn app_by_client_id(
        &self,
        client_id: &str,
        _tenant_domain: &str,
    ) -> Result<OAuthApp, AppLookupError> {
        self.apps
            .get(client_id)
            .cloned()
            .ok_or_else(|| AppLookupError::InvalidClient(client_id.to_owned()))
    }
}

#[async_trait]
impl ApplicationManagement for ConfiguredApplications {
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
