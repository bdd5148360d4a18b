#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Processors submitted at link time are registered when the module starts.

use std::sync::Arc;

use async_trait::async_trait;
use rar::{ProcessorRegistry, RarConfig, RarModule};
use rar_sdk::{
    AccessToken, ApiResourceCatalog, AuthorizationDetail, AuthorizationDetails,
    AuthorizationDetailsProcessor, AuthorizationDetailsType, CatalogError, ProcessorError,
    ProcessorRegistration, TokenProvider, TokenProviderError,
};

struct AccountInformationProcessor;

impl AuthorizationDetailsProcessor for AccountInformationProcessor {
    fn detail_type(&self) -> &'static str {
        "account_information"
    }

    fn is_equal_or_subset(
        &self,
        candidate: &AuthorizationDetail,
        reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError> {
        Ok(reference.contains(candidate))
    }
}

struct UntypedProcessor;

impl AuthorizationDetailsProcessor for UntypedProcessor {
    fn detail_type(&self) -> &'static str {
        ""
    }

    fn is_equal_or_subset(
        &self,
        _candidate: &AuthorizationDetail,
        _reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError> {
        Ok(true)
    }
}

fn account_information() -> Arc<dyn AuthorizationDetailsProcessor> {
    Arc::new(AccountInformationProcessor)
}

fn untyped() -> Arc<dyn AuthorizationDetailsProcessor> {
    Arc::new(UntypedProcessor)
}

inventory::submit! { ProcessorRegistration::new(account_information) }
inventory::submit! { ProcessorRegistration::new(untyped) }

struct EmptyCatalog;

#[async_trait]
impl ApiResourceCatalog for EmptyCatalog {
    async fn list_authorization_details_types(
        &self,
        _filter: &str,
        _tenant_domain: &str,
    ) -> Result<Vec<AuthorizationDetailsType>, CatalogError> {
        Ok(Vec::new())
    }
}

struct NoTokens;

#[async_trait]
impl TokenProvider for NoTokens {
    async fn get_verified_access_token(
        &self,
        token_identifier: &str,
        _include_expired: bool,
    ) -> Result<AccessToken, TokenProviderError> {
        Err(TokenProviderError::InvalidToken(token_identifier.to_owned()))
    }

    async fn get_verified_refresh_token(
        &self,
        token_identifier: &str,
    ) -> Result<AccessToken, TokenProviderError> {
        Err(TokenProviderError::InvalidToken(token_identifier.to_owned()))
    }
}

#[test]
fn init_registers_discovered_processors() {
    let registry = Arc::new(ProcessorRegistry::new());

    let module = RarModule::init_with_registry(
        &RarConfig::default(),
        Arc::clone(&registry),
        Arc::new(EmptyCatalog),
        Arc::new(NoTokens),
    )
    .expect("module init");

    assert_eq!(registry.registered_types(), vec!["account_information"]);
    assert!(Arc::ptr_eq(module.registry(), &registry));
}

#[test]
fn init_uses_the_process_wide_registry() {
    let module = RarModule::init(
        &RarConfig::default(),
        Arc::new(EmptyCatalog),
        Arc::new(NoTokens),
    )
    .expect("module init");

    assert!(Arc::ptr_eq(module.registry(), &ProcessorRegistry::global()));
    assert!(
        ProcessorRegistry::global()
            .lookup("account_information")
            .is_some()
    );
}

#[test]
fn blank_refresh_token_type_is_rejected() {
    let cfg = RarConfig {
        refresh_token_type: "  ".to_owned(),
        ..RarConfig::default()
    };

    let result = RarModule::init_with_registry(
        &cfg,
        Arc::new(ProcessorRegistry::new()),
        Arc::new(EmptyCatalog),
        Arc::new(NoTokens),
    );

    assert!(result.is_err());
}
