//! Hand-written collaborators shared by the domain tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rar_sdk::{
    AccessToken, ApiResourceCatalog, AuthorizationDetail, AuthorizationDetails,
    AuthorizationDetailsProcessor, AuthorizationDetailsType, CatalogError, ProcessorError,
    TokenProvider, TokenProviderError,
};

/// Covers a candidate when the reference is non-empty and every reference
/// entry has the candidate's type.
pub struct TypeMatchProcessor {
    detail_type: String,
    pub calls: AtomicUsize,
}

impl TypeMatchProcessor {
    pub fn new(detail_type: &str) -> Self {
        Self {
            detail_type: detail_type.to_owned(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl AuthorizationDetailsProcessor for TypeMatchProcessor {
    fn detail_type(&self) -> &str {
        &self.detail_type
    }

    fn is_equal_or_subset(
        &self,
        candidate: &AuthorizationDetail,
        reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(!reference.is_empty()
            && reference
                .iter()
                .all(|r| r.detail_type() == candidate.detail_type()))
    }
}

/// Covers a candidate only when the reference holds an identical entry.
pub struct ExactMatchProcessor(pub &'static str);

impl AuthorizationDetailsProcessor for ExactMatchProcessor {
    fn detail_type(&self) -> &str {
        self.0
    }

    fn is_equal_or_subset(
        &self,
        candidate: &AuthorizationDetail,
        reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError> {
        Ok(reference.contains(candidate))
    }
}

/// Always fails.
pub struct FailingProcessor(pub &'static str);

impl AuthorizationDetailsProcessor for FailingProcessor {
    fn detail_type(&self) -> &str {
        self.0
    }

    fn is_equal_or_subset(
        &self,
        _candidate: &AuthorizationDetail,
        _reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError> {
        Err(ProcessorError::Malformed("amount must be a number".to_owned()))
    }

    fn name(&self) -> &'static str {
        "FailingProcessor"
    }
}

/// Catalog with a fixed list of types per tenant.
#[derive(Default)]
pub struct StaticCatalog {
    tenants: HashMap<String, Vec<AuthorizationDetailsType>>,
    unavailable: bool,
    pub calls: AtomicUsize,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_tenant(mut self, tenant_domain: &str, types: &[&str]) -> Self {
        self.tenants.insert(
            tenant_domain.to_owned(),
            types
                .iter()
                .map(|t| AuthorizationDetailsType::new(t))
                .collect(),
        );
        self
    }
}

#[async_trait]
impl ApiResourceCatalog for StaticCatalog {
    async fn list_authorization_details_types(
        &self,
        _filter: &str,
        tenant_domain: &str,
    ) -> Result<Vec<AuthorizationDetailsType>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(CatalogError::Unavailable("connection refused".to_owned()));
        }
        Ok(self.tenants.get(tenant_domain).cloned().unwrap_or_default())
    }
}

/// Token store keyed by identifier that records which lookup was used.
#[derive(Default)]
pub struct MockTokenProvider {
    tokens: HashMap<String, AccessToken>,
    pub access_lookups: Mutex<Vec<(String, bool)>>,
    pub refresh_lookups: Mutex<Vec<String>>,
}

impl MockTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, identifier: &str, granted: AuthorizationDetails) -> Self {
        self.tokens.insert(
            identifier.to_owned(),
            AccessToken {
                token_id: format!("id-{identifier}"),
                consumer_key: "client-1".to_owned(),
                authorization_details: granted,
                ..AccessToken::default()
            },
        );
        self
    }

    fn find(&self, identifier: &str) -> Result<AccessToken, TokenProviderError> {
        self.tokens
            .get(identifier)
            .cloned()
            .ok_or_else(|| TokenProviderError::InvalidToken(format!("unknown token {identifier}")))
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn get_verified_access_token(
        &self,
        token_identifier: &str,
        include_expired: bool,
    ) -> Result<AccessToken, TokenProviderError> {
        self.access_lookups
            .lock()
            .unwrap()
            .push((token_identifier.to_owned(), include_expired));
        self.find(token_identifier)
    }

    async fn get_verified_refresh_token(
        &self,
        token_identifier: &str,
    ) -> Result<AccessToken, TokenProviderError> {
        self.refresh_lookups
            .lock()
            .unwrap()
            .push(token_identifier.to_owned());
        self.find(token_identifier)
    }
}

pub fn detail(detail_type: &str) -> AuthorizationDetail {
    AuthorizationDetail::new(detail_type).unwrap()
}

pub fn payment(amount: i64) -> AuthorizationDetail {
    detail("payment_initiation").with_field("amount", amount)
}
