//! RAR module wiring.

use std::sync::Arc;

use rar_sdk::{ApiResourceCatalog, IntrospectionDataProvider, TokenProvider};
use tracing::info;

use crate::config::RarConfig;
use crate::domain::{
    AuthorizationDetailsValidator, IntrospectionEnricher, ProcessorRegistry, register_discovered,
};

/// The RAR module.
///
/// Owns the validator and introspection provider built around a processor
/// registry. Processors submitted at link time are registered during
/// [`RarModule::init`]; config-driven plugins register into
/// [`RarModule::registry`] afterwards.
pub struct RarModule {
    registry: Arc<ProcessorRegistry>,
    validator: Arc<AuthorizationDetailsValidator>,
    introspection: Arc<IntrospectionEnricher>,
}

impl RarModule {
    pub const MODULE_NAME: &'static str = "rar";

    /// Wire the module around the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn init(
        cfg: &RarConfig,
        catalog: Arc<dyn ApiResourceCatalog>,
        tokens: Arc<dyn TokenProvider>,
    ) -> anyhow::Result<Self> {
        Self::init_with_registry(cfg, ProcessorRegistry::global(), catalog, tokens)
    }

    /// Wire the module around an explicit registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    #[tracing::instrument(skip_all, fields(module = Self::MODULE_NAME))]
    pub fn init_with_registry(
        cfg: &RarConfig,
        registry: Arc<ProcessorRegistry>,
        catalog: Arc<dyn ApiResourceCatalog>,
        tokens: Arc<dyn TokenProvider>,
    ) -> anyhow::Result<Self> {
        if cfg.refresh_token_type.trim().is_empty() {
            anyhow::bail!("refresh_token_type must not be blank");
        }
        info!(
            require_catalog_registration = cfg.require_catalog_registration,
            include_expired_access_tokens = cfg.include_expired_access_tokens,
            "Initializing rar module"
        );

        let discovered = register_discovered(registry.as_ref());
        info!(
            discovered,
            registered = registry.len(),
            types = ?registry.registered_types(),
            "Authorization details processors registered"
        );

        let validator = Arc::new(AuthorizationDetailsValidator::new(
            Arc::clone(&registry),
            catalog,
            cfg,
        ));
        let introspection = Arc::new(IntrospectionEnricher::new(
            Arc::clone(&validator),
            tokens,
            cfg,
        ));

        Ok(Self {
            registry,
            validator,
            introspection,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ProcessorRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn validator(&self) -> Arc<AuthorizationDetailsValidator> {
        Arc::clone(&self.validator)
    }

    /// The provider to hand to the token introspection endpoint.
    #[must_use]
    pub fn introspection_provider(&self) -> Arc<dyn IntrospectionDataProvider> {
        self.introspection.clone()
    }
}
