//! Process-wide registry of authorization details processors.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use rar_sdk::{ApiResourceCatalog, AuthorizationDetailsProcessor, ProcessorRegistrar};
use request_context::RequestContext;
use tracing::debug;

static GLOBAL_REGISTRY: OnceLock<Arc<ProcessorRegistry>> = OnceLock::new();

/// Maps each authorization details type to the processor that handles it.
///
/// Safe to register into and look up from concurrently. At most one
/// processor is held per type; a later registration for the same type
/// replaces the earlier one.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: DashMap<String, Arc<dyn AuthorizationDetailsProcessor>>,
}

impl ProcessorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first access.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL_REGISTRY.get_or_init(|| Arc::new(Self::new())))
    }

    /// A standalone registry pre-seeded with `processors`.
    pub fn with_processors(
        processors: impl IntoIterator<Item = Arc<dyn AuthorizationDetailsProcessor>>,
    ) -> Self {
        let registry = Self::new();
        for processor in processors {
            registry.register(processor);
        }
        registry
    }

    /// Register a processor under its type.
    ///
    /// A processor whose type is blank is ignored and `false` is returned.
    pub fn register(&self, processor: Arc<dyn AuthorizationDetailsProcessor>) -> bool {
        let detail_type = processor.detail_type().to_owned();
        if detail_type.trim().is_empty() {
            debug!(
                processor = processor.name(),
                "Ignoring authorization details processor with a blank type"
            );
            return false;
        }

        debug!(
            detail_type = %detail_type,
            processor = processor.name(),
            "Registering authorization details processor"
        );
        if let Some(previous) = self.processors.insert(detail_type.clone(), processor) {
            debug!(
                detail_type = %detail_type,
                replaced = previous.name(),
                "Replaced authorization details processor"
            );
        }
        true
    }

    /// The processor registered for `detail_type`. Matching is exact and
    /// case-sensitive.
    #[must_use]
    pub fn lookup(&self, detail_type: &str) -> Option<Arc<dyn AuthorizationDetailsProcessor>> {
        self.processors
            .get(detail_type)
            .map(|entry| Arc::clone(entry.value()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Registered types, sorted.
    #[must_use]
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .processors
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        types.sort();
        types
    }

    /// Authorization details types the tenant registered in the catalog
    /// and that have a registered processor.
    ///
    /// Catalog failures are logged at debug level and yield an empty set,
    /// which callers treat as "nothing is supported".
    pub async fn supported_types(
        &self,
        catalog: &dyn ApiResourceCatalog,
        ctx: &RequestContext,
    ) -> HashSet<String> {
        match catalog
            .list_authorization_details_types("", ctx.tenant_domain())
            .await
        {
            Ok(types) => types
                .into_iter()
                .map(|t| t.detail_type)
                .filter(|detail_type| self.processors.contains_key(detail_type))
                .collect(),
            Err(e) => {
                debug!(
                    tenant_domain = %ctx.tenant_domain(),
                    error = %e,
                    "Failed to list authorization details types"
                );
                HashSet::new()
            }
        }
    }

    /// Whether `detail_type` is among [`Self::supported_types`] for the tenant.
    pub async fn is_supported_type(
        &self,
        detail_type: &str,
        catalog: &dyn ApiResourceCatalog,
        ctx: &RequestContext,
    ) -> bool {
        self.supported_types(catalog, ctx)
            .await
            .contains(detail_type)
    }
}

impl ProcessorRegistrar for ProcessorRegistry {
    fn register(&self, processor: Arc<dyn AuthorizationDetailsProcessor>) -> bool {
        ProcessorRegistry::register(self, processor)
    }
}
