use crate::constants::DEFAULT_TENANT_DOMAIN;

/// `RequestContext` carries the tenant and organization a request is served for.
///
/// Built by the host once per request and passed to every call that needs a
/// tenant-scoped lookup (supported authorization detail types, application
/// records).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequestContext {
    /// Tenant domain the request runs under.
    tenant_domain: String,
    /// Organization the request was routed to, if any. Never an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organization_id: Option<String>,
}

impl RequestContext {
    /// Create a new `RequestContext` builder
    #[must_use]
    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }

    /// Context for the default tenant with no organization.
    #[must_use]
    pub fn default_tenant() -> Self {
        RequestContextBuilder::default().build()
    }

    /// Get the tenant domain of the request.
    #[must_use]
    pub fn tenant_domain(&self) -> &str {
        &self.tenant_domain
    }

    /// Get the organization ID of the request, if it was routed to one.
    #[must_use]
    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    /// Whether the request is served on behalf of an organization.
    #[must_use]
    pub fn is_organization_scoped(&self) -> bool {
        self.organization_id.is_some()
    }
}

#[derive(Default)]
pub struct RequestContextBuilder {
    tenant_domain: Option<String>,
    organization_id: Option<String>,
}

impl RequestContextBuilder {
    #[must_use]
    pub fn tenant_domain(mut self, tenant_domain: &str) -> Self {
        self.tenant_domain = Some(tenant_domain.to_owned());
        self
    }

    /// Blank organization IDs are treated as absent.
    #[must_use]
    pub fn organization_id(mut self, organization_id: &str) -> Self {
        self.organization_id = if organization_id.trim().is_empty() {
            None
        } else {
            Some(organization_id.to_owned())
        };
        self
    }

    #[must_use]
    pub fn build(self) -> RequestContext {
        RequestContext {
            tenant_domain: self
                .tenant_domain
                .unwrap_or_else(|| DEFAULT_TENANT_DOMAIN.to_owned()),
            organization_id: self.organization_id,
        }
    }
}
