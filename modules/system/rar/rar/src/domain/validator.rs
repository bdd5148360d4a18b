//! Subset validation of requested authorization details.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rar_sdk::{
    ApiResourceCatalog, AuthorizationDetail, AuthorizationDetails,
    AuthorizationDetailsProcessor, TokenValidationContext,
};
use request_context::RequestContext;
use serde::Serialize;
use tracing::debug;

use super::error::DomainError;
use super::registry::ProcessorRegistry;
use crate::config::RarConfig;

/// Why a requested detail was left out of the validated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// No processor is registered for the type, or the tenant does not
    /// declare the type in its catalog.
    UnsupportedType,
    /// The processor found the detail broader than what was granted.
    NotGranted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedDetail {
    pub detail: AuthorizationDetail,
    pub reason: RejectionReason,
}

/// Result of validating a requested set against a reference set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationOutcome {
    validated: AuthorizationDetails,
    rejected: Vec<RejectedDetail>,
}

impl ValidationOutcome {
    /// Requested details that are covered by the reference, in request order.
    #[must_use]
    pub fn validated(&self) -> &AuthorizationDetails {
        &self.validated
    }

    #[must_use]
    pub fn rejected(&self) -> &[RejectedDetail] {
        &self.rejected
    }

    #[must_use]
    pub fn into_validated(self) -> AuthorizationDetails {
        self.validated
    }

    /// Whether every requested detail was validated.
    #[must_use]
    pub fn is_fully_validated(&self) -> bool {
        self.rejected.is_empty()
    }

    fn reject(&mut self, detail: &AuthorizationDetail, reason: RejectionReason) {
        self.rejected.push(RejectedDetail {
            detail: detail.clone(),
            reason,
        });
    }
}

/// A type's processor together with the reference entries of that type.
struct TypeMatcher {
    processor: Arc<dyn AuthorizationDetailsProcessor>,
    reference: AuthorizationDetails,
}

/// Narrows requested authorization details to those a reference set covers.
///
/// The validator never widens: the validated set is always a subset of the
/// requested set. Unknown or undeclared types are dropped silently; only
/// processor failures are errors.
pub struct AuthorizationDetailsValidator {
    registry: Arc<ProcessorRegistry>,
    catalog: Arc<dyn ApiResourceCatalog>,
    require_catalog_registration: bool,
}

impl AuthorizationDetailsValidator {
    #[must_use]
    pub fn new(
        registry: Arc<ProcessorRegistry>,
        catalog: Arc<dyn ApiResourceCatalog>,
        cfg: &RarConfig,
    ) -> Self {
        Self {
            registry,
            catalog,
            require_catalog_registration: cfg.require_catalog_registration,
        }
    }

    /// Validate `requested` against `reference`.
    ///
    /// Each requested detail is handed to the processor for its type along
    /// with the reference entries of the same type. Processors are resolved
    /// and the catalog is queried at most once per call.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProcessorFailed`] if a processor fails. No
    /// partial result is returned in that case.
    #[tracing::instrument(
        skip_all,
        fields(tenant_domain = %ctx.tenant_domain(), requested = requested.len())
    )]
    pub async fn validate(
        &self,
        ctx: &RequestContext,
        requested: &AuthorizationDetails,
        reference: &AuthorizationDetails,
    ) -> Result<ValidationOutcome, DomainError> {
        let mut outcome = ValidationOutcome::default();
        if requested.is_empty() {
            return Ok(outcome);
        }

        let supported = if self.require_catalog_registration {
            Some(self.registry.supported_types(self.catalog.as_ref(), ctx).await)
        } else {
            None
        };
        let matchers = self.resolve_matchers(requested, reference, supported.as_ref());

        for candidate in requested {
            let Some(matcher) = matchers.get(candidate.detail_type()) else {
                outcome.reject(candidate, RejectionReason::UnsupportedType);
                continue;
            };

            let covered = matcher
                .processor
                .is_equal_or_subset(candidate, &matcher.reference)
                .map_err(|e| DomainError::ProcessorFailed {
                    detail_type: candidate.detail_type().to_owned(),
                    processor: matcher.processor.name(),
                    reason: e.to_string(),
                })?;

            if covered {
                outcome.validated.insert(candidate.clone());
            } else {
                debug!(
                    detail_type = %candidate.detail_type(),
                    "Requested authorization detail is not covered by the reference"
                );
                outcome.reject(candidate, RejectionReason::NotGranted);
            }
        }

        debug!(
            validated = outcome.validated.len(),
            rejected = outcome.rejected.len(),
            "Authorization details validated"
        );
        Ok(outcome)
    }

    /// Validate the details an introspected token is being asked about.
    ///
    /// The reference is what the token was granted. When the request names
    /// no details, the granted set itself is re-validated so that details
    /// whose type lost its processor are no longer reported.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProcessorFailed`] if a processor fails.
    pub async fn validated_for_token(
        &self,
        ctx: &RequestContext,
        token_ctx: &TokenValidationContext,
    ) -> Result<AuthorizationDetails, DomainError> {
        let granted = token_ctx.granted_authorization_details();
        let requested = &token_ctx.request.requested_authorization_details;
        let requested = if requested.is_empty() {
            &granted
        } else {
            requested
        };

        let outcome = self.validate(ctx, requested, &granted).await?;
        Ok(outcome.into_validated())
    }

    fn resolve_matchers<'a>(
        &self,
        requested: &'a AuthorizationDetails,
        reference: &AuthorizationDetails,
        supported: Option<&HashSet<String>>,
    ) -> HashMap<&'a str, TypeMatcher> {
        let mut matchers = HashMap::new();
        for detail_type in requested.types() {
            let Some(processor) = self.registry.lookup(detail_type) else {
                debug!(
                    detail_type = %detail_type,
                    "No processor registered for authorization details type"
                );
                continue;
            };
            if supported.is_some_and(|types| !types.contains(detail_type)) {
                debug!(
                    detail_type = %detail_type,
                    "Authorization details type is not registered for the tenant"
                );
                continue;
            }
            matchers.insert(
                detail_type,
                TypeMatcher {
                    processor,
                    reference: reference.of_type(detail_type),
                },
            );
        }
        matchers
    }
}
