//! Introspection response enrichment with validated authorization details.

use std::sync::Arc;

use async_trait::async_trait;
use rar_sdk::{
    AUTHORIZATION_DETAILS, AccessToken, IntrospectionDataProvider, IntrospectionResponse,
    RarError, TokenProvider, TokenValidationContext, TokenValidationRequest,
    TokenValidationResponse,
};
use request_context::RequestContext;
use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use tracing::{debug, error};

use super::error::DomainError;
use super::validator::AuthorizationDetailsValidator;
use crate::config::RarConfig;

/// Adds `authorization_details` to token introspection responses.
pub struct IntrospectionEnricher {
    validator: Arc<AuthorizationDetailsValidator>,
    tokens: Arc<dyn TokenProvider>,
    refresh_token_type: String,
    include_expired_access_tokens: bool,
}

impl IntrospectionEnricher {
    #[must_use]
    pub fn new(
        validator: Arc<AuthorizationDetailsValidator>,
        tokens: Arc<dyn TokenProvider>,
        cfg: &RarConfig,
    ) -> Self {
        Self {
            validator,
            tokens,
            refresh_token_type: cfg.refresh_token_type.clone(),
            include_expired_access_tokens: cfg.include_expired_access_tokens,
        }
    }

    /// Members to add to the introspection response: either nothing, or
    /// exactly `authorization_details` holding a non-empty array.
    ///
    /// # Errors
    ///
    /// - `TokenLookup` if the token has to be loaded and cannot be
    /// - `ProcessorFailed` if validation fails
    #[tracing::instrument(skip_all, fields(tenant_domain = %ctx.tenant_domain()))]
    pub async fn additional_data(
        &self,
        ctx: &RequestContext,
        request: &TokenValidationRequest,
        response: &IntrospectionResponse,
    ) -> Result<Map<String, Value>, DomainError> {
        let token_ctx = self.validation_context(request, response).await?;
        let validated = self.validator.validated_for_token(ctx, &token_ctx).await?;

        let mut data = Map::new();
        if validated.is_empty() {
            debug!("No validated authorization details for the token");
            return Ok(data);
        }

        debug!(
            count = validated.len(),
            "Adding authorization details to introspection response"
        );
        data.insert(
            AUTHORIZATION_DETAILS.to_owned(),
            serde_json::to_value(validated)?,
        );
        Ok(data)
    }

    /// The validation context the host already built, or a fresh one with
    /// the verified token attached.
    async fn validation_context(
        &self,
        request: &TokenValidationRequest,
        response: &IntrospectionResponse,
    ) -> Result<TokenValidationContext, DomainError> {
        if let Some(existing) = &response.validation_context {
            debug!("Reusing validation context from the introspection response");
            return Ok(existing.clone());
        }

        let token = self.verified_token(request, response).await?;
        Ok(
            TokenValidationContext::new(request.clone(), TokenValidationResponse::from(response))
                .with_access_token(token),
        )
    }

    async fn verified_token(
        &self,
        request: &TokenValidationRequest,
        response: &IntrospectionResponse,
    ) -> Result<AccessToken, DomainError> {
        let identifier = request.access_token.identifier.expose_secret();
        let token = if response.token_type.as_deref() == Some(self.refresh_token_type.as_str()) {
            self.tokens.get_verified_refresh_token(identifier).await?
        } else {
            self.tokens
                .get_verified_access_token(identifier, self.include_expired_access_tokens)
                .await?
        };
        Ok(token)
    }
}

#[async_trait]
impl IntrospectionDataProvider for IntrospectionEnricher {
    async fn introspection_data(
        &self,
        ctx: &RequestContext,
        request: &TokenValidationRequest,
        response: &IntrospectionResponse,
    ) -> Result<Map<String, Value>, RarError> {
        self.additional_data(ctx, request, response)
            .await
            .map_err(|e| log_and_convert("introspection_data", e))
    }
}

fn log_and_convert(op: &str, e: DomainError) -> RarError {
    match &e {
        DomainError::ProcessorFailed { .. } => {
            error!(operation = op, error = %e, "Authorization details validation failed");
        }
        DomainError::TokenLookup(_) => {
            error!(operation = op, error = %e, "Introspected token could not be loaded");
        }
        DomainError::Internal(_) => {
            error!(operation = op, error = %e, "Introspection enrichment failed");
        }
    }
    e.into()
}
