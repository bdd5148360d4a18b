#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! RAR SDK
//!
//! This crate provides the public API for the `rar` module, which handles
//! Rich Authorization Requests (RFC 9396) `authorization_details`:
//!
//! - [`AuthorizationDetail`], [`AuthorizationDetails`] - Entity model
//! - [`AuthorizationDetailsProcessor`] - Plugin API trait for per-type processors
//! - [`ProcessorRegistrar`] - Seam through which plugins register processors
//! - [`ProcessorRegistration`] - Static (link-time) processor registration record
//! - [`ApiResourceCatalog`], [`TokenProvider`] - Collaborators consumed by the module
//! - [`IntrospectionDataProvider`] - Public API trait for introspection consumers
//! - [`RarError`] - Error types
//!
//! ## Usage
//!
//! A plugin crate contributes a processor at link time:
//!
//! ```ignore
//! use std::sync::Arc;
//! use rar_sdk::{AuthorizationDetailsProcessor, ProcessorRegistration};
//!
//! fn payment_processor() -> Arc<dyn AuthorizationDetailsProcessor> {
//!     Arc::new(PaymentInitiationProcessor)
//! }
//!
//! inventory::submit! { ProcessorRegistration::new(payment_processor) }
//! ```
//!
//! The introspection endpoint asks the provider for extra response members:
//!
//! ```ignore
//! let extras = provider.introspection_data(&ctx, &request, &response).await?;
//! response_json.extend(extras);
//! ```

pub mod api;
pub mod discovery;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod token;

// Re-export main types at crate root
pub use api::{ApiResourceCatalog, IntrospectionDataProvider, TokenProvider};
pub use discovery::{ProcessorRegistration, discovered_processors};
pub use error::{CatalogError, InvalidDetailError, ProcessorError, RarError, TokenProviderError};
pub use models::{
    AUTHORIZATION_DETAILS, AuthorizationDetail, AuthorizationDetails, AuthorizationDetailsType,
};
pub use plugin_api::{AuthorizationDetailsProcessor, ProcessorRegistrar};
pub use token::{
    AccessToken, IntrospectionResponse, REFRESH_TOKEN_TYPE, TokenHandle, TokenValidationContext,
    TokenValidationRequest, TokenValidationResponse,
};
