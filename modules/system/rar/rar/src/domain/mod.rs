//! Domain layer for the RAR module.

pub mod discovery;
pub mod error;
pub mod introspection;
pub mod registry;
pub mod validator;

#[cfg(test)]
mod test_support;

pub use discovery::register_discovered;
pub use error::DomainError;
pub use introspection::IntrospectionEnricher;
pub use registry::ProcessorRegistry;
pub use validator::{
    AuthorizationDetailsValidator, RejectedDetail, RejectionReason, ValidationOutcome,
};
