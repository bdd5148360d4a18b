//! RAR Module
//!
//! Rich Authorization Requests (RFC 9396) processing: a process-wide
//! registry of per-type processors, the validator that narrows requested
//! authorization details against granted ones, and the introspection
//! provider that reports validated details for a token.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::RarConfig;
pub use domain::{
    AuthorizationDetailsValidator, IntrospectionEnricher, ProcessorRegistry, RejectedDetail,
    RejectionReason, ValidationOutcome,
};
pub use module::RarModule;
