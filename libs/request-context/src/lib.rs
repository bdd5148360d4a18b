#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Ambient identity of the request being served: the tenant domain it
//! runs under and, for organization-scoped (shared) applications, the
//! organization ID.

pub mod constants;
pub mod context;

pub use context::{RequestContext, RequestContextBuilder};
