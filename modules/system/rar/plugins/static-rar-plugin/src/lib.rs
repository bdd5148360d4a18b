#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static RAR Plugin
//!
//! Authorization details processors built from configuration, one per
//! configured type.
//!
//! ## Matching modes
//!
//! - **`type_only`** (default): a requested detail is covered when every
//!   granted entry of its type has that type. Useful for types whose
//!   payload is not compared at all.
//!
//! - **`structural`**: a requested detail is covered when some granted entry
//!   covers it field by field. The request must carry every field the grant
//!   carries and no others. Arrays are compared as sets, objects
//!   recursively, everything else by equality.
//!
//! ## Configuration
//!
//! ```yaml
//! static_rar_plugin:
//!   types:
//!     - type: payment_initiation
//!       matching: structural
//!     - type: account_information
//!       matching: type_only
//!       subset_of_empty: false
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticRarPlugin;
