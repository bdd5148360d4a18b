#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Public Client Authentication
//!
//! OAuth2 client authenticator for public clients: applications that are
//! allowed to call the token endpoint without a client secret.
//!
//! A request is admitted when
//! - every `grant_type` it carries is in the configured allow-list, and
//! - it names a `client_id` whose application has "bypass client
//!   credentials" enabled.
//!
//! In the API-based authentication flow (`response_mode=direct`) the client
//! id may come from the query string, and a shared application inside an
//! organization inherits the flag of its main application.
//!
//! ## Configuration
//!
//! ```yaml
//! public_client_authn:
//!   allowed_grant_types:
//!     - authorization_code
//!     - refresh_token
//!     - urn:ietf:params:oauth:grant-type:device_code
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod module;

pub use api::{ApplicationManagement, ApplicationRegistry, ClientAuthenticator};
pub use config::PublicClientAuthnConfig;
pub use domain::PublicClientAuthenticator;
pub use error::{AppLookupError, AppManagementError};
pub use models::{ClientAuthnContext, ClientAuthnRequest, OAuthApp};
pub use module::PublicClientAuthnModule;
