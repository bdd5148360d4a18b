//! Public client authenticator wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{ApplicationManagement, ApplicationRegistry, ClientAuthenticator};
use crate::config::PublicClientAuthnConfig;
use crate::domain::PublicClientAuthenticator;

/// Builds the authenticator the host adds to its client authenticator chain.
pub struct PublicClientAuthnModule;

impl PublicClientAuthnModule {
    pub const MODULE_NAME: &'static str = "public-client-authn";

    #[must_use]
    pub fn init(
        cfg: &PublicClientAuthnConfig,
        apps: Arc<dyn ApplicationRegistry>,
        management: Arc<dyn ApplicationManagement>,
    ) -> Arc<dyn ClientAuthenticator> {
        info!(
            module = Self::MODULE_NAME,
            allowed_grant_types = ?cfg.allowed_grant_types,
            "Initializing public client authenticator"
        );
        if cfg.allowed_grant_types.is_empty() {
            warn!("No grant types are configured for public clients; all of them will be refused");
        }
        Arc::new(PublicClientAuthenticator::new(cfg, apps, management))
    }
}
