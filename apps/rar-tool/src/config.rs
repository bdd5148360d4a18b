//! Tool configuration: a YAML file overlaid with `RAR_TOOL__*` variables.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use public_client_authn::{OAuthApp, PublicClientAuthnConfig};
use rar::RarConfig;
use rar_sdk::{AccessToken, AuthorizationDetailsType};
use serde::Deserialize;
use static_rar_plugin::config::StaticRarPluginConfig;

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `RAR_TOOL__RAR__REQUIRE_CATALOG_REGISTRATION=false`.
pub const ENV_PREFIX: &str = "RAR_TOOL__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub logging: LoggingConfig,
    pub rar: RarConfig,
    pub static_rar_plugin: StaticRarPluginConfig,
    pub public_client_authn: PublicClientAuthnConfig,
    /// Authorization details types declared per tenant domain.
    pub catalog: HashMap<String, Vec<AuthorizationDetailsType>>,
    /// Verified tokens by identifier.
    pub tokens: HashMap<String, AccessToken>,
    /// OAuth applications known to the public client check.
    pub applications: Vec<OAuthApp>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl ToolConfig {
    /// Load configuration from an optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or either source does not
    /// match the configuration schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid rar-tool configuration")
    }
}
