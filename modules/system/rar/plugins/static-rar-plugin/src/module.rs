//! Static RAR plugin module.

use std::sync::Arc;

use rar_sdk::ProcessorRegistrar;
use tracing::{info, warn};

use crate::config::StaticRarPluginConfig;
use crate::domain::StaticProcessor;

/// Registers the configured processors with the RAR module.
pub struct StaticRarPlugin;

impl StaticRarPlugin {
    pub const PLUGIN_NAME: &'static str = "static-rar-plugin";

    /// Register one processor per configured type.
    ///
    /// Returns the number of processors registered. Entries with a blank
    /// type are skipped with a warning.
    pub fn init(cfg: &StaticRarPluginConfig, registrar: &dyn ProcessorRegistrar) -> usize {
        info!(
            plugin = Self::PLUGIN_NAME,
            type_count = cfg.types.len(),
            "Initializing static_rar_plugin"
        );

        let mut registered = 0;
        for rule in &cfg.types {
            let processor = Arc::new(StaticProcessor::from_config(rule));
            if registrar.register(processor) {
                info!(
                    detail_type = %rule.detail_type,
                    matching = ?rule.matching,
                    subset_of_empty = rule.subset_of_empty,
                    "Registered static authorization details processor"
                );
                registered += 1;
            } else {
                warn!("Skipping static processor rule with a blank type");
            }
        }

        info!(registered, "Static rar plugin initialized");
        registered
    }
}
