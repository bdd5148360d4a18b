//! Configuration for the static RAR plugin.

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticRarPluginConfig {
    /// One processor is registered per entry.
    pub types: Vec<TypeRuleConfig>,
}

/// Processor settings for a single authorization details type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeRuleConfig {
    #[serde(rename = "type")]
    pub detail_type: String,

    #[serde(default)]
    pub matching: MatchingMode,

    /// Answer for a requested detail when nothing of its type was granted.
    #[serde(default)]
    pub subset_of_empty: bool,
}

impl TypeRuleConfig {
    #[must_use]
    pub fn new(detail_type: &str, matching: MatchingMode) -> Self {
        Self {
            detail_type: detail_type.to_owned(),
            matching,
            subset_of_empty: false,
        }
    }
}

/// How a requested detail is compared with granted ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    /// Only the type is compared.
    #[default]
    TypeOnly,
    /// Every field of the requested detail must be covered by one granted entry.
    Structural,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_with_defaults() {
        let cfg: StaticRarPluginConfig = serde_json::from_value(serde_json::json!({
            "types": [
                {"type": "payment_initiation", "matching": "structural"},
                {"type": "account_information", "subset_of_empty": true}
            ]
        }))
        .unwrap();

        assert_eq!(cfg.types.len(), 2);
        assert_eq!(cfg.types[0].detail_type, "payment_initiation");
        assert_eq!(cfg.types[0].matching, MatchingMode::Structural);
        assert!(!cfg.types[0].subset_of_empty);
        assert_eq!(cfg.types[1].matching, MatchingMode::TypeOnly);
        assert!(cfg.types[1].subset_of_empty);
    }

    #[test]
    fn missing_type_is_rejected() {
        let result: Result<StaticRarPluginConfig, _> = serde_json::from_value(
            serde_json::json!({"types": [{"matching": "type_only"}]}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_matching_mode_is_rejected() {
        let result: Result<StaticRarPluginConfig, _> = serde_json::from_value(
            serde_json::json!({"types": [{"type": "x", "matching": "fuzzy"}]}),
        );
        assert!(result.is_err());
    }
}
