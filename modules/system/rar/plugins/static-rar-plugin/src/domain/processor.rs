//! Config-driven authorization details processor.

use rar_sdk::{
    AuthorizationDetail, AuthorizationDetails, AuthorizationDetailsProcessor, ProcessorError,
};

use super::coverage::{check_common_fields, detail_covers};
use crate::config::{MatchingMode, TypeRuleConfig};

/// Processor for one configured type.
#[derive(Debug, Clone)]
pub struct StaticProcessor {
    detail_type: String,
    matching: MatchingMode,
    subset_of_empty: bool,
}

impl StaticProcessor {
    #[must_use]
    pub fn from_config(rule: &TypeRuleConfig) -> Self {
        Self {
            detail_type: rule.detail_type.clone(),
            matching: rule.matching,
            subset_of_empty: rule.subset_of_empty,
        }
    }
}

impl AuthorizationDetailsProcessor for StaticProcessor {
    fn detail_type(&self) -> &str {
        &self.detail_type
    }

    fn is_equal_or_subset(
        &self,
        candidate: &AuthorizationDetail,
        reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError> {
        if reference.is_empty() {
            return Ok(self.subset_of_empty);
        }

        match self.matching {
            MatchingMode::TypeOnly => Ok(reference
                .iter()
                .all(|granted| granted.detail_type() == candidate.detail_type())),
            MatchingMode::Structural => {
                check_common_fields(candidate)?;
                for granted in reference {
                    check_common_fields(granted)?;
                }
                Ok(reference
                    .iter()
                    .any(|granted| detail_covers(granted, candidate)))
            }
        }
    }

    fn name(&self) -> &'static str {
        match self.matching {
            MatchingMode::TypeOnly => "StaticProcessor(type_only)",
            MatchingMode::Structural => "StaticProcessor(structural)",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    fn payment(amount: i64) -> AuthorizationDetail {
        AuthorizationDetail::new("payment_initiation")
            .unwrap()
            .with_field("amount", amount)
    }

    fn processor(matching: MatchingMode) -> StaticProcessor {
        StaticProcessor::from_config(&TypeRuleConfig::new("payment_initiation", matching))
    }

    #[test]
    fn type_only_ignores_payload() {
        let p = processor(MatchingMode::TypeOnly);
        let reference = AuthorizationDetails::from(vec![payment(50), payment(100)]);

        assert!(p.is_equal_or_subset(&payment(50), &reference).unwrap());
        assert!(p.is_equal_or_subset(&payment(7), &reference).unwrap());
    }

    #[test]
    fn structural_requires_a_covering_entry() {
        let p = processor(MatchingMode::Structural);
        let reference = AuthorizationDetails::from(vec![payment(50), payment(100)]);

        assert!(p.is_equal_or_subset(&payment(100), &reference).unwrap());
        assert!(!p.is_equal_or_subset(&payment(75), &reference).unwrap());
    }

    #[test]
    fn structural_is_reflexive() {
        let p = processor(MatchingMode::Structural);
        let detail = payment(10).with_field("actions", json!(["initiate", "status"]));
        let reference = AuthorizationDetails::from(vec![detail.clone()]);

        assert!(p.is_equal_or_subset(&detail, &reference).unwrap());
    }

    #[test]
    fn empty_reference_uses_configured_answer() {
        let strict = processor(MatchingMode::Structural);
        let lenient = StaticProcessor::from_config(&TypeRuleConfig {
            subset_of_empty: true,
            ..TypeRuleConfig::new("payment_initiation", MatchingMode::TypeOnly)
        });
        let empty = AuthorizationDetails::new();

        assert!(!strict.is_equal_or_subset(&payment(1), &empty).unwrap());
        assert!(lenient.is_equal_or_subset(&payment(1), &empty).unwrap());
    }

    #[test]
    fn malformed_common_field_is_an_error() {
        let p = processor(MatchingMode::Structural);
        let candidate = payment(1).with_field("actions", "initiate");
        let reference = AuthorizationDetails::from(vec![payment(1)]);

        let err = p.is_equal_or_subset(&candidate, &reference).unwrap_err();
        assert!(matches!(err, ProcessorError::Malformed(_)));
    }

    #[test]
    fn malformed_reference_entry_is_an_error() {
        let p = processor(MatchingMode::Structural);
        let reference =
            AuthorizationDetails::from(vec![payment(1).with_field("locations", json!([1, 2]))]);

        assert!(p.is_equal_or_subset(&payment(1), &reference).is_err());
    }
}
