//! Structural coverage of one authorization detail by another.

use rar_sdk::models::fields;
use rar_sdk::{AuthorizationDetail, ProcessorError};
use serde_json::{Map, Value};

/// Whether `requested` is equal to or narrower than `granted`.
///
/// A field restricts what a detail grants, so dropping one widens the
/// request: `requested` must carry every field of `granted`, and may not
/// carry fields `granted` lacks.
#[must_use]
pub fn detail_covers(granted: &AuthorizationDetail, requested: &AuthorizationDetail) -> bool {
    members_cover(granted.fields(), requested.fields())
}

/// Arrays are covered element-wise, objects member-wise, scalars by equality.
#[must_use]
pub fn value_covers(granted: &Value, requested: &Value) -> bool {
    match (granted, requested) {
        (Value::Array(granted), Value::Array(requested)) => requested
            .iter()
            .all(|item| granted.iter().any(|g| value_covers(g, item))),
        (Value::Object(granted), Value::Object(requested)) => members_cover(granted, requested),
        (granted, requested) => granted == requested,
    }
}

fn members_cover(granted: &Map<String, Value>, requested: &Map<String, Value>) -> bool {
    granted.len() == requested.len()
        && granted.iter().all(|(name, granted_value)| {
            requested
                .get(name)
                .is_some_and(|value| value_covers(granted_value, value))
        })
}

/// Check the common RFC 9396 fields that must hold arrays of strings.
///
/// # Errors
///
/// Returns [`ProcessorError::Malformed`] naming the first offending field.
pub fn check_common_fields(detail: &AuthorizationDetail) -> Result<(), ProcessorError> {
    for name in fields::STRING_ARRAYS {
        if detail.field(name).is_some() && detail.string_array(name).is_none() {
            return Err(ProcessorError::Malformed(format!(
                "'{name}' of '{}' must be an array of strings",
                detail.detail_type()
            )));
        }
    }
    Ok(())
}
