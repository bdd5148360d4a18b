//! Authorization detail models (RFC 9396).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InvalidDetailError;

/// Name of the `authorization_details` request parameter and response member.
pub const AUTHORIZATION_DETAILS: &str = "authorization_details";

/// Common data fields defined by RFC 9396 section 2.2.
pub mod fields {
    pub const TYPE: &str = "type";
    pub const LOCATIONS: &str = "locations";
    pub const ACTIONS: &str = "actions";
    pub const DATATYPES: &str = "datatypes";
    pub const IDENTIFIER: &str = "identifier";
    pub const PRIVILEGES: &str = "privileges";

    /// Common fields whose value must be an array of strings.
    pub const STRING_ARRAYS: &[&str] = &[LOCATIONS, ACTIONS, DATATYPES, PRIVILEGES];
}

/// A single typed authorization claim.
///
/// Serializes as `{"type": "...", ...type-specific fields}`. The `type` is
/// required, non-blank and cannot change once the detail is built; which
/// other fields exist is up to the processor registered for that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAuthorizationDetail")]
pub struct AuthorizationDetail {
    #[serde(rename = "type")]
    detail_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawAuthorizationDetail {
    #[serde(rename = "type")]
    detail_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl TryFrom<RawAuthorizationDetail> for AuthorizationDetail {
    type Error = InvalidDetailError;

    fn try_from(raw: RawAuthorizationDetail) -> Result<Self, Self::Error> {
        let mut detail = Self::new(raw.detail_type)?;
        detail.fields = raw.fields;
        Ok(detail)
    }
}

impl AuthorizationDetail {
    /// Create a detail of the given type with no other fields.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDetailError`] if `detail_type` is blank.
    pub fn new(detail_type: impl Into<String>) -> Result<Self, InvalidDetailError> {
        let detail_type = detail_type.into();
        if detail_type.trim().is_empty() {
            return Err(InvalidDetailError("type must not be blank".to_owned()));
        }
        Ok(Self {
            detail_type,
            fields: Map::new(),
        })
    }

    /// Builder-style setter for a type-specific field.
    ///
    /// Setting `type` through this method is ignored.
    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Set a type-specific field, returning the previous value.
    ///
    /// Setting `type` through this method is ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        if name == fields::TYPE {
            return None;
        }
        self.fields.insert(name.to_owned(), value.into())
    }

    #[must_use]
    pub fn detail_type(&self) -> &str {
        &self.detail_type
    }

    /// All fields except `type`.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn locations(&self) -> Option<Vec<&str>> {
        self.string_array(fields::LOCATIONS)
    }

    #[must_use]
    pub fn actions(&self) -> Option<Vec<&str>> {
        self.string_array(fields::ACTIONS)
    }

    #[must_use]
    pub fn datatypes(&self) -> Option<Vec<&str>> {
        self.string_array(fields::DATATYPES)
    }

    #[must_use]
    pub fn privileges(&self) -> Option<Vec<&str>> {
        self.string_array(fields::PRIVILEGES)
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.fields.get(fields::IDENTIFIER).and_then(Value::as_str)
    }

    /// Returns the field as a list of strings, or `None` if it is absent or
    /// not an array made only of strings.
    #[must_use]
    pub fn string_array(&self, name: &str) -> Option<Vec<&str>> {
        self.fields
            .get(name)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }
}

/// An ordered set of [`AuthorizationDetail`] values.
///
/// Structurally identical entries collapse on insertion; insertion order is
/// kept so that serialization is deterministic. An empty set is a valid
/// state meaning "no rich authorization requested".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<AuthorizationDetail>",
    into = "Vec<AuthorizationDetail>"
)]
pub struct AuthorizationDetails {
    details: Vec<AuthorizationDetail>,
}

impl AuthorizationDetails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON array carried by an `authorization_details` parameter.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not an array of details
    /// with non-blank types.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Insert a detail. Returns `false` if an identical detail is already present.
    ///
    /// Duplicate detection is a linear scan: details are JSON objects and
    /// not hashable, and `authorization_details` parameters hold a handful
    /// of entries.
    pub fn insert(&mut self, detail: AuthorizationDetail) -> bool {
        if self.details.contains(&detail) {
            return false;
        }
        self.details.push(detail);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.details.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// A set carries a rich authorization request iff it is non-empty.
    #[must_use]
    pub fn is_rich_authorization_request(&self) -> bool {
        !self.details.is_empty()
    }

    #[must_use]
    pub fn contains(&self, detail: &AuthorizationDetail) -> bool {
        self.details.contains(detail)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuthorizationDetail> {
        self.details.iter()
    }

    /// The entries of the given type, in order.
    #[must_use]
    pub fn of_type(&self, detail_type: &str) -> Self {
        self.details
            .iter()
            .filter(|d| d.detail_type() == detail_type)
            .cloned()
            .collect()
    }

    /// Distinct types in first-seen order.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for detail in &self.details {
            if !types.contains(&detail.detail_type()) {
                types.push(detail.detail_type());
            }
        }
        types
    }

    /// Plain collection view, for callers that should not see the set type.
    #[must_use]
    pub fn to_vec(&self) -> Vec<AuthorizationDetail> {
        self.details.clone()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<AuthorizationDetail> {
        self.details
    }
}

impl From<Vec<AuthorizationDetail>> for AuthorizationDetails {
    fn from(details: Vec<AuthorizationDetail>) -> Self {
        details.into_iter().collect()
    }
}

impl From<AuthorizationDetails> for Vec<AuthorizationDetail> {
    fn from(details: AuthorizationDetails) -> Self {
        details.details
    }
}

impl FromIterator<AuthorizationDetail> for AuthorizationDetails {
    fn from_iter<I: IntoIterator<Item = AuthorizationDetail>>(iter: I) -> Self {
        let mut set = Self::new();
        for detail in iter {
            set.insert(detail);
        }
        set
    }
}

impl IntoIterator for AuthorizationDetails {
    type Item = AuthorizationDetail;
    type IntoIter = std::vec::IntoIter<AuthorizationDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.into_iter()
    }
}

impl<'a> IntoIterator for &'a AuthorizationDetails {
    type Item = &'a AuthorizationDetail;
    type IntoIter = std::slice::Iter<'a, AuthorizationDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.iter()
    }
}

/// An authorization details type registered for a tenant in the
/// API-resource catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationDetailsType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub detail_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON schema the catalog validates entries of this type against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl AuthorizationDetailsType {
    #[must_use]
    pub fn new(detail_type: &str) -> Self {
        Self {
            id: None,
            detail_type: detail_type.to_owned(),
            name: None,
            description: None,
            schema: None,
        }
    }
}
