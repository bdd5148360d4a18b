//! Plugin API for authorization details processors.

use std::sync::Arc;

use crate::error::ProcessorError;
use crate::models::{AuthorizationDetail, AuthorizationDetails};

/// Per-type comparator for authorization details.
///
/// One processor handles exactly one `type`. New types are added by
/// independent plugin crates, so the set of processors is open: plugins
/// implement this trait and register through a [`ProcessorRegistrar`] or a
/// [`ProcessorRegistration`](crate::ProcessorRegistration).
pub trait AuthorizationDetailsProcessor: Send + Sync {
    /// The authorization details type this processor handles.
    fn detail_type(&self) -> &str;

    /// Whether `candidate` is equal to, or narrower than, what `reference`
    /// already grants.
    ///
    /// `reference` only contains entries of this processor's type. Whether a
    /// candidate is covered by an empty reference is the processor's call;
    /// the conventional answer is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError`] if the comparison cannot be carried out,
    /// e.g. because an entry is malformed for this type.
    fn is_equal_or_subset(
        &self,
        candidate: &AuthorizationDetail,
        reference: &AuthorizationDetails,
    ) -> Result<bool, ProcessorError>;

    /// Implementation name, used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Sink that accepts processors, implemented by the module's registry.
pub trait ProcessorRegistrar: Send + Sync {
    /// Register a processor under its type, replacing any earlier one.
    ///
    /// Returns `false` without registering when the processor's type is blank.
    fn register(&self, processor: Arc<dyn AuthorizationDetailsProcessor>) -> bool;
}
