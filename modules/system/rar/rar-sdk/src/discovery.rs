//! Link-time processor registration.
//!
//! Plugin crates submit a [`ProcessorRegistration`] with `inventory`; the
//! module walks them once at startup. Only crates linked into the final
//! binary contribute, so binaries keep a `use my_plugin as _;` line per
//! plugin.

use std::sync::Arc;

use crate::plugin_api::AuthorizationDetailsProcessor;

/// A processor constructor contributed at link time.
pub struct ProcessorRegistration {
    constructor: fn() -> Arc<dyn AuthorizationDetailsProcessor>,
}

impl ProcessorRegistration {
    #[must_use]
    pub const fn new(constructor: fn() -> Arc<dyn AuthorizationDetailsProcessor>) -> Self {
        Self { constructor }
    }

    #[must_use]
    pub fn instantiate(&self) -> Arc<dyn AuthorizationDetailsProcessor> {
        (self.constructor)()
    }
}

inventory::collect!(ProcessorRegistration);

/// Instantiate every processor submitted through [`ProcessorRegistration`].
pub fn discovered_processors() -> impl Iterator<Item = Arc<dyn AuthorizationDetailsProcessor>> {
    inventory::iter::<ProcessorRegistration>
        .into_iter()
        .map(ProcessorRegistration::instantiate)
}
