//! Registration of processors contributed at link time.

use rar_sdk::{ProcessorRegistrar, discovered_processors};
use tracing::{debug, warn};

/// Register every processor submitted through `rar_sdk::ProcessorRegistration`.
///
/// Returns the number of processors that were accepted.
pub fn register_discovered(registrar: &dyn ProcessorRegistrar) -> usize {
    let mut registered = 0;
    for processor in discovered_processors() {
        let name = processor.name();
        debug!(processor = name, "Discovered authorization details processor");
        if registrar.register(processor) {
            registered += 1;
        } else {
            warn!(
                processor = name,
                "Skipping discovered processor with a blank type"
            );
        }
    }
    registered
}
