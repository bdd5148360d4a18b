pub mod coverage;
pub mod processor;

pub use processor::StaticProcessor;
