//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod tracer;

pub use memory::InMemoryCalculationRepository;
pub use tracer::{NoopObserver, TracingObserver};
