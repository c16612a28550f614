//! Tracer adapters
//!
//! Observer implementations that report completed calculations.

pub mod observer;

pub use observer::{NoopObserver, TracingObserver};
