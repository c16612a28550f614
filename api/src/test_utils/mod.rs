//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The recording mocks share one call log, so tests can assert the order
//!   in which the observer and repository ports were driven
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
