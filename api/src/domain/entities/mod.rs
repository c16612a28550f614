//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod calculation;

pub use calculation::{Calculation, CalculationId, Operation};
