//! Domain ports (traits)
//!
//! Port traits define the interfaces around the calculation core.
//! The input port is what callers drive; the observer and repository ports
//! are what the core requires. Adapters provide concrete implementations.

pub mod input;
pub mod observer;
pub mod repositories;

pub use input::{
    AddCommand, CalculationResponse, CalculatorInputPort, DivideCommand, MultiplyCommand,
    SubtractCommand,
};
pub use observer::CalculationObserver;
pub use repositories::CalculationRepository;
