//! Application layer
//!
//! Contains the calculator use cases.
//! The service coordinates the calculation model with the observer and repository ports.

pub mod calculator_service;

pub use calculator_service::CalculatorService;
