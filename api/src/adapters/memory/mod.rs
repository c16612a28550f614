//! In-memory adapters
//!
//! Repository implementations backed by process memory.

pub mod calculation_repo;

pub use calculation_repo::InMemoryCalculationRepository;
