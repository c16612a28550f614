//! Observer port trait
//!
//! Receives every completed calculation before it is stored. Implementations
//! may log, emit metrics, or do nothing.

use async_trait::async_trait;

use crate::domain::entities::Calculation;
use crate::error::ObserverError;

/// Port trait for observing completed calculations
#[async_trait]
pub trait CalculationObserver: Send + Sync {
    /// Notify the sink of a completed calculation
    async fn observe(&self, calculation: &Calculation) -> Result<(), ObserverError>;
}
