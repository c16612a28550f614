//! Repository port traits
//!
//! These traits define the interface for calculation persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{Calculation, CalculationId};
use crate::error::StoreError;

/// Repository for Calculation records
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Persist a calculation, returning the identifier the store assigned
    async fn save(&self, calculation: &Calculation) -> Result<CalculationId, StoreError>;

    /// Find a calculation by ID
    async fn find_by_id(&self, id: &CalculationId) -> Result<Option<Calculation>, StoreError>;
}
