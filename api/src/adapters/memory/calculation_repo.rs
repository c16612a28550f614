//! In-memory adapter for CalculationRepository

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Calculation, CalculationId};
use crate::domain::ports::CalculationRepository;
use crate::error::StoreError;

/// In-memory implementation of CalculationRepository
///
/// Records are keyed by random UUIDs and live for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCalculationRepository {
    calculations: Arc<RwLock<HashMap<CalculationId, Calculation>>>,
}

impl InMemoryCalculationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("calculation store lock poisoned".to_string())
}

#[async_trait]
impl CalculationRepository for InMemoryCalculationRepository {
    async fn save(&self, calculation: &Calculation) -> Result<CalculationId, StoreError> {
        let mut calculations = self.calculations.write().map_err(poisoned)?;

        let mut id = CalculationId::new();
        while calculations.contains_key(&id) {
            id = CalculationId::new();
        }
        calculations.insert(id, calculation.clone());

        Ok(id)
    }

    async fn find_by_id(&self, id: &CalculationId) -> Result<Option<Calculation>, StoreError> {
        let calculations = self.calculations.read().map_err(poisoned)?;
        Ok(calculations.get(id).cloned())
    }
}
