//! Observer adapters built on `tracing`

use async_trait::async_trait;

use crate::domain::entities::Calculation;
use crate::domain::ports::CalculationObserver;
use crate::error::ObserverError;

/// Emits one structured log event per completed calculation
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

#[async_trait]
impl CalculationObserver for TracingObserver {
    async fn observe(&self, calculation: &Calculation) -> Result<(), ObserverError> {
        tracing::info!(
            target: "calculator_api::trace",
            operand1 = %calculation.operand1(),
            operand2 = %calculation.operand2(),
            operation = %calculation.operation(),
            result = %calculation.result(),
            "Calculation completed"
        );
        Ok(())
    }
}

/// Observer that discards every calculation
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

#[async_trait]
impl CalculationObserver for NoopObserver {
    async fn observe(&self, _calculation: &Calculation) -> Result<(), ObserverError> {
        Ok(())
    }
}
