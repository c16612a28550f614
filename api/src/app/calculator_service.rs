//! Calculator service
//!
//! Implements the calculator input port: runs the calculation model, hands the
//! result to the observer, then to the repository, and answers with a
//! response snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::entities::Calculation;
use crate::domain::ports::{
    AddCommand, CalculationObserver, CalculationRepository, CalculationResponse,
    CalculatorInputPort, DivideCommand, MultiplyCommand, SubtractCommand,
};
use crate::error::AppError;

/// Service orchestrating the calculator use cases
pub struct CalculatorService<O, CR>
where
    O: CalculationObserver,
    CR: CalculationRepository,
{
    observer: Arc<O>,
    calculations: Arc<CR>,
}

impl<O, CR> CalculatorService<O, CR>
where
    O: CalculationObserver,
    CR: CalculationRepository,
{
    pub fn new(observer: Arc<O>, calculations: Arc<CR>) -> Self {
        Self {
            observer,
            calculations,
        }
    }

    /// Run the side effects for a completed calculation
    ///
    /// The observer runs first; if it fails the calculation is not saved.
    async fn complete(&self, calculation: Calculation) -> Result<CalculationResponse, AppError> {
        self.observer.observe(&calculation).await?;

        let id = self.calculations.save(&calculation).await?;
        tracing::debug!(
            calculation_id = %id,
            operation = %calculation.operation(),
            "Calculation saved"
        );

        Ok(CalculationResponse::from(&calculation))
    }
}

/// Render an optional operand for a log field
fn log_operand(operand: &Option<BigDecimal>) -> String {
    operand
        .as_ref()
        .map_or_else(|| "<missing>".to_string(), ToString::to_string)
}

#[async_trait]
impl<O, CR> CalculatorInputPort for CalculatorService<O, CR>
where
    O: CalculationObserver,
    CR: CalculationRepository,
{
    async fn perform_addition(
        &self,
        command: AddCommand,
    ) -> Result<CalculationResponse, AppError> {
        tracing::info!(
            operand1 = %log_operand(&command.operand1),
            operand2 = %log_operand(&command.operand2),
            "Performing addition"
        );

        let calculation = Calculation::add(command.operand1, command.operand2)?;
        self.complete(calculation).await
    }

    async fn perform_subtraction(
        &self,
        command: SubtractCommand,
    ) -> Result<CalculationResponse, AppError> {
        tracing::info!(
            operand1 = %log_operand(&command.operand1),
            operand2 = %log_operand(&command.operand2),
            "Performing subtraction"
        );

        let calculation = Calculation::subtract(command.operand1, command.operand2)?;
        self.complete(calculation).await
    }

    async fn perform_multiplication(
        &self,
        command: MultiplyCommand,
    ) -> Result<CalculationResponse, AppError> {
        tracing::info!(
            operand1 = %log_operand(&command.operand1),
            operand2 = %log_operand(&command.operand2),
            "Performing multiplication"
        );

        let calculation = Calculation::multiply(command.operand1, command.operand2)?;
        self.complete(calculation).await
    }

    async fn perform_division(
        &self,
        command: DivideCommand,
    ) -> Result<CalculationResponse, AppError> {
        tracing::info!(
            operand1 = %log_operand(&command.operand1),
            operand2 = %log_operand(&command.operand2),
            scale = command.scale,
            "Performing division"
        );

        let calculation = Calculation::divide(command.operand1, command.operand2, command.scale)?;
        self.complete(calculation).await
    }
}
