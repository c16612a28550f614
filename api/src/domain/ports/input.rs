//! Calculator input port
//!
//! The operation surface exposed to input adapters (e.g., the HTTP layer),
//! together with the command and response values that cross it.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Calculation, Operation};
use crate::error::AppError;

/// Operands for an addition
#[derive(Debug, Clone, Default)]
pub struct AddCommand {
    pub operand1: Option<BigDecimal>,
    pub operand2: Option<BigDecimal>,
}

/// Operands for a subtraction
#[derive(Debug, Clone, Default)]
pub struct SubtractCommand {
    pub operand1: Option<BigDecimal>,
    pub operand2: Option<BigDecimal>,
}

/// Operands for a multiplication
#[derive(Debug, Clone, Default)]
pub struct MultiplyCommand {
    pub operand1: Option<BigDecimal>,
    pub operand2: Option<BigDecimal>,
}

/// Operands for a division, plus the number of fractional digits to keep
#[derive(Debug, Clone)]
pub struct DivideCommand {
    pub operand1: Option<BigDecimal>,
    pub operand2: Option<BigDecimal>,
    pub scale: i64,
}

#[cfg(test)]
impl AddCommand {
    pub fn new(operand1: BigDecimal, operand2: BigDecimal) -> Self {
        Self {
            operand1: Some(operand1),
            operand2: Some(operand2),
        }
    }
}

#[cfg(test)]
impl SubtractCommand {
    pub fn new(operand1: BigDecimal, operand2: BigDecimal) -> Self {
        Self {
            operand1: Some(operand1),
            operand2: Some(operand2),
        }
    }
}

#[cfg(test)]
impl MultiplyCommand {
    pub fn new(operand1: BigDecimal, operand2: BigDecimal) -> Self {
        Self {
            operand1: Some(operand1),
            operand2: Some(operand2),
        }
    }
}

#[cfg(test)]
impl DivideCommand {
    pub fn new(operand1: BigDecimal, operand2: BigDecimal, scale: i64) -> Self {
        Self {
            operand1: Some(operand1),
            operand2: Some(operand2),
            scale,
        }
    }
}

/// Flat snapshot of a calculation returned to callers
///
/// Decimals serialize as strings so no client ever sees a binary float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub operand1: BigDecimal,
    pub operand2: BigDecimal,
    pub operation: Operation,
    pub result: BigDecimal,
}

impl From<&Calculation> for CalculationResponse {
    fn from(calculation: &Calculation) -> Self {
        Self {
            operand1: calculation.operand1().clone(),
            operand2: calculation.operand2().clone(),
            operation: calculation.operation(),
            result: calculation.result().clone(),
        }
    }
}

/// Port trait for the calculator use cases
#[async_trait]
pub trait CalculatorInputPort: Send + Sync {
    async fn perform_addition(&self, command: AddCommand)
        -> Result<CalculationResponse, AppError>;

    async fn perform_subtraction(
        &self,
        command: SubtractCommand,
    ) -> Result<CalculationResponse, AppError>;

    async fn perform_multiplication(
        &self,
        command: MultiplyCommand,
    ) -> Result<CalculationResponse, AppError>;

    async fn perform_division(
        &self,
        command: DivideCommand,
    ) -> Result<CalculationResponse, AppError>;
}
