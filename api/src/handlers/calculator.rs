//! Calculator handlers
//!
//! Translate query parameters into calculator commands. Operands arrive as
//! decimal strings and are parsed exactly; nothing passes through a float.

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    Json,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::domain::ports::{
    AddCommand, CalculationResponse, DivideCommand, MultiplyCommand, SubtractCommand,
};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Query parameters for add, subtract and multiply
#[derive(Debug, Default, Deserialize)]
pub struct OperandsQuery {
    pub operand1: Option<String>,
    pub operand2: Option<String>,
}

/// Query parameters for divide
#[derive(Debug, Default, Deserialize)]
pub struct DivideQuery {
    pub operand1: Option<String>,
    /// Divisor (cannot be zero)
    pub operand2: Option<String>,
    /// Fractional digits to keep; the configured default applies when omitted
    pub scale: Option<String>,
}

/// Parse an optional decimal operand, leaving absence for the domain to reject
fn parse_operand(name: &str, raw: Option<&str>) -> Result<Option<BigDecimal>, AppError> {
    raw.map(|value| {
        BigDecimal::from_str(value.trim()).map_err(|_| {
            AppError::Domain(DomainError::InvalidOperand(format!(
                "{} is not a valid decimal: {:?}",
                name, value
            )))
        })
    })
    .transpose()
}

fn parse_scale(raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("scale must be an integer: {:?}", value))),
        None => Ok(default),
    }
}

/// POST /api/v1/calculator/add
pub async fn add(
    State(state): State<AppState>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    let command = AddCommand {
        operand1: parse_operand("operand1", query.operand1.as_deref())?,
        operand2: parse_operand("operand2", query.operand2.as_deref())?,
    };

    Ok(Json(state.calculator.perform_addition(command).await?))
}

/// POST /api/v1/calculator/subtract
pub async fn subtract(
    State(state): State<AppState>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    let command = SubtractCommand {
        operand1: parse_operand("operand1", query.operand1.as_deref())?,
        operand2: parse_operand("operand2", query.operand2.as_deref())?,
    };

    Ok(Json(state.calculator.perform_subtraction(command).await?))
}

/// POST /api/v1/calculator/multiply
pub async fn multiply(
    State(state): State<AppState>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    let command = MultiplyCommand {
        operand1: parse_operand("operand1", query.operand1.as_deref())?,
        operand2: parse_operand("operand2", query.operand2.as_deref())?,
    };

    Ok(Json(state.calculator.perform_multiplication(command).await?))
}

/// POST /api/v1/calculator/divide
///
/// Returns 400 for a zero divisor or a scale outside the accepted range.
pub async fn divide(
    State(state): State<AppState>,
    Query(query): Query<DivideQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    let command = DivideCommand {
        operand1: parse_operand("operand1", query.operand1.as_deref())?,
        operand2: parse_operand("operand2", query.operand2.as_deref())?,
        scale: parse_scale(query.scale.as_deref(), state.default_division_scale)?,
    };

    Ok(Json(state.calculator.perform_division(command).await?))
}

/// GET /api/v1/calculator/health
pub async fn health() -> &'static str {
    "Calculator API is running"
}
