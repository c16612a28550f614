//! Calculation domain entity
//!
//! An immutable record of one completed arithmetic operation. The four
//! factories are the only way to build one; add, subtract and multiply are
//! exact, divide rounds half-up to a caller-supplied scale.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, One, Zero};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Largest number of fractional digits a division may retain
pub const MAX_DIVISION_SCALE: i64 = 1000;

/// Largest operand exponent magnitude accepted, in either direction
pub const MAX_OPERAND_SCALE: i64 = 1000;

/// Unique identifier for a stored calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculationId(pub Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CalculationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CalculationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arithmetic operation, rendered as its operator symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

/// A completed calculation
///
/// Fields are private so a `Calculation` can only come out of one of the
/// factories below, which keeps `operation` and `result` consistent with the
/// operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    operand1: BigDecimal,
    operand2: BigDecimal,
    operation: Operation,
    result: BigDecimal,
}

impl Calculation {
    /// Exact sum of two operands
    pub fn add(
        operand1: impl Into<Option<BigDecimal>>,
        operand2: impl Into<Option<BigDecimal>>,
    ) -> Result<Self, DomainError> {
        let (a, b) = require_operands(operand1.into(), operand2.into())?;
        let result = &a + &b;
        Ok(Self::new(a, b, Operation::Add, result))
    }

    /// Exact difference of two operands
    pub fn subtract(
        operand1: impl Into<Option<BigDecimal>>,
        operand2: impl Into<Option<BigDecimal>>,
    ) -> Result<Self, DomainError> {
        let (a, b) = require_operands(operand1.into(), operand2.into())?;
        let result = &a - &b;
        Ok(Self::new(a, b, Operation::Subtract, result))
    }

    /// Exact product of two operands
    pub fn multiply(
        operand1: impl Into<Option<BigDecimal>>,
        operand2: impl Into<Option<BigDecimal>>,
    ) -> Result<Self, DomainError> {
        let (a, b) = require_operands(operand1.into(), operand2.into())?;
        let result = &a * &b;
        Ok(Self::new(a, b, Operation::Multiply, result))
    }

    /// Quotient rounded half-up to `scale` fractional digits
    ///
    /// Fails with `InvalidScale` when `scale` is outside
    /// `0..=MAX_DIVISION_SCALE` and with `DivisionByZero` when the divisor
    /// equals zero in value (`0`, `0.00` and `-0` all count).
    pub fn divide(
        operand1: impl Into<Option<BigDecimal>>,
        operand2: impl Into<Option<BigDecimal>>,
        scale: i64,
    ) -> Result<Self, DomainError> {
        let (a, b) = require_operands(operand1.into(), operand2.into())?;
        if !(0..=MAX_DIVISION_SCALE).contains(&scale) {
            return Err(DomainError::InvalidScale(scale));
        }
        if b.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let result = divide_half_up(&a, &b, scale);
        Ok(Self::new(a, b, Operation::Divide, result))
    }

    fn new(
        operand1: BigDecimal,
        operand2: BigDecimal,
        operation: Operation,
        result: BigDecimal,
    ) -> Self {
        Self {
            operand1,
            operand2,
            operation,
            result,
        }
    }

    pub fn operand1(&self) -> &BigDecimal {
        &self.operand1
    }

    pub fn operand2(&self) -> &BigDecimal {
        &self.operand2
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn result(&self) -> &BigDecimal {
        &self.result
    }
}

fn require_operands(
    operand1: Option<BigDecimal>,
    operand2: Option<BigDecimal>,
) -> Result<(BigDecimal, BigDecimal), DomainError> {
    match (operand1, operand2) {
        (Some(a), Some(b)) => {
            check_exponent("operand1", &a)?;
            check_exponent("operand2", &b)?;
            Ok((a, b))
        }
        (None, _) => Err(DomainError::InvalidOperand(
            "operand1 is required".to_string(),
        )),
        (_, None) => Err(DomainError::InvalidOperand(
            "operand2 is required".to_string(),
        )),
    }
}

/// Reject operands whose exponent would force oversized scale alignment
fn check_exponent(name: &str, operand: &BigDecimal) -> Result<(), DomainError> {
    let (_, exponent) = operand.as_bigint_and_exponent();
    if exponent.unsigned_abs() > MAX_OPERAND_SCALE.unsigned_abs() {
        return Err(DomainError::InvalidOperand(format!(
            "{} exponent out of range (at most {} digits either side of the point)",
            name, MAX_OPERAND_SCALE
        )));
    }
    Ok(())
}

/// Divide on the unscaled integers so no intermediate precision is lost.
///
/// With `a = ma * 10^-sa` and `b = mb * 10^-sb`, the quotient scaled by
/// `10^scale` is `ma * 10^(sb - sa + scale) / mb`. The truncated integer
/// quotient is bumped one unit away from zero when the remainder is at least
/// half the divisor.
fn divide_half_up(dividend: &BigDecimal, divisor: &BigDecimal, scale: i64) -> BigDecimal {
    let (dividend_digits, dividend_scale) = dividend.as_bigint_and_exponent();
    let (divisor_digits, divisor_scale) = divisor.as_bigint_and_exponent();

    // |shift| <= 2 * MAX_OPERAND_SCALE + MAX_DIVISION_SCALE
    let shift = divisor_scale - dividend_scale + scale;
    let factor = pow10(shift.unsigned_abs() as u32);

    let (numerator, denominator) = if shift >= 0 {
        (dividend_digits * factor, divisor_digits)
    } else {
        (dividend_digits, divisor_digits * factor)
    };

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;

    let twice_remainder = remainder.magnitude() + remainder.magnitude();
    if twice_remainder >= *denominator.magnitude() {
        let zero = BigInt::zero();
        if (numerator < zero) != (denominator < zero) {
            quotient -= BigInt::one();
        } else {
            quotient += BigInt::one();
        }
    }

    BigDecimal::new(quotient, scale)
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}
