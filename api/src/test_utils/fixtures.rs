//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::domain::entities::Calculation;
use crate::domain::ports::CalculationResponse;

/// Parse a decimal literal
pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap_or_else(|e| panic!("bad decimal {:?}: {}", value, e))
}

/// Create a test calculation (10.50 + 5.25)
pub fn test_calculation() -> Calculation {
    Calculation::add(dec("10.50"), dec("5.25")).unwrap()
}

/// Create the response matching `test_calculation`
pub fn test_response() -> CalculationResponse {
    CalculationResponse::from(&test_calculation())
}
