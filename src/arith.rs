//! Arithmetic helper.

use std::ops::Add;

use crate::errors::{ArithError, Result};

/// Returns `x + y` using the type's native addition.
///
/// Integer overflow follows the build's overflow-check setting, which this
/// crate keeps enabled in every profile. Use [`checked_add`] when the
/// operands come from user input.
pub fn add<T: Add<Output = T>>(x: T, y: T) -> T {
    x + y
}

/// Adds two integers, reporting overflow as an error instead of panicking.
pub fn checked_add(x: i64, y: i64) -> Result<i64> {
    x.checked_add(y)
        .ok_or_else(|| ArithError::Overflow { x, y }.into())
}

/// Parses a CLI operand as an integer.
pub fn parse_operand(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ArithError::InvalidOperand(input.to_string()).into())
}
