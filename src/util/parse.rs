use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a currency amount submitted through a ledger form.
///
/// Surrounding whitespace is ignored. The amount must be a whole number strictly
/// greater than zero; anything else (text, decimals, zero, negatives, values that
/// overflow `i64`) is rejected.
///
/// # Arguments
/// - `value` - Raw text from the amount input
///
/// # Returns
/// - `Some(i64)` - Valid positive amount
/// - `None` - Input is not a positive whole number
pub fn parse_amount(value: &str) -> Option<i64> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|amount| *amount > 0)
}
