// custom-float/src/parse.rs

use crate::error::{Error, Result};

/// Parses a decimal literal such as `-1.23E+4`, `0.5`, `inf` or `NaN`.
/// Surrounding whitespace is ignored; anything else left over is an error.
pub fn parse_decimal(input: &str) -> Result<f64> {
    input.trim().parse().map_err(|_| Error::Parse {
        input: input.to_string(),
    })
}

/// Shortest decimal text that parses back to exactly `value`.
pub fn to_decimal_string(value: f64) -> String {
    value.to_string()
}
