//! Helpers that sit next to the encoder: the `F(a, b)` function whose result
//! the CLI re-encodes, and the table of reference values printed at startup.

use crate::error::{Error, Result};
use crate::FormatConfig;

/// `F(a, b) = 2ab / (a^2 + b^2)`.
///
/// Only the exact `0 / 0` case is rejected; overflow in the squares follows
/// ordinary float arithmetic.
pub fn combine(a: f64, b: f64) -> Result<f64> {
    if a == 0.0 && b == 0.0 {
        return Err(Error::InvalidArgument { a, b });
    }
    Ok((2.0 * a * b) / (a * a + b * b))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceValue {
    pub label: &'static str,
    pub value: f64,
}

/// Boundary and special values of the layout, as doubles. Values outside the
/// double range saturate the way `ldexp` does.
pub fn reference_values(config: &FormatConfig) -> Vec<ReferenceValue> {
    let bias = config.exponent_bias();
    let mantissa_bits = config.mantissa_bits() as i32;

    let min_nonzero = libm::ldexp(1.0, -bias - mantissa_bits + 1);
    let max_positive = libm::ldexp(1.0 - libm::ldexp(1.0, -mantissa_bits), bias);

    vec![
        ReferenceValue {
            label: "Minimum nonzero value",
            value: min_nonzero,
        },
        ReferenceValue {
            label: "Maximum positive value",
            value: max_positive,
        },
        ReferenceValue {
            label: "Minimum negative value",
            value: -max_positive,
        },
        ReferenceValue {
            label: "Value +1.0E0",
            value: 1.0,
        },
        ReferenceValue {
            label: "Value +inf",
            value: f64::INFINITY,
        },
        ReferenceValue {
            label: "Value -inf",
            value: f64::NEG_INFINITY,
        },
        // Same magnitude as the minimum nonzero value.
        ReferenceValue {
            label: "Subnormal value",
            value: min_nonzero,
        },
        ReferenceValue {
            label: "Value NaN",
            value: f64::NAN,
        },
    ]
}
