// custom-float/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid floating-point literal: {input:?}")]
    Parse { input: String },

    #[error("both a ({a}) and b ({b}) are zero, division by zero")]
    InvalidArgument { a: f64, b: f64 },

    #[error(
        "invalid layout: {exponent_bits} exponent bits (1-16), {mantissa_bits} mantissa bits (1-32)"
    )]
    InvalidConfig {
        exponent_bits: u32,
        mantissa_bits: u32,
    },

    #[error("{value} is too large: biased exponent {exponent} exceeds the largest finite exponent")]
    ExponentOverflow { value: f64, exponent: i32 },

    #[error("{value} is too small: biased exponent {exponent} is below the smallest normal exponent")]
    ExponentUnderflow { value: f64, exponent: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
