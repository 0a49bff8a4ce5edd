// custom-float/src/lib.rs

//! Encodes IEEE-754 doubles into a floating-point layout whose exponent and
//! mantissa widths are chosen at construction time.
//!
//! The layout follows IEEE-754 conventions: an excess-bias exponent, an
//! implicit leading bit and an all-ones exponent reserved for infinities and
//! NaN.

use log::{debug, warn};

pub mod ext;
pub mod format;
pub mod parse;

mod error;
mod small_float;

pub use error::{Error, Result};
pub use ext::{combine, reference_values, ReferenceValue};
pub use format::Layout;
pub use parse::{parse_decimal, to_decimal_string};

pub const DEFAULT_EXPONENT_BITS: u32 = 15;
pub const DEFAULT_MANTISSA_BITS: u32 = 24;

pub const EXPONENT_BITS_ENV: &str = "CUSTOM_FLOAT_EXPONENT_BITS";
pub const MANTISSA_BITS_ENV: &str = "CUSTOM_FLOAT_MANTISSA_BITS";

/// Field widths of the custom layout. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatConfig {
    exponent_bits: u32,
    mantissa_bits: u32,
}

impl FormatConfig {
    /// Smallest exponent of a normalized value; zero is reserved for zeros
    /// and denormals.
    pub const MIN_NORMAL_EXPONENT: u16 = 1;

    pub fn new(exponent_bits: u32, mantissa_bits: u32) -> Result<Self> {
        let exponent_ok = (1..=small_float::EXPONENT_STORAGE_BITS).contains(&exponent_bits);
        let mantissa_ok = (1..=small_float::MANTISSA_STORAGE_BITS).contains(&mantissa_bits);
        if !exponent_ok || !mantissa_ok {
            return Err(Error::InvalidConfig {
                exponent_bits,
                mantissa_bits,
            });
        }
        Ok(Self {
            exponent_bits,
            mantissa_bits,
        })
    }

    /// Default widths, overridden by `CUSTOM_FLOAT_EXPONENT_BITS` and
    /// `CUSTOM_FLOAT_MANTISSA_BITS` when they are set.
    pub fn from_env() -> Result<Self> {
        let exponent_bits = env_bits(EXPONENT_BITS_ENV).unwrap_or(DEFAULT_EXPONENT_BITS);
        let mantissa_bits = env_bits(MANTISSA_BITS_ENV).unwrap_or(DEFAULT_MANTISSA_BITS);
        Self::new(exponent_bits, mantissa_bits)
    }

    pub fn exponent_bits(&self) -> u32 {
        self.exponent_bits
    }

    pub fn mantissa_bits(&self) -> u32 {
        self.mantissa_bits
    }

    /// `2^(H-1) - 1`
    pub fn exponent_bias(&self) -> i32 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    /// The all-ones exponent, reserved for infinities and NaN.
    pub fn max_exponent(&self) -> u16 {
        small_float::field_mask(self.exponent_bits) as u16
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            exponent_bits: DEFAULT_EXPONENT_BITS,
            mantissa_bits: DEFAULT_MANTISSA_BITS,
        }
    }
}

fn env_bits(name: &str) -> Option<u32> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(bits) => Some(bits),
        Err(_) => {
            warn!("ignoring {}={:?}: not a bit width", name, raw);
            None
        }
    }
}

/// Result of encoding one double. Fields hold the stored values; the exponent
/// is not masked to the configured width (see [`Encoder::encode`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedFloat {
    pub sign: bool,
    pub exponent: u16,
    pub mantissa: u32,
}

impl EncodedFloat {
    pub fn is_nan(&self, config: &FormatConfig) -> bool {
        self.exponent == config.max_exponent() && self.mantissa != 0
    }

    pub fn is_infinite(&self, config: &FormatConfig) -> bool {
        self.exponent == config.max_exponent() && self.mantissa == 0
    }

    pub fn is_zero(&self) -> bool {
        self.exponent == 0 && self.mantissa == 0
    }

    pub fn is_denormal_category(&self) -> bool {
        self.exponent == 0 && self.mantissa != 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoder {
    config: FormatConfig,
    bias: i32,
}

impl Encoder {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            bias: config.exponent_bias(),
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn bias(&self) -> i32 {
        self.bias
    }

    /// Encodes any double. Never fails.
    ///
    /// The mantissa is truncated, not rounded. A magnitude whose biased
    /// exponent does not fit the configured width is not clamped: the
    /// exponent is stored modulo 2^16, exactly as computed.
    pub fn encode(&self, value: f64) -> EncodedFloat {
        match self.encode_special(value) {
            Some(encoded) => encoded,
            None => {
                let (encoded, biased) = self.encode_finite(value);
                if !self.in_normal_range(biased) {
                    warn!(
                        "{} needs biased exponent {}, storing {} ({} exponent bits)",
                        value, biased, encoded.exponent, self.config.exponent_bits
                    );
                }
                encoded
            }
        }
    }

    /// Like [`Encoder::encode`], but rejects finite nonzero values whose
    /// biased exponent falls outside `[1, 2^H - 2]`.
    pub fn encode_checked(&self, value: f64) -> Result<EncodedFloat> {
        if let Some(encoded) = self.encode_special(value) {
            return Ok(encoded);
        }

        let (encoded, biased) = self.encode_finite(value);
        if biased >= i32::from(self.config.max_exponent()) {
            return Err(Error::ExponentOverflow {
                value,
                exponent: biased,
            });
        }
        if biased < i32::from(FormatConfig::MIN_NORMAL_EXPONENT) {
            return Err(Error::ExponentUnderflow {
                value,
                exponent: biased,
            });
        }
        Ok(encoded)
    }

    // NaN, infinities and zeros, in that order.
    fn encode_special(&self, value: f64) -> Option<EncodedFloat> {
        let encoded = if value.is_nan() {
            EncodedFloat {
                sign: false,
                exponent: self.config.max_exponent(),
                mantissa: 1,
            }
        } else if value.is_infinite() {
            EncodedFloat {
                sign: value.is_sign_negative(),
                exponent: self.config.max_exponent(),
                mantissa: 0,
            }
        } else if value == 0.0 {
            EncodedFloat {
                sign: value.is_sign_negative(),
                exponent: 0,
                mantissa: 0,
            }
        } else {
            return None;
        };
        debug!("encode({}) -> special {:?}", value, encoded);
        Some(encoded)
    }

    fn encode_finite(&self, value: f64) -> (EncodedFloat, i32) {
        let (frac, exp) = libm::frexp(value.abs());
        let biased = small_float::biased_exponent(exp, self.bias);
        let encoded = EncodedFloat {
            sign: value.is_sign_negative(),
            exponent: small_float::store_exponent(biased),
            mantissa: small_float::mantissa_from_fraction(frac, self.config.mantissa_bits),
        };
        debug!(
            "encode({}): frac={} exp={} biased={} -> {:?}",
            value, frac, exp, biased, encoded
        );
        (encoded, biased)
    }

    fn in_normal_range(&self, biased: i32) -> bool {
        biased >= i32::from(FormatConfig::MIN_NORMAL_EXPONENT)
            && biased < i32::from(self.config.max_exponent())
    }

    /// Display adapter for `encoded` under this encoder's widths.
    pub fn layout<'a>(&'a self, encoded: &'a EncodedFloat) -> Layout<'a> {
        Layout::new(&self.config, encoded)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}
