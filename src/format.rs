// custom-float/src/format.rs

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::small_float;
use crate::{EncodedFloat, FormatConfig};

/// Renders an [`EncodedFloat`] as
///
/// ```text
/// Sign: 0
/// Exponent: 011111111111111 (Decimal: 16383)
/// Mantissa: 000000000000000000000000
/// ```
///
/// The binary strings carry exactly the configured number of digits, taken
/// from the low bits of each field. The decimal exponent is the stored value.
pub struct Layout<'a> {
    config: &'a FormatConfig,
    encoded: &'a EncodedFloat,
}

impl<'a> Layout<'a> {
    pub fn new(config: &'a FormatConfig, encoded: &'a EncodedFloat) -> Self {
        Self { config, encoded }
    }

    pub fn sign_bit(&self) -> char {
        if self.encoded.sign {
            '1'
        } else {
            '0'
        }
    }

    pub fn exponent_bits(&self) -> String {
        binary_field(u64::from(self.encoded.exponent), self.config.exponent_bits())
    }

    pub fn mantissa_bits(&self) -> String {
        binary_field(u64::from(self.encoded.mantissa), self.config.mantissa_bits())
    }
}

fn binary_field(value: u64, bits: u32) -> String {
    format!(
        "{:0width$b}",
        value & small_float::field_mask(bits),
        width = bits as usize
    )
}

impl Display for Layout<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Sign: {}", self.sign_bit())?;
        writeln!(
            f,
            "Exponent: {} (Decimal: {})",
            self.exponent_bits(),
            self.encoded.exponent
        )?;
        write!(f, "Mantissa: {}", self.mantissa_bits())
    }
}
