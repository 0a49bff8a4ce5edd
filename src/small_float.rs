// custom-float/src/small_float.rs

// Field-level helpers shared by the encoder and the formatter. The custom
// layout stores its exponent in 16 bits and its mantissa in 32 bits, whatever
// widths the configuration asks for. Decomposition and scaling of doubles go
// through `libm::frexp` / `libm::ldexp`.

pub const EXPONENT_STORAGE_BITS: u32 = u16::BITS;
pub const MANTISSA_STORAGE_BITS: u32 = u32::BITS;

/// Biased exponent before it is narrowed into storage. `exp` follows the
/// `[0.5, 1.0)` convention of `frexp`, hence the `- 1`.
pub fn biased_exponent(exp: i32, bias: i32) -> i32 {
    exp + bias - 1
}

/// Narrows a biased exponent into its 16-bit storage. Out-of-range values
/// wrap modulo 2^16; nothing is clamped.
pub fn store_exponent(biased: i32) -> u16 {
    biased as u16
}

/// Explicit mantissa bits: the part of `frac` above the implicit 0.5,
/// scaled by `2^mantissa_bits` and truncated toward zero.
///
/// `frac - 0.5` is below 0.5, so the top stored bit is never set.
pub fn mantissa_from_fraction(frac: f64, mantissa_bits: u32) -> u32 {
    debug_assert!((0.5..1.0).contains(&frac));
    libm::ldexp(frac - 0.5, mantissa_bits as i32) as u32
}

/// All-ones mask for a field `bits` wide.
pub fn field_mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}
