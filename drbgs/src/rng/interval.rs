//! Mapping raw words onto the unit interval
//!
//! Both mappings keep the top bits of one word (exactly as many as the float
//! has mantissa bits, so the conversion is exact) and scale by a power of
//! two. The largest reachable value is `1 - 2^-53` (resp. `1 - 2^-24`), so
//! the result is always in `[0, 1)`.

use super::Generator;

/// 2^-53
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24
const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Generate an `f64` in `[0, 1)` from one word of `rng`
///
/// # Example
/// ```
/// use drbgs::{unit_double, SplitMix64};
///
/// let mut rng = SplitMix64::new(12345);
/// let probability = unit_double(&mut rng);
/// assert!(probability >= 0.0 && probability < 1.0);
/// ```
#[inline]
pub fn unit_double<G: Generator + ?Sized>(rng: &mut G) -> f64 {
    word_to_double(rng.next())
}

/// Generate an `f32` in `[0, 1)` from one word of `rng`
#[inline]
pub fn unit_float<G: Generator + ?Sized>(rng: &mut G) -> f32 {
    word_to_float(rng.next())
}

#[inline]
fn word_to_double(x: u64) -> f64 {
    (x >> 11) as f64 * DOUBLE_UNIT
}

#[inline]
fn word_to_float(x: u64) -> f32 {
    (x >> 40) as f32 * FLOAT_UNIT
}
