//! Bitwise rotation over fixed-width unsigned integers
//!
//! Rotation is the mixing primitive of every xoroshiro/xoshiro generator.
//! The shift must lie strictly inside `(0, BITS)`: a shift of zero or of the
//! full width is undefined for the `(x << s) | (x >> (W - s))` formulation
//! and is rejected with a panic rather than silently reduced modulo the width.

/// Left and right bit rotation with a strict shift precondition
///
/// The in-place variants are named `*_assign` because the inherent
/// `rotate_left`/`rotate_right` on the primitive integers would otherwise
/// shadow them.
///
/// # Example
/// ```
/// use drbgs::Rotate;
///
/// let mut u: u32 = 0xABCD;
/// assert_eq!(u.rotated_left(16), 0xABCD0000);
///
/// u.rotate_right_assign(3);
/// assert_eq!(u, 0xA0001579);
/// ```
pub trait Rotate: Copy {
    /// Bit width of the type
    const BITS: u32;

    /// Returns `self` rotated left by `shift` bits
    ///
    /// # Panics
    /// Panics unless `0 < shift < Self::BITS`
    fn rotated_left(self, shift: u32) -> Self;

    /// Returns `self` rotated right by `shift` bits
    ///
    /// # Panics
    /// Panics unless `0 < shift < Self::BITS`
    fn rotated_right(self, shift: u32) -> Self;

    /// Rotates `self` left by `shift` bits in place
    ///
    /// # Panics
    /// Panics unless `0 < shift < Self::BITS`
    fn rotate_left_assign(&mut self, shift: u32) {
        *self = self.rotated_left(shift);
    }

    /// Rotates `self` right by `shift` bits in place
    ///
    /// # Panics
    /// Panics unless `0 < shift < Self::BITS`
    fn rotate_right_assign(&mut self, shift: u32) {
        *self = self.rotated_right(shift);
    }
}

macro_rules! impl_rotate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Rotate for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn rotated_left(self, shift: u32) -> Self {
                    check_shift(shift, Self::BITS);
                    (self << shift) | (self >> (Self::BITS - shift))
                }

                #[inline]
                fn rotated_right(self, shift: u32) -> Self {
                    check_shift(shift, Self::BITS);
                    (self >> shift) | (self << (Self::BITS - shift))
                }
            }
        )*
    };
}

impl_rotate!(u8, u16, u32, u64, u128, usize);

#[inline(always)]
fn check_shift(shift: u32, bits: u32) {
    assert!(
        shift > 0 && shift < bits,
        "rotation shift {} outside (0, {})",
        shift,
        bits
    );
}
