//! xoroshiro128 (XOR/rotate/shift/rotate) random number generators
//!
//! Three generators share a two-word state and the same mixing shape
//!
//! ```text
//! x  = s0 ^ s1
//! s0 = rotl(s0, a) ^ x ^ (x << b)
//! s1 = rotl(x, c)
//! ```
//!
//! but differ in their constants and output scrambler:
//!
//! | Generator              | Output                    | (a, b, c)    |
//! |------------------------|---------------------------|--------------|
//! | `Xoroshiro128Plus`     | `s0 + s1`                 | (24, 16, 37) |
//! | `Xoroshiro128PlusPlus` | `rotl(s0 + s1, 17) + s0`  | (49, 21, 28) |
//! | `Xoroshiro128PlusDrbg` | `s0 + s1`                 | (55, 14, 36) |
//!
//! `Xoroshiro128PlusDrbg` is the original 2016 xoroshiro128+. It is kept as a
//! distinct type because its stream is not bit-compatible with the 2018
//! revision in `Xoroshiro128Plus`; mixing the two would silently combine
//! non-interchangeable sequences.
//!
//! The state must never be all zero. For a 64-bit seed, seed a
//! [`SplitMix64`](crate::SplitMix64) and use
//! [`from_generator`](Xoroshiro128PlusPlus::from_generator).
//!
//! See <https://prng.di.unimi.it>.

use serde::{Deserialize, Serialize};

use super::jump::accumulate_jump;
use super::{impl_xor_seeding, Generator, Jump, LongJump};
use crate::core::rotate::Rotate;

// ============================================================================
// xoroshiro128+ (2018)
// ============================================================================

/// xoroshiro128+ 1.0 deterministic random bit generator
///
/// The fastest small-state generator here for floating-point output. Its
/// four lowest bits fail linearity tests, so prefer the upper bits (as
/// [`unit_double`](crate::unit_double) does).
///
/// # Example
/// ```
/// use drbgs::{Generator, Xoroshiro128Plus};
///
/// let mut rng = Xoroshiro128Plus::new([1, 2]);
/// assert_eq!(rng.next(), 3);
/// assert_eq!(rng.next(), 412333834243);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 2]", into = "[u64; 2]")]
pub struct Xoroshiro128Plus {
    state: [u64; 2],
}

impl_xor_seeding!(Xoroshiro128Plus, 2);

impl Xoroshiro128Plus {
    fn apply_jump(&mut self, magic: &[u64; 2]) {
        self.state = accumulate_jump(self, magic, |g| g.state);
    }
}

impl Generator for Xoroshiro128Plus {
    #[inline]
    fn next(&mut self) -> u64 {
        let [s0, mut s1] = self.state;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotated_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotated_left(37);

        result
    }
}

impl Jump for Xoroshiro128Plus {
    /// Equivalent to 2^64 calls to `next()`
    ///
    /// Generates up to 2^64 non-overlapping subsequences for parallel work.
    fn jump(&mut self) {
        const JUMP: [u64; 2] = [0xdf90_0294_d8f5_54a5, 0x1708_65df_4b32_01fc];
        self.apply_jump(&JUMP);
    }
}

impl LongJump for Xoroshiro128Plus {
    /// Equivalent to 2^96 calls to `next()`
    ///
    /// Generates 2^32 starting points, from each of which `jump()` yields
    /// 2^32 non-overlapping subsequences for distributed work.
    fn long_jump(&mut self) {
        const LONG_JUMP: [u64; 2] = [0xd2a9_8b26_625e_ee7b, 0xdddf_9b10_90aa_7ac1];
        self.apply_jump(&LONG_JUMP);
    }
}

// ============================================================================
// xoroshiro128++
// ============================================================================

/// xoroshiro128++ 1.0 deterministic random bit generator
///
/// All-purpose small-state generator; passes all known tests.
///
/// # Example
/// ```
/// use drbgs::{Generator, Xoroshiro128PlusPlus};
///
/// let mut rng = Xoroshiro128PlusPlus::new([u64::MAX, u64::MAX]);
/// assert_eq!(rng.next(), 18446744073709420542);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 2]", into = "[u64; 2]")]
pub struct Xoroshiro128PlusPlus {
    state: [u64; 2],
}

impl_xor_seeding!(Xoroshiro128PlusPlus, 2);

impl Xoroshiro128PlusPlus {
    fn apply_jump(&mut self, magic: &[u64; 2]) {
        self.state = accumulate_jump(self, magic, |g| g.state);
    }
}

impl Generator for Xoroshiro128PlusPlus {
    #[inline]
    fn next(&mut self) -> u64 {
        let [s0, mut s1] = self.state;
        let result = s0.wrapping_add(s1).rotated_left(17).wrapping_add(s0);

        s1 ^= s0;
        self.state[0] = s0.rotated_left(49) ^ s1 ^ (s1 << 21);
        self.state[1] = s1.rotated_left(28);

        result
    }
}

impl Jump for Xoroshiro128PlusPlus {
    /// Equivalent to 2^64 calls to `next()`
    fn jump(&mut self) {
        const JUMP: [u64; 2] = [0x2bd7_a6a6_e99c_2ddc, 0x0992_ccaf_6a6f_ca05];
        self.apply_jump(&JUMP);
    }
}

impl LongJump for Xoroshiro128PlusPlus {
    /// Equivalent to 2^96 calls to `next()`
    fn long_jump(&mut self) {
        const LONG_JUMP: [u64; 2] = [0x360f_d5f2_cf8d_5d99, 0x9c6e_6877_736c_46e3];
        self.apply_jump(&LONG_JUMP);
    }
}

// ============================================================================
// xoroshiro128+ (2016)
// ============================================================================

/// Original (2016) xoroshiro128+ deterministic random bit generator
///
/// Same output rule as [`Xoroshiro128Plus`] with the 2016 constants
/// (55, 14, 36). Only `jump()` is published for this revision.
///
/// # Example
/// ```
/// use drbgs::{Generator, Xoroshiro128Plus, Xoroshiro128PlusDrbg};
///
/// let mut old = Xoroshiro128PlusDrbg::new([1, 2]);
/// let mut new = Xoroshiro128Plus::new([1, 2]);
///
/// // Same first output, different streams afterwards
/// assert_eq!(old.next(), new.next());
/// assert_ne!(old.next(), new.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 2]", into = "[u64; 2]")]
pub struct Xoroshiro128PlusDrbg {
    state: [u64; 2],
}

impl_xor_seeding!(Xoroshiro128PlusDrbg, 2);

impl Xoroshiro128PlusDrbg {
    fn apply_jump(&mut self, magic: &[u64; 2]) {
        self.state = accumulate_jump(self, magic, |g| g.state);
    }
}

impl Generator for Xoroshiro128PlusDrbg {
    #[inline]
    fn next(&mut self) -> u64 {
        let [s0, s1] = self.state;
        let result = s0.wrapping_add(s1);

        let x = s0 ^ s1;
        self.state[0] = s0.rotated_left(55) ^ x ^ (x << 14);
        self.state[1] = x.rotated_left(36);

        result
    }
}

impl Jump for Xoroshiro128PlusDrbg {
    /// Equivalent to 2^64 calls to `next()`
    fn jump(&mut self) {
        const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];
        self.apply_jump(&JUMP);
    }
}
