//! xoshiro256++ (XOR/shift/rotate) random number generator
//!
//! All-purpose generator with a 256-bit state, large enough for any
//! parallel application. Passes all known statistical tests.
//!
//! # Algorithm
//!
//! ```text
//! result = rotl(s0 + s3, 23) + s0
//! t   = s1 << 17
//! s2 ^= s0;  s3 ^= s1;  s1 ^= s2;  s0 ^= s3
//! s2 ^= t
//! s3  = rotl(s3, 45)
//! ```
//!
//! The state must never be all zero.

use serde::{Deserialize, Serialize};

use super::jump::accumulate_jump;
use super::{impl_xor_seeding, Generator, Jump, LongJump};
use crate::core::rotate::Rotate;

/// xoshiro256++ 1.0 deterministic random bit generator
///
/// # Example
/// ```
/// use drbgs::{Generator, LongJump, Jump, Xoshiro256PlusPlus};
///
/// let mut rng = Xoshiro256PlusPlus::new([1, 2, 3, 4]);
/// assert_eq!(rng.next(), 41943041);
///
/// // Two-level split: one long jump per node, plain jumps per thread
/// let mut node = rng.clone();
/// node.long_jump();
/// let mut thread = node.clone();
/// thread.jump();
/// assert_ne!(node, thread);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct Xoshiro256PlusPlus {
    state: [u64; 4],
}

impl_xor_seeding!(Xoshiro256PlusPlus, 4);

impl Xoshiro256PlusPlus {
    fn apply_jump(&mut self, magic: &[u64; 4]) {
        self.state = accumulate_jump(self, magic, |g| g.state);
    }
}

impl Generator for Xoshiro256PlusPlus {
    #[inline]
    fn next(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[0].wrapping_add(s[3]).rotated_left(23).wrapping_add(s[0]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3].rotate_left_assign(45);

        result
    }
}

impl Jump for Xoshiro256PlusPlus {
    /// Equivalent to 2^128 calls to `next()`
    ///
    /// Generates up to 2^128 non-overlapping subsequences for parallel work.
    fn jump(&mut self) {
        const JUMP: [u64; 4] = [
            0x180e_c6d3_3cfd_0aba,
            0xd5a6_1266_f0c9_392c,
            0xa958_2618_e03f_c9aa,
            0x39ab_dc45_29b1_661c,
        ];
        self.apply_jump(&JUMP);
    }
}

impl LongJump for Xoshiro256PlusPlus {
    /// Equivalent to 2^192 calls to `next()`
    ///
    /// Generates 2^64 starting points, from each of which `jump()` yields
    /// 2^64 non-overlapping subsequences for distributed work.
    fn long_jump(&mut self) {
        const LONG_JUMP: [u64; 4] = [
            0x76e1_5d3e_fefd_cbbf,
            0xc500_4e44_1c52_2fb3,
            0x7771_0069_854e_e241,
            0x3910_9bb0_2acb_e635,
        ];
        self.apply_jump(&LONG_JUMP);
    }
}
