//! splitmix64 random number generator
//!
//! A fixed-increment Weyl sequence passed through a 64-bit mixing function.
//! Its main use here is seed expansion: seed a `SplitMix64` from a single
//! `u64`, then draw from it to fill the wider state of the other generators.
//!
//! # Algorithm
//!
//! ```text
//! state += 0x9e3779b97f4a7c15
//! z = state
//! z = (z ^ (z >> 30)) * 0xbf58476d1ce4e5b9
//! z = (z ^ (z >> 27)) * 0x94d049bb133111eb
//! return z ^ (z >> 31)
//! ```
//!
//! All arithmetic wraps. Because the update is additive, the zero state is
//! valid and there is no jump function.

use serde::{Deserialize, Serialize};

use super::{impl_rng_core, Generator, SeedError};
use crate::entropy::{read_words, EntropySource};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// splitmix64 deterministic random bit generator
///
/// # Example
/// ```
/// use drbgs::{Generator, SplitMix64};
///
/// let mut rng = SplitMix64::new(u64::MAX);
/// assert_eq!(rng.next(), 16490336266968443936);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitMix64 {
    /// Internal state (64-bit), any value allowed
    state: u64,
}

impl SplitMix64 {
    /// Create a new generator with the given seed
    ///
    /// Zero is a valid seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed by drawing one word from another generator
    pub fn from_generator<G>(rng: &mut G) -> Self
    where
        G: Generator + ?Sized,
    {
        Self::new(rng.next())
    }

    /// Seed from an injected entropy source
    ///
    /// # Errors
    /// Fails only if the source fails.
    pub fn from_entropy_source<E>(source: &mut E) -> Result<Self, SeedError>
    where
        E: EntropySource + ?Sized,
    {
        let [seed] = read_words::<E, 1>(source)?;
        Ok(Self::new(seed))
    }

    /// Seed from operating-system entropy
    ///
    /// # Panics
    /// Panics if the OS entropy source is unavailable.
    #[cfg(feature = "os-entropy")]
    pub fn from_entropy() -> Self {
        match Self::from_entropy_source(&mut crate::entropy::OsEntropy) {
            Ok(rng) => {
                log::debug!("seeded SplitMix64 from OS entropy");
                rng
            }
            Err(e) => {
                log::error!("failed to seed SplitMix64 from OS entropy: {}", e);
                panic!("Unable to seed SplitMix64 from OS entropy: {}", e);
            }
        }
    }

    /// Get current state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use drbgs::{Generator, SplitMix64};
    ///
    /// let mut rng = SplitMix64::new(12345);
    /// rng.next();
    ///
    /// let mut replay = SplitMix64::new(rng.get_state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl Generator for SplitMix64 {
    #[inline]
    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl From<u64> for SplitMix64 {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<SplitMix64> for u64 {
    fn from(rng: SplitMix64) -> Self {
        rng.state
    }
}

impl_rng_core!(SplitMix64);
