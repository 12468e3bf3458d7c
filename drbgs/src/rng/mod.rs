//! Deterministic random bit generation
//!
//! Every generator implements the single-method [`Generator`] capability.
//! Everything else (unit-interval mapping, parallel substreams, rand_core
//! interop) is written against that capability only.
//!
//! CRITICAL: Same state → same future output. Two generators compare equal
//! exactly when their state words are equal.

pub mod interval;
mod jump;
pub mod splitmix;
pub mod xoroshiro128;
pub mod xoshiro256;

use thiserror::Error;

use crate::entropy::EntropyError;

/// Errors that can occur while seeding a generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The all-zero state is a fixed point of every XOR/shift generator
    #[error("Seed may not be zero")]
    AllZero,

    /// The entropy source failed before a seed could be read
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// A source of 64-bit pseudorandom words
///
/// Each call both advances the internal state and returns output.
pub trait Generator {
    /// Generate the next word in `[0, u64::MAX]`
    fn next(&mut self) -> u64;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    #[inline]
    fn next(&mut self) -> u64 {
        (**self).next()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    #[inline]
    fn next(&mut self) -> u64 {
        (**self).next()
    }
}

/// Generators able to skip ahead to a non-overlapping substream
pub trait Jump: Generator {
    /// Advance the state as if `next()` had been called a
    /// generator-specific, astronomically large number of times
    /// (2^64 for the xoroshiro128 family, 2^128 for xoshiro256).
    fn jump(&mut self);
}

/// Generators with a second, coarser jump for two-level stream schemes
pub trait LongJump: Jump {
    /// Advance the state by 2^96 (xoroshiro128) or 2^192 (xoshiro256) steps
    fn long_jump(&mut self);
}

/// Iterator over disjoint substreams produced by repeated [`Jump::jump`]
///
/// Yields the base generator, then the base jumped once, twice, and so on.
/// Each item is an owned clone that can be moved into its own thread.
///
/// # Example
/// ```
/// use drbgs::{streams, Generator, SplitMix64, Xoshiro256PlusPlus};
///
/// let base = Xoshiro256PlusPlus::from_generator(&mut SplitMix64::new(7));
/// let workers: Vec<_> = streams(base).take(4).collect();
/// assert_eq!(workers.len(), 4);
/// assert_ne!(workers[0], workers[1]);
/// ```
#[derive(Debug, Clone)]
pub struct Streams<G> {
    next: G,
}

/// Start a stream iterator at `base`
pub fn streams<G: Jump + Clone>(base: G) -> Streams<G> {
    Streams { next: base }
}

impl<G: Jump + Clone> Iterator for Streams<G> {
    type Item = G;

    fn next(&mut self) -> Option<G> {
        let item = self.next.clone();
        self.next.jump();
        Some(item)
    }
}

/// Iterator over starting points separated by [`LongJump::long_jump`]
///
/// The outer level of the two-level scheme: hand each item to a node, and
/// let each node split its item further with [`streams`].
#[derive(Debug, Clone)]
pub struct LongStreams<G> {
    next: G,
}

/// Start a long-jump stream iterator at `base`
pub fn long_streams<G: LongJump + Clone>(base: G) -> LongStreams<G> {
    LongStreams { next: base }
}

impl<G: LongJump + Clone> Iterator for LongStreams<G> {
    type Item = G;

    fn next(&mut self) -> Option<G> {
        let item = self.next.clone();
        self.next.long_jump();
        Some(item)
    }
}

/// Seeding constructors, checkpoint conversions and `rand_core` interop
/// shared by every XOR/shift generator with an `[u64; $n]` state.
///
/// The type must have a single `state: [u64; $n]` field and implement
/// [`Generator`].
macro_rules! impl_xor_seeding {
    ($name:ident, $n:literal) => {
        impl $name {
            /// Create a generator from an explicit, checked seed
            ///
            /// # Errors
            /// Returns [`SeedError::AllZero`](crate::rng::SeedError::AllZero)
            /// if every seed word is zero.
            pub fn try_new(seed: [u64; $n]) -> Result<Self, $crate::rng::SeedError> {
                if seed == [0u64; $n] {
                    return Err($crate::rng::SeedError::AllZero);
                }
                Ok(Self { state: seed })
            }

            /// Create a generator from an explicit seed
            ///
            /// # Panics
            /// Panics if every seed word is zero.
            pub fn new(seed: [u64; $n]) -> Self {
                assert!(seed != [0u64; $n], "Seed may not be zero");
                Self { state: seed }
            }

            /// Seed by drawing words from another generator, in state order
            ///
            /// This is the recommended way to expand a 64-bit seed: seed a
            /// [`SplitMix64`](crate::SplitMix64) and draw from it.
            ///
            /// # Panics
            /// Panics if every drawn word is zero.
            pub fn from_generator<G>(rng: &mut G) -> Self
            where
                G: $crate::rng::Generator + ?Sized,
            {
                let mut seed = [0u64; $n];
                for word in seed.iter_mut() {
                    *word = rng.next();
                }
                Self::new(seed)
            }

            /// Seed from an injected entropy source
            ///
            /// # Errors
            /// Fails if the source fails or yields an all-zero state.
            pub fn from_entropy_source<E>(source: &mut E) -> Result<Self, $crate::rng::SeedError>
            where
                E: $crate::entropy::EntropySource + ?Sized,
            {
                let seed = $crate::entropy::read_words::<E, $n>(source)?;
                Self::try_new(seed)
            }

            /// Seed from operating-system entropy
            ///
            /// Blocks while the OS pool is uninitialized.
            ///
            /// # Panics
            /// Panics if the OS entropy source is unavailable.
            #[cfg(feature = "os-entropy")]
            pub fn from_entropy() -> Self {
                match Self::from_entropy_source(&mut $crate::entropy::OsEntropy) {
                    Ok(rng) => {
                        log::debug!("seeded {} from OS entropy", stringify!($name));
                        rng
                    }
                    Err(e) => {
                        log::error!("failed to seed {} from OS entropy: {}", stringify!($name), e);
                        panic!("Unable to seed {} from OS entropy: {}", stringify!($name), e);
                    }
                }
            }

            /// Get current state (for checkpointing/replay)
            pub fn get_state(&self) -> [u64; $n] {
                self.state
            }
        }

        impl TryFrom<[u64; $n]> for $name {
            type Error = $crate::rng::SeedError;

            fn try_from(seed: [u64; $n]) -> Result<Self, Self::Error> {
                Self::try_new(seed)
            }
        }

        impl From<$name> for [u64; $n] {
            fn from(rng: $name) -> Self {
                rng.state
            }
        }

        $crate::rng::impl_rng_core!($name);
    };
}

/// `rand_core::RngCore` in terms of [`Generator::next`]
///
/// `next_u32` keeps the upper half of the word, which carries the
/// strongest bits for the "+" scramblers.
macro_rules! impl_rng_core {
    ($name:ident) => {
        impl rand_core::RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                ($crate::rng::Generator::next(self) >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $crate::rng::Generator::next(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    };
}

pub(crate) use impl_rng_core;
pub(crate) use impl_xor_seeding;
