//! DRBGs - Deterministic Random Bit Generators
//!
//! Small, fast, reproducible pseudorandom generators producing 64-bit words,
//! plus helpers mapping those words onto the unit interval.
//!
//! # Architecture
//!
//! - **core**: Bit rotation over fixed-width unsigned integers
//! - **rng**: The `Generator` capability, concrete generators, jump functions
//! - **entropy**: Injected entropy sources for unseeded construction
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. XOR/shift generators never hold the all-zero state
//! 3. Output is NOT cryptographically secure
//!
//! # Example
//! ```
//! use drbgs::{unit_double, Generator, SplitMix64, Xoshiro256PlusPlus};
//!
//! let mut seeder = SplitMix64::new(12345);
//! let mut rng = Xoshiro256PlusPlus::from_generator(&mut seeder);
//!
//! let word = rng.next();
//! let probability = unit_double(&mut rng);
//! assert!((0.0..1.0).contains(&probability));
//! # let _ = word;
//! ```

// Module declarations
pub mod core;
pub mod entropy;
pub mod rng;

// Re-exports for convenience
pub use crate::core::rotate::Rotate;
pub use entropy::{EntropyError, EntropySource};
pub use rng::{
    interval::{unit_double, unit_float},
    long_streams, streams,
    splitmix::SplitMix64,
    xoroshiro128::{Xoroshiro128Plus, Xoroshiro128PlusDrbg, Xoroshiro128PlusPlus},
    xoshiro256::Xoshiro256PlusPlus,
    Generator, Jump, LongJump, LongStreams, SeedError, Streams,
};

#[cfg(feature = "os-entropy")]
pub use entropy::OsEntropy;
