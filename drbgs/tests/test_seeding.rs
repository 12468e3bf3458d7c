//! Tests for the three seeding paths
//!
//! Explicit seeds, chained seeding from another generator, and injected
//! entropy. The OS source is only touched by the feature-gated tests.

use drbgs::{
    EntropyError, Generator, SeedError, SplitMix64, Xoroshiro128Plus, Xoroshiro128PlusDrbg,
    Xoroshiro128PlusPlus, Xoshiro256PlusPlus,
};

fn fixed_bytes(byte: u8) -> impl FnMut(&mut [u8]) -> Result<(), EntropyError> {
    move |dest: &mut [u8]| {
        dest.fill(byte);
        Ok(())
    }
}

fn unavailable(_dest: &mut [u8]) -> Result<(), EntropyError> {
    Err(EntropyError::Unavailable("device closed".to_string()))
}

#[test]
#[should_panic(expected = "Seed may not be zero")]
fn test_xoroshiro128plus_zero_seed_is_fatal() {
    Xoroshiro128Plus::new([0, 0]);
}

#[test]
#[should_panic(expected = "Seed may not be zero")]
fn test_xoroshiro128plusplus_zero_seed_is_fatal() {
    Xoroshiro128PlusPlus::new([0, 0]);
}

#[test]
#[should_panic(expected = "Seed may not be zero")]
fn test_drbg_zero_seed_is_fatal() {
    Xoroshiro128PlusDrbg::new([0, 0]);
}

#[test]
#[should_panic(expected = "Seed may not be zero")]
fn test_xoshiro256_zero_seed_is_fatal() {
    Xoshiro256PlusPlus::new([0, 0, 0, 0]);
}

#[test]
fn test_splitmix_zero_seed_recovers() {
    let mut rng = SplitMix64::new(0);
    assert_ne!(rng.next(), 0);
    assert_ne!(rng.get_state(), 0);
}

#[test]
fn test_try_new_reports_zero_seed() {
    assert_eq!(Xoroshiro128Plus::try_new([0, 0]), Err(SeedError::AllZero));
    assert_eq!(Xoshiro256PlusPlus::try_new([0; 4]), Err(SeedError::AllZero));
    assert_eq!(
        Xoroshiro128PlusPlus::try_from([0u64, 0]),
        Err(SeedError::AllZero)
    );
}

#[test]
fn test_single_nonzero_word_is_enough() {
    assert!(Xoshiro256PlusPlus::try_new([0, 0, 0, 1]).is_ok());
    assert!(Xoroshiro128PlusDrbg::try_new([1, 0]).is_ok());
}

/// Always draws zero
struct ZeroGenerator;

impl Generator for ZeroGenerator {
    fn next(&mut self) -> u64 {
        0
    }
}

#[test]
#[should_panic(expected = "Seed may not be zero")]
fn test_xoshiro256_zero_draws_are_fatal() {
    Xoshiro256PlusPlus::from_generator(&mut ZeroGenerator);
}

#[test]
#[should_panic(expected = "Seed may not be zero")]
fn test_xoroshiro128plusplus_zero_draws_are_fatal() {
    Xoroshiro128PlusPlus::from_generator(&mut ZeroGenerator);
}

#[test]
fn test_splitmix_accepts_zero_draw() {
    let rng = SplitMix64::from_generator(&mut ZeroGenerator);
    assert_eq!(rng, SplitMix64::new(0));
}

#[test]
fn test_from_generator_draws_in_state_order() {
    let mut seeder = SplitMix64::new(77);
    let mut reference = seeder.clone();
    let rng = Xoshiro256PlusPlus::from_generator(&mut seeder);

    let expected = [
        reference.next(),
        reference.next(),
        reference.next(),
        reference.next(),
    ];
    assert_eq!(rng.get_state(), expected);
    assert_eq!(seeder, reference, "Exactly four words should be drawn");
}

#[test]
fn test_from_generator_accepts_dyn() {
    let mut boxed: Box<dyn Generator> = Box::new(SplitMix64::new(5));
    let a = Xoroshiro128Plus::from_generator(&mut boxed);
    let b = Xoroshiro128Plus::from_generator(&mut SplitMix64::new(5));
    assert_eq!(a, b);
}

#[test]
fn test_generators_can_seed_each_other() {
    let mut parent = Xoshiro256PlusPlus::new([1, 2, 3, 4]);
    let child = Xoroshiro128PlusPlus::from_generator(&mut parent);
    assert_eq!(child.get_state(), [41943041, 58720359]);
}

#[test]
fn test_entropy_source_little_endian_words() {
    let rng = Xoroshiro128PlusPlus::from_entropy_source(&mut fixed_bytes(0x01)).unwrap();
    assert_eq!(rng.get_state(), [0x0101_0101_0101_0101; 2]);

    let sm = SplitMix64::from_entropy_source(&mut fixed_bytes(0xFF)).unwrap();
    assert_eq!(sm.get_state(), u64::MAX);
}

#[test]
fn test_entropy_source_failure_is_reported() {
    let result = Xoshiro256PlusPlus::from_entropy_source(&mut unavailable);
    assert_eq!(
        result,
        Err(SeedError::Entropy(EntropyError::Unavailable(
            "device closed".to_string()
        )))
    );

    let result = SplitMix64::from_entropy_source(&mut unavailable);
    assert!(matches!(result, Err(SeedError::Entropy(_))));
}

#[test]
fn test_zero_entropy_rejected_for_xor_generators() {
    let result = Xoroshiro128Plus::from_entropy_source(&mut fixed_bytes(0));
    assert_eq!(result, Err(SeedError::AllZero));

    // SplitMix64 accepts the zero state
    assert!(SplitMix64::from_entropy_source(&mut fixed_bytes(0)).is_ok());
}

#[cfg(feature = "os-entropy")]
mod os_entropy {
    use super::*;
    use drbgs::{EntropySource, OsEntropy};

    #[test]
    fn test_from_entropy_produces_distinct_generators() {
        let a = Xoshiro256PlusPlus::from_entropy();
        let b = Xoshiro256PlusPlus::from_entropy();
        assert_ne!(a, b, "Two OS-seeded generators should not collide");
    }

    #[test]
    fn test_every_generator_seeds_from_os() {
        let _ = SplitMix64::from_entropy();
        let _ = Xoroshiro128Plus::from_entropy();
        let _ = Xoroshiro128PlusPlus::from_entropy();
        let mut drbg = Xoroshiro128PlusDrbg::from_entropy();
        drbg.next();
    }

    #[test]
    fn test_os_entropy_as_injected_source() {
        let mut source = OsEntropy;
        let mut buf = [0u8; 16];
        source.fill_bytes(&mut buf).unwrap();
        assert!(Xoroshiro128Plus::from_entropy_source(&mut source).is_ok());
    }
}
