//! Entropy sources for unseeded construction
//!
//! Generators never touch the operating system themselves. Entropy-based
//! construction takes an [`EntropySource`], fills `N * 8` bytes, and decodes
//! them as little-endian words in state order. This keeps the algorithms
//! platform-independent and lets tests inject fixed bytes.

use thiserror::Error;

/// Errors raised by an entropy source
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntropyError {
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),
}

/// Anything able to fill a buffer with environment randomness
///
/// Closures of the shape `FnMut(&mut [u8]) -> Result<(), EntropyError>`
/// implement this trait, which is the usual way to inject bytes in tests.
///
/// # Example
/// ```
/// use drbgs::{EntropyError, Xoroshiro128PlusPlus};
///
/// let mut fixed = |dest: &mut [u8]| -> Result<(), EntropyError> {
///     dest.fill(0x5A);
///     Ok(())
/// };
/// let rng = Xoroshiro128PlusPlus::from_entropy_source(&mut fixed).unwrap();
/// assert_eq!(rng.get_state(), [0x5A5A_5A5A_5A5A_5A5A; 2]);
/// ```
pub trait EntropySource {
    /// Fill `dest` completely or fail
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<F> EntropySource for F
where
    F: FnMut(&mut [u8]) -> Result<(), EntropyError>,
{
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self(dest)
    }
}

/// Operating-system randomness via `getrandom`
///
/// Reads may block until the OS pool is initialized.
#[cfg(feature = "os-entropy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

#[cfg(feature = "os-entropy")]
impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        use rand_core::RngCore;

        rand_core::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Draw `N` little-endian words from `source`
pub(crate) fn read_words<E, const N: usize>(source: &mut E) -> Result<[u64; N], EntropyError>
where
    E: EntropySource + ?Sized,
{
    let mut words = [0u64; N];
    let mut buf = [0u8; 8];
    for word in words.iter_mut() {
        source.fill_bytes(&mut buf)?;
        *word = u64::from_le_bytes(buf);
    }
    Ok(words)
}
