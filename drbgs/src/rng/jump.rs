//! Shared jump-polynomial evaluation
//!
//! A jump is computed by scanning each magic word from its least to its most
//! significant bit. Whenever a bit is set, the generator's current state is
//! XOR-accumulated; after every bit, set or not, the generator steps once.
//! The accumulated words become the jumped state.
//!
//! The replay costs `64 * magic.len()` calls to `next()` and must be kept
//! as is: the magic constants are only meaningful for this exact procedure.

use super::Generator;

/// Evaluate a jump polynomial and return the landing state
///
/// `state_of` reads the generator's current state words. The caller stores
/// the returned words back into the generator.
pub(crate) fn accumulate_jump<G, F, const N: usize>(
    rng: &mut G,
    magic: &[u64; N],
    state_of: F,
) -> [u64; N]
where
    G: Generator,
    F: Fn(&G) -> [u64; N],
{
    let mut acc = [0u64; N];

    for &word in magic {
        for bit in 0..u64::BITS {
            if word & (1u64 << bit) != 0 {
                let current = state_of(rng);
                for (a, s) in acc.iter_mut().zip(current) {
                    *a ^= s;
                }
            }
            rng.next();
        }
    }

    acc
}
