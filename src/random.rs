//! Random selection over any [`Sequence`].

use alloc::vec::Vec;

use rand::Rng;
use tracing::trace;

use crate::error::{IndexError, SampleError};
use crate::sequence::Sequence;

/// Picks one element of `seq` uniformly at random.
///
/// Draws a position in `0..len` and reads it with [`Sequence::get`], so this
/// works for any type that reports a length and supports positional reads.
///
/// # Errors
///
/// Returns [`IndexError::OutOfRange`] when `seq` is empty.
///
/// # Example
///
/// ```
/// use frenchdeck::{FrenchDeck, choice};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let deck = FrenchDeck::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let card = choice(&deck, &mut rng).unwrap();
/// assert!(deck.contains(&card));
/// ```
pub fn choice<S, R>(seq: &S, rng: &mut R) -> Result<S::Item, IndexError>
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    let len = seq.len();
    if len == 0 {
        return Err(IndexError::OutOfRange { index: 0, len });
    }

    let position = rng.random_range(0..len);
    trace!(position, len, "picked random position");

    let index = isize::try_from(position).map_err(|_| IndexError::OutOfRange {
        index: isize::MAX,
        len,
    })?;
    seq.get(index)
}

/// Picks `amount` elements at distinct positions, uniformly at random.
///
/// # Errors
///
/// Returns [`SampleError::TooLarge`] when `amount` exceeds the length.
pub fn sample<S, R>(seq: &S, amount: usize, rng: &mut R) -> Result<Vec<S::Item>, SampleError>
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    let len = seq.len();
    if amount > len {
        return Err(SampleError::TooLarge {
            requested: amount,
            len,
        });
    }

    rand::seq::index::sample(rng, len, amount)
        .into_iter()
        .map(|position| -> Result<S::Item, SampleError> {
            let index = isize::try_from(position).map_err(|_| IndexError::OutOfRange {
                index: isize::MAX,
                len,
            })?;
            Ok(seq.get(index)?)
        })
        .collect()
}
