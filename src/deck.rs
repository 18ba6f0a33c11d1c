//! The 52-card French deck.

use alloc::vec::Vec;
use core::ops::RangeBounds;

use tracing::debug;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::{IndexError, SliceError};
use crate::sequence::{self, Iter, Reversed, Sequence};

/// A standard deck of 52 cards.
///
/// Cards are ordered by suit in [`SUITS`] order, and by rank in [`RANKS`]
/// order within each suit. The deck is read-only once built.
///
/// Only [`Sequence`] is implemented by hand. The other methods are thin
/// wrappers over the generic algorithms in [`crate::sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrenchDeck {
    cards: Vec<Card>,
}

impl FrenchDeck {
    /// Builds a new deck in suit-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::{Card, FrenchDeck};
    ///
    /// let deck = FrenchDeck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.get(-1), Ok(Card::new("A", "hearts")));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::from_static(rank, suit));
            }
        }

        debug!(cards = cards.len(), "built french deck");
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        Sequence::len(self)
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Sequence::is_empty(self)
    }

    /// Returns the card at `index`; negative positions count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] when `index` is outside `-52..52`.
    pub fn get(&self, index: isize) -> Result<Card, IndexError> {
        Sequence::get(self, index)
    }

    /// Returns the cards in `range`, clamped to the deck.
    #[must_use]
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> Vec<Card> {
        sequence::slice(self, range)
    }

    /// Returns every `step`-th card in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] when `step` is zero.
    pub fn slice_step<R: RangeBounds<isize>>(
        &self,
        range: R,
        step: isize,
    ) -> Result<Vec<Card>, SliceError> {
        sequence::slice_step(self, range, step)
    }

    /// Iterates over the cards front to back.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, Self> {
        sequence::iter(self)
    }

    /// Iterates over the cards back to front.
    #[must_use]
    pub fn reversed(&self) -> Reversed<'_, Self> {
        sequence::reversed(self)
    }

    /// Returns whether `card` is in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        sequence::contains(self, card)
    }

    /// Returns the position of `card`, if present.
    #[must_use]
    pub fn index_of(&self, card: &Card) -> Option<usize> {
        sequence::index_of(self, card)
    }
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for FrenchDeck {
    type Item = Card;

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn get(&self, index: isize) -> Result<Card, IndexError> {
        let position = sequence::resolve(index, self.cards.len())?;
        Ok(self.cards[position].clone())
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = Card;
    type IntoIter = Iter<'a, FrenchDeck>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
