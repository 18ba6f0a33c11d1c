//! Card type and the shared rank and suit definitions.

use alloc::borrow::Cow;
use core::fmt;

/// Ranks of a French deck, lowest first.
pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Suits of a French deck, in deck order.
pub const SUITS: [&str; 4] = ["spades", "diamonds", "clubs", "hearts"];

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

/// A playing card.
///
/// Equality and hashing cover both the rank and the suit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Cow<'static, str>,
    suit: Cow<'static, str>,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate its arguments. Any rank or suit
    /// is accepted, not only the values in [`RANKS`] and [`SUITS`].
    #[must_use]
    pub fn new(rank: impl Into<Cow<'static, str>>, suit: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    /// Creates a card from static strings without allocating.
    #[must_use]
    pub const fn from_static(rank: &'static str, suit: &'static str) -> Self {
        Self {
            rank: Cow::Borrowed(rank),
            suit: Cow::Borrowed(suit),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank='{}', suit='{}')", self.rank, self.suit)
    }
}
