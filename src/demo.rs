//! The command-line walkthrough of the deck.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;

use crate::card::Card;
use crate::deck::FrenchDeck;
use crate::error::IndexError;
use crate::random::choice;

/// Errors that can occur while running the walkthrough.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    /// A card could not be read from the deck.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Configuration for [`run`].
///
/// ```
/// use frenchdeck::DemoOptions;
///
/// let options = DemoOptions::default().with_seed(42).with_picks(5);
/// assert_eq!(options.picks, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Seed for the random picks.
    pub seed: u64,
    /// Number of random picks to print.
    pub picks: usize,
    /// Card printed before the deck is built.
    pub sample_card: Card,
}

impl Default for DemoOptions {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self {
            seed,
            picks: 3,
            sample_card: Card::from_static("7", "diamonds"),
        }
    }
}

impl DemoOptions {
    /// Sets the seed for the random picks.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of random picks.
    #[must_use]
    pub const fn with_picks(mut self, picks: usize) -> Self {
        self.picks = picks;
        self
    }

    /// Sets the card printed first.
    #[must_use]
    pub fn with_sample_card(mut self, card: Card) -> Self {
        self.sample_card = card;
        self
    }
}

/// Prints a card, the deck size, the first and last cards and a few random
/// picks to `out`, one per line.
///
/// # Errors
///
/// Returns an error if writing fails or a card cannot be read.
pub fn run<W: Write>(options: &DemoOptions, out: &mut W) -> Result<(), DemoError> {
    info!(seed = options.seed, picks = options.picks, "starting walkthrough");

    writeln!(out, "{}", options.sample_card)?;

    let deck = FrenchDeck::new();
    writeln!(out, "{}", deck.len())?;
    writeln!(out, "{}", deck.get(0)?)?;
    writeln!(out, "{}", deck.get(-1)?)?;

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    for _ in 0..options.picks {
        writeln!(out, "{}", choice(&deck, &mut rng)?)?;
    }

    Ok(())
}
