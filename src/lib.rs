//! A 52-card French deck built on a length-and-index protocol, with optional
//! `no_std` support.
//!
//! [`FrenchDeck`] implements only [`Sequence`] (a length and a positional
//! read). Iteration, membership, slicing and random selection come from
//! generic functions over that trait, so they apply unchanged to any other
//! [`Sequence`] as well.
//!
//! # Example
//!
//! ```
//! use frenchdeck::{Card, FrenchDeck};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck.len(), 52);
//! assert_eq!(deck.get(0), Ok(Card::new("2", "spades")));
//! assert!(deck.contains(&Card::new("Q", "hearts")));
//!
//! let aces = deck.slice_step(12.., 13).unwrap();
//! assert!(aces.iter().all(|card| card.rank() == "A"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod demo;
pub mod error;
pub mod random;
pub mod sequence;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, SUITS};
pub use deck::FrenchDeck;
#[cfg(feature = "std")]
pub use demo::{DemoError, DemoOptions};
pub use error::{IndexError, SampleError, SliceError};
pub use random::{choice, sample};
pub use sequence::Sequence;
