//! Deck and sequence protocol integration tests.

use std::cell::Cell;
use std::collections::HashSet;
use std::hash::{BuildHasher, RandomState};

use frenchdeck::sequence::{self, Sequence};
use frenchdeck::{Card, DECK_SIZE, FrenchDeck, IndexError, RANKS, SUITS, SliceError};

fn card(rank: &'static str, suit: &'static str) -> Card {
    Card::new(rank, suit)
}

#[test]
fn card_equality_and_hash() {
    let a = card("7", "diamonds");
    let b = Card::new(String::from("7"), String::from("diamonds"));
    assert_eq!(a, b);

    let hasher = RandomState::new();
    assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));

    assert_ne!(a, card("8", "diamonds"));
    assert_ne!(a, card("7", "hearts"));
}

#[test]
fn card_accepts_any_rank_and_suit() {
    let joker = card("Joker", "none");
    assert_eq!(joker.rank(), "Joker");
    assert_eq!(joker.suit(), "none");
    assert!(!FrenchDeck::new().contains(&joker));
}

#[test]
fn card_display_shows_both_fields() {
    assert_eq!(
        card("7", "diamonds").to_string(),
        "Card(rank='7', suit='diamonds')"
    );
}

#[test]
fn deck_has_52_unique_cards() {
    let deck = FrenchDeck::new();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());

    let unique: HashSet<Card> = (0..52).map(|i| deck.get(i).unwrap()).collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn deck_order_is_suit_major() {
    let deck = FrenchDeck::new();
    assert_eq!(deck.get(0), Ok(card("2", "spades")));
    assert_eq!(deck.get(51), Ok(card("A", "hearts")));

    for (s, suit) in SUITS.into_iter().enumerate() {
        for (r, rank) in RANKS.into_iter().enumerate() {
            let index = isize::try_from(s * 13 + r).unwrap();
            assert_eq!(deck.get(index), Ok(card(rank, suit)));
        }
    }
}

#[test]
fn negative_indexing_counts_from_end() {
    let deck = FrenchDeck::new();
    assert_eq!(deck.get(-1), deck.get(51));
    assert_eq!(deck.get(-52), deck.get(0));
    assert_eq!(deck.get(-13), Ok(card("2", "hearts")));
}

#[test]
fn out_of_range_index_errors() {
    let deck = FrenchDeck::new();
    assert_eq!(
        deck.get(52).unwrap_err(),
        IndexError::OutOfRange { index: 52, len: 52 }
    );
    assert_eq!(
        deck.get(-53).unwrap_err(),
        IndexError::OutOfRange {
            index: -53,
            len: 52
        }
    );
    assert!(deck.get(isize::MIN).is_err());
    assert!(deck.get(isize::MAX).is_err());
}

#[test]
fn iteration_matches_indexing() {
    let deck = FrenchDeck::new();
    let cards: Vec<Card> = deck.iter().collect();
    assert_eq!(cards.len(), 52);
    for (i, c) in cards.iter().enumerate() {
        assert_eq!(deck.get(isize::try_from(i).unwrap()).as_ref(), Ok(c));
    }

    let mut count = 0;
    for c in &deck {
        assert!(deck.contains(&c));
        count += 1;
    }
    assert_eq!(count, 52);

    assert_eq!(sequence::to_vec(&deck), cards);
}

#[test]
fn iteration_is_fused_after_end() {
    let deck = FrenchDeck::new();
    let mut iter = deck.iter();
    assert_eq!(iter.by_ref().count(), 52);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn reversed_walks_back_to_front() {
    let deck = FrenchDeck::new();
    let backwards: Vec<Card> = deck.reversed().collect();
    let mut forwards: Vec<Card> = deck.iter().collect();
    forwards.reverse();
    assert_eq!(backwards, forwards);
    assert_eq!(backwards[0], card("A", "hearts"));
}

#[test]
fn membership_and_position() {
    let deck = FrenchDeck::new();
    assert!(deck.contains(&card("Q", "hearts")));
    assert!(!deck.contains(&card("7", "beasts")));
    assert_eq!(deck.index_of(&card("2", "diamonds")), Some(13));
    assert_eq!(deck.index_of(&card("1", "spades")), None);
}

#[test]
fn slice_first_thirteen_is_spades() {
    let deck = FrenchDeck::new();
    let spades = deck.slice(0..13);
    assert_eq!(spades.len(), 13);
    for (c, rank) in spades.iter().zip(RANKS) {
        assert_eq!(c, &card(rank, "spades"));
    }
}

#[test]
fn slice_clamps_and_handles_negatives() {
    let deck = FrenchDeck::new();
    assert!(deck.slice(5..5).is_empty());
    assert!(deck.slice(10..3).is_empty());
    assert!(deck.slice(60..70).is_empty());
    assert_eq!(deck.slice(50..100).len(), 2);
    assert_eq!(deck.slice(-100..2).len(), 2);
    assert_eq!(deck.slice(..).len(), 52);

    let hearts = deck.slice(-13..);
    assert_eq!(hearts.len(), 13);
    assert!(hearts.iter().all(|c| c.suit() == "hearts"));

    assert_eq!(deck.slice(-1..=-1), vec![card("A", "hearts")]);
    assert_eq!(deck.slice(..=1), vec![card("2", "spades"), card("3", "spades")]);
}

#[test]
fn slice_step_picks_aces_and_reverses() {
    let deck = FrenchDeck::new();
    let aces = deck.slice_step(12.., 13).unwrap();
    assert_eq!(
        aces,
        SUITS.into_iter().map(|suit| card("A", suit)).collect::<Vec<_>>()
    );

    let backwards = deck.slice_step(.., -1).unwrap();
    assert_eq!(backwards, deck.reversed().collect::<Vec<_>>());

    let tail = deck.slice_step(3..0, -1).unwrap();
    assert_eq!(
        tail,
        vec![card("5", "spades"), card("4", "spades"), card("3", "spades")]
    );

    assert_eq!(deck.slice_step(.., 0).unwrap_err(), SliceError::ZeroStep);
}

#[test]
fn generic_algorithms_work_on_plain_sequences() {
    let numbers = vec![3, 1, 4, 1, 5];
    assert_eq!(Sequence::len(&numbers), 5);
    assert_eq!(Sequence::get(&numbers, -1), Ok(5));
    assert!(sequence::contains(&numbers, &4));
    assert_eq!(sequence::index_of(&numbers, &1), Some(1));
    assert_eq!(sequence::slice(&numbers, 1..3), vec![1, 4]);

    let letters = ['a', 'b', 'c'];
    assert_eq!(sequence::reversed(&letters).collect::<String>(), "cba");

    let empty: &[u8] = &[];
    assert!(Sequence::is_empty(empty));
    assert_eq!(sequence::iter(empty).next(), None);
    assert!(sequence::slice_step(empty, .., -1).unwrap().is_empty());
}

/// A sequence that records how often it is read.
struct Counting {
    len: usize,
    reads: Cell<usize>,
}

impl Sequence for Counting {
    type Item = usize;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: isize) -> Result<usize, IndexError> {
        self.reads.set(self.reads.get() + 1);
        sequence::resolve(index, self.len).map(|position| position * 10)
    }
}

#[test]
fn iteration_reads_until_first_out_of_range() {
    let seq = Counting {
        len: 4,
        reads: Cell::new(0),
    };
    let items: Vec<usize> = sequence::iter(&seq).collect();
    assert_eq!(items, vec![0, 10, 20, 30]);
    // Four hits and the read that ends the traversal.
    assert_eq!(seq.reads.get(), 5);

    seq.reads.set(0);
    assert!(sequence::contains(&seq, &10));
    assert_eq!(seq.reads.get(), 2);
}
