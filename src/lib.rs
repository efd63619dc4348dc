//! Showdown is a library for resolving five card poker showdowns.
//!
//! The core classifies a hand into one of the ten standard
//! categories with its tie-break keys, compares classified hands,
//! and resolves the winning seat or seats of a table. Around that
//! sit the driver pieces: parsing round lines of card tokens,
//! dealing shuffled rounds, and tallying wins per seat across many
//! independent rounds.
//!
//! Everything in the core is a pure function over immutable input;
//! the only mutable state is the tally the driver owns.
//!
//! # Examples
//!
//! Classify and compare two hands:
//!
//! ```
//! use showdown::core::{Category, Hand, HandOrdering};
//!
//! let first = Hand::new_from_str("AH KH QH JH TH").unwrap().classify();
//! let second = Hand::new_from_str("9H 8H 7H 6H 5H").unwrap().classify();
//!
//! assert_eq!(Category::RoyalFlush, first.category);
//! assert_eq!(HandOrdering::FirstWins, first.compare(&second));
//! ```
//!
//! Deal random rounds and tally the winners:
//!
//! ```
//! use showdown::core::Deck;
//! use showdown::table::{resolve_winners, WinTally};
//!
//! let mut tally = WinTally::new();
//! for _ in 0..100 {
//!     let mut deck = Deck::new();
//!     deck.shuffle(&mut rand::rng());
//!     let hands = deck.deal(4).unwrap();
//!     tally.record(&resolve_winners(&hands).unwrap());
//! }
//! assert_eq!(100, tally.rounds());
//! ```

/// The pure engine: cards, hands, classification and comparison.
pub mod core;
/// Table resolution and the round driver helpers.
pub mod table;
