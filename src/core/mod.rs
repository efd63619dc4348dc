/// Module with all the card and suit types.
mod card;
/// Export `Card`, `Suit`, `Value` and the full enumerations.
pub use self::card::{Card, Suit, Value, SUITS, VALUES};

/// Module for the five card `Hand` type.
mod hand;
/// Export `Hand` and the hand size.
pub use self::hand::{Hand, HAND_SIZE};

/// Module with the per hand statistics the classifier feeds on.
mod features;
/// Export `CardFeatures` and `RepeatPattern`.
pub use self::features::{CardFeatures, RepeatPattern};

/// Module that classifies and compares hands.
mod classify;
/// Export `Category`, `HandClass` and `HandOrdering`.
pub use self::classify::{Category, HandClass, HandOrdering};

/// Module for dealing shuffled rounds.
mod deck;
/// Export `Deck`.
pub use self::deck::Deck;

/// Module with all the error types.
mod errors;
/// Export the errors.
pub use self::errors::{CardParseError, DeckError, HandError, TableError};
