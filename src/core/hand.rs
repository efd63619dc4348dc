use crate::core::card::Card;
use crate::core::errors::HandError;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// How many cards make up a hand.
pub const HAND_SIZE: usize = 5;

/// A five card hand, in the order it was dealt.
///
/// The size is enforced at construction so everything downstream
/// can assume exactly five cards. Hands are never mutated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a new hand from exactly five cards.
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Create a hand from a slice, checking the size.
    ///
    /// # Examples
    /// ```
    /// use showdown::core::{Card, Hand, HandError};
    ///
    /// let cards: Vec<Card> = "AH KH QH".split(' ').map(|t| t.parse().unwrap()).collect();
    /// assert_eq!(Err(HandError::InvalidHandSize(3)), Hand::from_slice(&cards));
    /// ```
    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self { cards })
    }

    /// Create a hand from whitespace separated card tokens.
    ///
    /// # Examples
    /// ```
    /// use showdown::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AH KH QH JH TH").unwrap();
    /// assert_eq!(5, hand.iter().count());
    /// ```
    pub fn new_from_str(s: &str) -> Result<Self, HandError> {
        let cards = s
            .split_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::from_slice(&cards)
    }

    /// Iterate over the cards as dealt.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The cards as a slice.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
