use crate::core::card::{Card, SUITS, VALUES};
use crate::core::errors::DeckError;
use crate::core::hand::{Hand, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// A deck of the 52 cards, used to deal rounds for simulation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full ordered deck.
    pub fn new() -> Self {
        let cards = SUITS
            .iter()
            .flat_map(|&suit| VALUES.iter().map(move |&value| Card::new(value, suit)))
            .collect();
        Self { cards }
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// How many cards are left to deal.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal one five card hand per seat off the top of the deck.
    ///
    /// # Examples
    /// ```
    /// use showdown::core::Deck;
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut rand::rng());
    /// let hands = deck.deal(4).unwrap();
    /// assert_eq!(4, hands.len());
    /// assert_eq!(52 - 20, deck.len());
    /// ```
    pub fn deal(&mut self, seats: usize) -> Result<Vec<Hand>, DeckError> {
        if seats == 0 {
            return Err(DeckError::NoSeats);
        }
        // checked_mul so a huge seat count can't wrap past the
        // bounds check.
        let needed = seats
            .checked_mul(HAND_SIZE)
            .filter(|&needed| needed <= self.cards.len())
            .ok_or(DeckError::NotEnoughCards {
                seats,
                remaining: self.cards.len(),
            })?;

        let dealt: Vec<Card> = self.cards.drain(..needed).collect();
        let hands = dealt
            .chunks_exact(HAND_SIZE)
            .map(|chunk| {
                let cards: [Card; HAND_SIZE] =
                    chunk.try_into().expect("chunks_exact yields five cards");
                Hand::new(cards)
            })
            .collect();
        trace!(seats, remaining = self.cards.len(), "dealt round");
        Ok(hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_deck() {
        let deck = Deck::new();
        assert_eq!(52, deck.len());
        let unique: HashSet<Card> = Deck::new().cards.into_iter().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_deal_removes_cards() {
        let mut deck = Deck::new();
        deck.shuffle(&mut rand::rng());
        let hands = deck.deal(3).unwrap();
        assert_eq!(3, hands.len());
        assert_eq!(52 - 15, deck.len());

        // No card appears in two hands or stays in the deck.
        let mut seen: HashSet<Card> = deck.cards.iter().copied().collect();
        for hand in &hands {
            for card in hand.iter() {
                assert!(seen.insert(card), "card {} dealt twice", card);
            }
        }
        assert_eq!(52, seen.len());
    }

    #[test]
    fn test_deal_too_many_seats() {
        let mut deck = Deck::new();
        assert_eq!(
            Err(DeckError::NotEnoughCards {
                seats: 11,
                remaining: 52,
            }),
            deck.deal(11)
        );
    }

    #[test]
    fn test_deal_zero_seats() {
        let mut deck = Deck::new();
        assert_eq!(Err(DeckError::NoSeats), deck.deal(0));
    }

    #[test]
    fn test_deal_huge_seat_count() {
        // Large enough that seats * HAND_SIZE would wrap.
        let mut deck = Deck::new();
        assert_eq!(
            Err(DeckError::NotEnoughCards {
                seats: usize::MAX,
                remaining: 52,
            }),
            deck.deal(usize::MAX)
        );
        assert_eq!(52, deck.len());
    }

    #[test]
    fn test_deal_until_empty() {
        let mut deck = Deck::new();
        for _ in 0..2 {
            deck.deal(5).unwrap();
        }
        assert_eq!(2, deck.len());
        assert!(deck.deal(1).is_err());
    }
}
