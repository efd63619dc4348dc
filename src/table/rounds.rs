use crate::core::{Card, Hand, TableError, HAND_SIZE};
use crate::table::resolve::SeatResult;
use std::str::FromStr;
use tracing::trace;

/// Parse one round line of card tokens into per seat hands.
///
/// The line holds every seat's cards in deal order, five per seat,
/// like `"9H 9D 5C 5S KD 8C 8H TC TS AD"`. A token count that isn't
/// a positive multiple of five is rejected outright rather than
/// sliced into short hands.
///
/// # Examples
/// ```
/// use showdown::table::parse_round;
///
/// let hands = parse_round("9H 9D 5C 5S KD 8C 8H TC TS AD").unwrap();
/// assert_eq!(2, hands.len());
/// ```
pub fn parse_round(line: &str) -> Result<Vec<Hand>, TableError> {
    let cards = line
        .split_whitespace()
        .map(Card::from_str)
        .collect::<Result<Vec<Card>, _>>()?;

    if cards.is_empty() || cards.len() % HAND_SIZE != 0 {
        return Err(TableError::InvalidRoundLength(cards.len()));
    }

    let hands = cards
        .chunks_exact(HAND_SIZE)
        .map(|chunk| {
            let cards: [Card; HAND_SIZE] =
                chunk.try_into().expect("chunks_exact yields five cards");
            Hand::new(cards)
        })
        .collect();
    Ok(hands)
}

/// Win counts per seat across many independent rounds.
///
/// Plain owned state for the driver to update after each round;
/// the classification core never sees it. A tied round counts as
/// a win for every tied seat.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct WinTally {
    wins: Vec<u64>,
    rounds: u64,
}

impl WinTally {
    /// A tally with no rounds recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round's winner set.
    pub fn record(&mut self, winners: &[SeatResult]) {
        for winner in winners {
            if winner.seat >= self.wins.len() {
                self.wins.resize(winner.seat + 1, 0);
            }
            self.wins[winner.seat] += 1;
        }
        self.rounds += 1;
        trace!(round = self.rounds, winners = winners.len(), "recorded round");
    }

    /// How many rounds this seat has won or tied.
    pub fn wins(&self, seat: usize) -> u64 {
        self.wins.get(seat).copied().unwrap_or(0)
    }

    /// How many rounds have been recorded.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }
}
