use crate::core::{Hand, HandClass, HandOrdering, TableError};
use tracing::debug;

/// A classified hand tagged with the seat that holds it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SeatResult {
    /// The seat index, position in the dealt sequence.
    pub seat: usize,
    /// The seat's classification.
    pub class: HandClass,
}

/// Find the winning seat or seats of one round.
///
/// Classifies each hand once and keeps a running winner set: a
/// strictly better hand replaces the set, a level hand joins it.
/// Winners come back in ascending seat order. An empty table is a
/// caller error.
///
/// # Examples
/// ```
/// use showdown::core::Hand;
/// use showdown::table::resolve_winners;
///
/// let hands = vec![
///     Hand::new_from_str("2H 3D 5S 9C KD").unwrap(),
///     Hand::new_from_str("2C 3H 4S 8C AH").unwrap(),
/// ];
/// let winners = resolve_winners(&hands).unwrap();
/// assert_eq!(vec![1], winners.iter().map(|w| w.seat).collect::<Vec<_>>());
/// ```
pub fn resolve_winners(hands: &[Hand]) -> Result<Vec<SeatResult>, TableError> {
    let (first, rest) = hands.split_first().ok_or(TableError::EmptyTable)?;

    let mut winners = vec![SeatResult {
        seat: 0,
        class: first.classify(),
    }];

    for (i, hand) in rest.iter().enumerate() {
        let class = hand.classify();
        match winners[0].class.compare(&class) {
            HandOrdering::SecondWins => {
                winners.clear();
                winners.push(SeatResult { seat: i + 1, class });
            }
            HandOrdering::Tie => winners.push(SeatResult { seat: i + 1, class }),
            HandOrdering::FirstWins => (),
        }
    }

    debug!(
        seats = hands.len(),
        winners = winners.len(),
        category = ?winners[0].class.category,
        "resolved table"
    );
    Ok(winners)
}
