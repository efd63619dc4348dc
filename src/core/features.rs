use crate::core::card::{Suit, Value, SUITS, VALUES};
use crate::core::hand::{Hand, HAND_SIZE};

/// Per hand card statistics: the sorted values, how often each
/// value appears, and how often each suit appears.
///
/// Everything the classifier needs is derived from this one pass
/// over the hand.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CardFeatures {
    /// The five card values sorted descending, duplicates kept.
    values: [Value; HAND_SIZE],
    /// Count per value, indexed by numeric rank.
    value_counts: [u8; 15],
    /// Count per suit, indexed by suit discriminant.
    suit_counts: [u8; 4],
}

impl CardFeatures {
    /// Extract the features of a hand.
    pub fn extract(hand: &Hand) -> Self {
        let mut values = *hand.cards();
        let mut value_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];

        for c in hand.iter() {
            value_counts[c.value.rank() as usize] += 1;
            suit_counts[c.suit as usize] += 1;
        }

        values.sort_unstable_by(|a, b| b.value.cmp(&a.value));
        let values = values.map(|c| c.value);

        Self {
            values,
            value_counts,
            suit_counts,
        }
    }

    /// The five card values sorted descending.
    pub fn values(&self) -> &[Value; HAND_SIZE] {
        &self.values
    }

    /// How many cards in the hand have this value.
    pub fn value_count(&self, value: Value) -> u8 {
        self.value_counts[value.rank() as usize]
    }

    /// How many cards in the hand have this suit.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit as usize]
    }

    /// True if all five cards share one suit.
    pub fn is_flush(&self) -> bool {
        SUITS
            .iter()
            .any(|&s| self.suit_counts[s as usize] as usize == HAND_SIZE)
    }

    /// True if the five values form a strictly consecutive
    /// descending run.
    ///
    /// Values are compared on their raw ranks with the ace fixed
    /// high, so the wheel (A-5-4-3-2) is not a sequence here.
    pub fn is_sequence(&self) -> bool {
        self.values.windows(2).all(|w| w[0].gap(w[1]) == 1)
    }
}

/// The pairing structure of a hand, derived from the value counts.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RepeatPattern {
    /// Values appearing exactly twice. Holds zero, one, or two
    /// entries; no ordering is promised between them.
    pub pairs: Vec<Value>,
    /// The value appearing exactly three times, if any.
    pub triple: Option<Value>,
    /// The value appearing exactly four times, if any.
    pub quad: Option<Value>,
}

impl RepeatPattern {
    /// Read the repeats out of the value counts.
    ///
    /// Five cards can't hold two quads or two triples so a simple
    /// last-write for those is enough.
    pub fn from_features(features: &CardFeatures) -> Self {
        let mut pattern = RepeatPattern::default();
        for &value in VALUES.iter() {
            match features.value_count(value) {
                4 => pattern.quad = Some(value),
                3 => pattern.triple = Some(value),
                2 => pattern.pairs.push(value),
                _ => (),
            }
        }
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(s: &str) -> CardFeatures {
        CardFeatures::extract(&Hand::new_from_str(s).unwrap())
    }

    #[test]
    fn test_values_sorted_descending() {
        let f = features("2H AD 9C KS 9H");
        assert_eq!(
            &[Value::Ace, Value::King, Value::Nine, Value::Nine, Value::Two],
            f.values()
        );
    }

    #[test]
    fn test_counts_partition_hand() {
        let f = features("2H 2D 2S 5C 5D");
        let value_total: u8 = VALUES.iter().map(|&v| f.value_count(v)).sum();
        let suit_total: u8 = SUITS.iter().map(|&s| f.suit_count(s)).sum();
        assert_eq!(5, value_total);
        assert_eq!(5, suit_total);
        assert_eq!(3, f.value_count(Value::Two));
        assert_eq!(2, f.value_count(Value::Five));
    }

    #[test]
    fn test_is_flush() {
        assert!(features("AH KH QH JH 9H").is_flush());
        assert!(!features("AH KH QH JH 9S").is_flush());
    }

    #[test]
    fn test_is_sequence() {
        assert!(features("9H 8D 7C 6S 5H").is_sequence());
        assert!(features("AH KD QC JS TH").is_sequence());
        assert!(!features("9H 8D 7C 6S 4H").is_sequence());
    }

    #[test]
    fn test_wheel_is_not_a_sequence() {
        // Aces are fixed high, so the wheel fails the run test.
        assert!(!features("AH 5D 4C 3S 2H").is_sequence());
    }

    #[test]
    fn test_straight_has_no_repeats() {
        let pattern = RepeatPattern::from_features(&features("9H 8D 7C 6S 5H"));
        assert_eq!(RepeatPattern::default(), pattern);
    }

    #[test]
    fn test_quad() {
        let pattern = RepeatPattern::from_features(&features("9H 9D 9C 9S 5H"));
        assert_eq!(Some(Value::Nine), pattern.quad);
        assert_eq!(None, pattern.triple);
        assert!(pattern.pairs.is_empty());
    }

    #[test]
    fn test_full_house_pattern() {
        let pattern = RepeatPattern::from_features(&features("2H 2D 2S 5C 5D"));
        assert_eq!(Some(Value::Two), pattern.triple);
        assert_eq!(vec![Value::Five], pattern.pairs);
        assert_eq!(None, pattern.quad);
    }

    #[test]
    fn test_two_pairs() {
        let pattern = RepeatPattern::from_features(&features("KH KD 5C 5S 2H"));
        assert_eq!(2, pattern.pairs.len());
        assert!(pattern.pairs.contains(&Value::King));
        assert!(pattern.pairs.contains(&Value::Five));
    }
}
