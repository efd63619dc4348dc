use crate::core::card::Value;
use crate::core::features::{CardFeatures, RepeatPattern};
use crate::core::hand::{Hand, HAND_SIZE};
use std::cmp::Ordering;

/// The ten hand categories, lowest to highest.
///
/// The declaration order is the strength order, so the derived
/// `Ord` is the primary comparison key between hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Category {
    /// No matches, no run, no shared suit.
    HighCard,
    /// One card value matches another.
    OnePair,
    /// Two different pairs of matching values.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five values in a row.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five values in a row, all one suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

/// A classified hand: its category plus the ordered tie-break keys.
///
/// `primary` holds the values that made the category (the triple
/// then the pair for a full house, the pair for one pair, all five
/// values for flushes and high cards). `kickers` holds the leftover
/// values descending, consulted only when category and primary keys
/// tie. The derived `Ord` compares the fields in declaration order,
/// which is exactly the category / primary / kicker resolution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct HandClass {
    /// The hand category.
    pub category: Category,
    /// The values that decide the category, strongest first.
    pub primary: Vec<Value>,
    /// The remaining values, descending.
    pub kickers: Vec<Value>,
}

/// The outcome of comparing two classified hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandOrdering {
    /// The first hand outranks the second.
    FirstWins,
    /// The second hand outranks the first.
    SecondWins,
    /// The hands are exactly level on every key.
    Tie,
}

impl HandClass {
    /// Compare two classifications: category first, then the
    /// primary keys element by element, then the kickers.
    pub fn compare(&self, other: &HandClass) -> HandOrdering {
        match self.cmp(other) {
            Ordering::Greater => HandOrdering::FirstWins,
            Ordering::Less => HandOrdering::SecondWins,
            Ordering::Equal => HandOrdering::Tie,
        }
    }
}

/// The hand values not consumed by the primary keys, descending.
fn kickers_without(values: &[Value; HAND_SIZE], used: &[Value]) -> Vec<Value> {
    values
        .iter()
        .copied()
        .filter(|v| !used.contains(v))
        .collect()
}

impl Hand {
    /// Classify this hand into its category and tie-break keys.
    ///
    /// This is a pure total function; the same five cards always
    /// produce the same classification whatever their deal order.
    /// The checks run from strongest category down because the
    /// conditions overlap (a straight flush is also a flush and a
    /// sequence).
    ///
    /// # Examples
    /// ```
    /// use showdown::core::{Category, Hand};
    ///
    /// let hand = Hand::new_from_str("2H 2D 2S 5C 5D").unwrap();
    /// assert_eq!(Category::FullHouse, hand.classify().category);
    /// ```
    pub fn classify(&self) -> HandClass {
        let features = CardFeatures::extract(self);
        let pattern = RepeatPattern::from_features(&features);
        let values = features.values();
        let is_flush = features.is_flush();
        let is_sequence = features.is_sequence();

        if is_flush && is_sequence && values[0] == Value::Ace {
            // One deck can't deal two of these so no keys needed.
            HandClass {
                category: Category::RoyalFlush,
                primary: vec![],
                kickers: vec![],
            }
        } else if is_flush && is_sequence {
            HandClass {
                category: Category::StraightFlush,
                primary: vec![values[0]],
                kickers: vec![],
            }
        } else if let Some(quad) = pattern.quad {
            HandClass {
                category: Category::FourOfAKind,
                primary: vec![quad],
                kickers: kickers_without(values, &[quad]),
            }
        } else if let (Some(triple), Some(&pair)) = (pattern.triple, pattern.pairs.iter().max()) {
            HandClass {
                category: Category::FullHouse,
                primary: vec![triple, pair],
                kickers: vec![],
            }
        } else if is_flush {
            HandClass {
                category: Category::Flush,
                primary: values.to_vec(),
                kickers: vec![],
            }
        } else if is_sequence {
            HandClass {
                category: Category::Straight,
                primary: vec![values[0]],
                kickers: vec![],
            }
        } else if let Some(triple) = pattern.triple {
            HandClass {
                category: Category::ThreeOfAKind,
                primary: vec![triple],
                kickers: kickers_without(values, &[triple]),
            }
        } else if pattern.pairs.len() == 2 {
            let mut pairs = pattern.pairs.clone();
            pairs.sort_unstable_by(|a, b| b.cmp(a));
            let kickers = kickers_without(values, &pairs);
            HandClass {
                category: Category::TwoPair,
                primary: pairs,
                kickers,
            }
        } else if let Some(&pair) = pattern.pairs.first() {
            HandClass {
                category: Category::OnePair,
                primary: vec![pair],
                kickers: kickers_without(values, &[pair]),
            }
        } else {
            HandClass {
                category: Category::HighCard,
                primary: values.to_vec(),
                kickers: vec![],
            }
        }
    }
}
