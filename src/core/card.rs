use crate::core::errors::CardParseError;
use std::fmt;
use std::str::FromStr;

/// Card suits.
///
/// Suits have no ordering between them; they only matter
/// for deciding flushes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All suits, in discriminant order. Handy for deck construction.
pub const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Parse a single suit character. Both cases accepted.
    pub fn from_char(c: char) -> Result<Self, CardParseError> {
        match c {
            'c' | 'C' => Ok(Suit::Club),
            'd' | 'D' => Ok(Suit::Diamond),
            'h' | 'H' => Ok(Suit::Heart),
            's' | 'S' => Ok(Suit::Spade),
            _ => Err(CardParseError::UnexpectedSuitChar(c)),
        }
    }

    /// The character used when printing a card.
    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// Card values. Numeric discriminants run from 2 for `Two`
/// up to 14 for `Ace`; aces are always high.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// All values from lowest to highest.
pub const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Parse a single value character. Ten is written `T`.
    pub fn from_char(c: char) -> Result<Self, CardParseError> {
        match c {
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            't' | 'T' => Ok(Value::Ten),
            'j' | 'J' => Ok(Value::Jack),
            'q' | 'Q' => Ok(Value::Queen),
            'k' | 'K' => Ok(Value::King),
            'a' | 'A' => Ok(Value::Ace),
            _ => Err(CardParseError::UnexpectedValueChar(c)),
        }
    }

    /// The character used when printing a card.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    /// The numeric rank of this value (2..=14).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// How far apart two values are on the rank scale.
    /// Used for finding runs of consecutive values.
    pub fn gap(self, other: Value) -> i8 {
        self as i8 - other as i8
    }
}

/// A playing card: one value and one suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a card from a two character token like `9H` or `Td`.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value_char = chars.next().ok_or(CardParseError::TokenTooShort)?;
        let suit_char = chars.next().ok_or(CardParseError::TokenTooShort)?;
        if chars.next().is_some() {
            return Err(CardParseError::TokenTooLong(s.len()));
        }
        Ok(Card {
            value: Value::from_char(value_char)?,
            suit: Suit::from_char(suit_char)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_order() {
        assert!(Value::Two < Value::Three);
        assert!(Value::King < Value::Ace);
        assert!(Value::Ten < Value::Jack);
    }

    #[test]
    fn test_value_rank() {
        assert_eq!(2, Value::Two.rank());
        assert_eq!(11, Value::Jack.rank());
        assert_eq!(14, Value::Ace.rank());
    }

    #[test]
    fn test_gap() {
        assert_eq!(1, Value::Ace.gap(Value::King));
        assert_eq!(-1, Value::King.gap(Value::Ace));
        assert_eq!(9, Value::Ace.gap(Value::Five));
    }

    #[test]
    fn test_parse_card() {
        assert_eq!(
            Card::new(Value::Nine, Suit::Heart),
            Card::from_str("9H").unwrap()
        );
        assert_eq!(
            Card::new(Value::Ten, Suit::Diamond),
            Card::from_str("td").unwrap()
        );
    }

    #[test]
    fn test_parse_card_bad_value() {
        assert_eq!(
            Err(CardParseError::UnexpectedValueChar('1')),
            Card::from_str("1H")
        );
    }

    #[test]
    fn test_parse_card_bad_suit() {
        assert_eq!(
            Err(CardParseError::UnexpectedSuitChar('x')),
            Card::from_str("9x")
        );
    }

    #[test]
    fn test_parse_card_bad_length() {
        assert_eq!(Err(CardParseError::TokenTooShort), Card::from_str("9"));
        assert_eq!(Err(CardParseError::TokenTooShort), Card::from_str(""));
        assert_eq!(
            Err(CardParseError::TokenTooLong(3)),
            Card::from_str("10H")
        );
    }

    #[test]
    fn test_display_round_trip() {
        for value in VALUES {
            for suit in SUITS {
                let card = Card::new(value, suit);
                assert_eq!(card, Card::from_str(&card.to_string()).unwrap());
            }
        }
    }
}
