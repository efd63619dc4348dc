use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardParseError {
    #[error("Unexpected value character '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unexpected suit character '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Card token is shorter than two characters")]
    TokenTooShort,
    #[error("Card token has {0} characters, expected two")]
    TokenTooLong(usize),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandError {
    #[error("A hand needs exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Couldn't parse a card in the hand")]
    BadCard(#[from] CardParseError),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DeckError {
    #[error("Can't deal a round with zero seats")]
    NoSeats,
    #[error("Dealing {seats} seats needs more than the {remaining} cards remaining")]
    NotEnoughCards { seats: usize, remaining: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TableError {
    #[error("Can't resolve winners for a table with no hands")]
    EmptyTable,
    #[error("A round needs a positive multiple of five cards, got {0}")]
    InvalidRoundLength(usize),
    #[error("Couldn't parse a card in the round")]
    BadCard(#[from] CardParseError),
}
