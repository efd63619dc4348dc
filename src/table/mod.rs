/// Module that finds the winning seats of one table.
mod resolve;
/// Export `SeatResult` and `resolve_winners`.
pub use self::resolve::{resolve_winners, SeatResult};

/// Module with the round driver pieces: round line parsing and
/// cross round win tallying.
mod rounds;
/// Export `parse_round` and `WinTally`.
pub use self::rounds::{parse_round, WinTally};
