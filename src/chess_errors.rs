//! Crate error type.
//!
//! Rule violations never surface here; the session converts those into
//! user-facing feedback. `ChessError` covers genuine API misuse and input
//! parsing: asking the executor to move from an empty square, or feeding a
//! malformed coordinate to the algebraic parser.

use thiserror::Error;

use crate::game_state::chess_types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The executor was asked to move from a square with no piece on it.
    #[error("no piece on {0} to move")]
    EmptyOriginSquare(Position),

    /// An algebraic coordinate string could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),
}
