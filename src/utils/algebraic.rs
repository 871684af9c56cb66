//! Conversions between board coordinates and algebraic square names.
//!
//! Col maps to file `'a' + col`; row maps to rank `8 - row`, so row 0 is the
//! eighth rank. Reused by notation building, event records, and the terminal
//! front-end's input parsing.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Position;

/// Render a position as an algebraic square name (for example "e4").
#[inline]
pub fn position_to_notation(position: Position) -> String {
    position.to_string()
}

/// Parse an algebraic square name (for example "e4") into a position.
pub fn notation_to_position(square: &str) -> Result<Position, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(Position::new(b'8' - rank, file - b'a'))
}
