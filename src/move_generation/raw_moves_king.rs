use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::raw_move_shared::push_offset_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Raw king geometry: the eight adjacent squares not held by a same-color
/// piece. Castling destinations are computed separately by the legal-move
/// generator.
pub fn raw_king_moves(board: &Board, from: Position, king: Piece, out: &mut Vec<Position>) {
    push_offset_moves(board, from, king.color, &KING_OFFSETS, out);
}
