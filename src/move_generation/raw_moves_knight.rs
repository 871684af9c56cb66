use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::raw_move_shared::push_offset_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Raw knight geometry: the eight L-shaped jumps, landing anywhere not held
/// by a same-color piece.
pub fn raw_knight_moves(board: &Board, from: Position, knight: Piece, out: &mut Vec<Position>) {
    push_offset_moves(board, from, knight.color, &KNIGHT_OFFSETS, out);
}
