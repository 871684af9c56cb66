use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::raw_move_shared::{push_ray_moves, STRAIGHT_DIRECTIONS};

/// Raw rook geometry: horizontal and vertical rays, stopping at the first
/// occupied square and including it only when capturable.
pub fn raw_rook_moves(board: &Board, from: Position, rook: Piece, out: &mut Vec<Position>) {
    push_ray_moves(board, from, rook.color, &STRAIGHT_DIRECTIONS, out);
}
