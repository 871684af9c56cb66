//! Helpers shared by the per-piece raw move generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

/// Straight-line directions used by rooks (and queens).
pub const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal directions used by bishops (and queens).
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Ray-cast from `from` along each direction, pushing empty squares until the
/// first occupied one, which is included only when it holds an enemy piece.
pub fn push_ray_moves(
    board: &Board,
    from: Position,
    mover_color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(occupant) => {
                    if occupant.color != mover_color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Push each reachable offset square not occupied by a same-color piece.
/// Used by the fixed-offset pieces (knight and king).
pub fn push_offset_moves(
    board: &Board,
    from: Position,
    mover_color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(next) = from.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(occupant) if occupant.color != mover_color => out.push(next),
                Some(_) => {}
            }
        }
    }
}
