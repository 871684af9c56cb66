//! Attack and check detection.
//!
//! `is_square_attacked` probes the four attack patterns (pawn diagonal,
//! knight jump, king adjacency, slider rays) without generating full move
//! lists. `would_be_in_check` is the single legality filter: it simulates a
//! candidate move on a cloned board, including the en-passant removal, then
//! tests the mover's king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::raw_move_shared::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use crate::move_generation::raw_moves_king::KING_OFFSETS;
use crate::move_generation::raw_moves_knight::KNIGHT_OFFSETS;

/// True when any piece of `by_color` could capture on `position`.
pub fn is_square_attacked(board: &Board, position: Position, by_color: Color) -> bool {
    // Pawn attacks: a by_color pawn one row behind (from its perspective),
    // one file to either side.
    let pawn_row_delta = -by_color.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(origin) = position.offset(pawn_row_delta, d_col) {
            if matches!(
                board.piece_at(origin),
                Some(piece) if piece.kind == PieceKind::Pawn && piece.color == by_color
            ) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(origin) = position.offset(d_row, d_col) {
            if matches!(
                board.piece_at(origin),
                Some(piece) if piece.kind == PieceKind::Knight && piece.color == by_color
            ) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(origin) = position.offset(d_row, d_col) {
            if matches!(
                board.piece_at(origin),
                Some(piece) if piece.kind == PieceKind::King && piece.color == by_color
            ) {
                return true;
            }
        }
    }

    ray_attack(board, position, by_color, &STRAIGHT_DIRECTIONS, PieceKind::Rook)
        || ray_attack(board, position, by_color, &DIAGONAL_DIRECTIONS, PieceKind::Bishop)
}

/// Walk each ray outward from `position`; the first piece met attacks it only
/// when it is a `by_color` queen or the given slider kind.
fn ray_attack(
    board: &Board,
    position: Position,
    by_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = position;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            cursor = next;
        }
    }
    false
}

/// True when `color`'s king is attacked. A board with no king of that color
/// degrades to "not in check" rather than failing.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_position(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Simulate moving `from` to `to` (with the en-passant capture removal when
/// it applies) on a scratch copy, then test whether `color`'s king is
/// attacked.
pub fn would_be_in_check(
    board: &Board,
    from: Position,
    to: Position,
    color: Color,
    en_passant_target: Option<Position>,
) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    let mut scratch = board.clone();
    if piece.kind == PieceKind::Pawn && en_passant_target == Some(to) && from.col != to.col {
        scratch.take(Position::new(from.row, to.col));
    }
    scratch.take(from);
    scratch.set(to, Some(piece));

    is_king_in_check(&scratch, color)
}
