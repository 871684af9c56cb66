//! Geometry-only move generation.
//!
//! `raw_moves` dispatches over the closed [`PieceKind`] enum to the per-piece
//! generators. Results ignore whether the mover's own king would be left in
//! check; that filter is applied by the legal-move generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::move_generation::raw_moves_bishop::raw_bishop_moves;
use crate::move_generation::raw_moves_king::raw_king_moves;
use crate::move_generation::raw_moves_knight::raw_knight_moves;
use crate::move_generation::raw_moves_pawn::raw_pawn_moves;
use crate::move_generation::raw_moves_queen::raw_queen_moves;
use crate::move_generation::raw_moves_rook::raw_rook_moves;

/// Destinations reachable by the piece at `from` on pure movement geometry.
/// Returns an empty list when the square is empty.
pub fn raw_moves(
    board: &Board,
    from: Position,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => raw_pawn_moves(board, from, piece, en_passant_target, &mut out),
        PieceKind::Knight => raw_knight_moves(board, from, piece, &mut out),
        PieceKind::Bishop => raw_bishop_moves(board, from, piece, &mut out),
        PieceKind::Rook => raw_rook_moves(board, from, piece, &mut out),
        PieceKind::Queen => raw_queen_moves(board, from, piece, &mut out),
        PieceKind::King => raw_king_moves(board, from, piece, &mut out),
    }
    out
}
