//! Castling eligibility.
//!
//! `can_castle` checks every gate independently: the right must still be
//! held, king and rook must sit unmoved on their home squares, the king must
//! not currently be in check, the squares strictly between king and rook must
//! be empty, and no square the king transits (destination included) may be
//! attacked. The rook's own path is never attack-checked; rook safety is
//! irrelevant under standard rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, CastlingRights, Color, PieceKind, Position};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};

/// Home file of the king.
pub const KING_HOME_COL: u8 = 4;

impl CastleSide {
    /// File the rook starts on for this side.
    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on after castling.
    #[inline]
    pub const fn king_destination_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on, adjacent to the castled king.
    #[inline]
    pub const fn rook_destination_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Files strictly between king and rook that must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Files the king passes through, destination included, that must not be
    /// attacked.
    #[inline]
    pub const fn king_transit_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[3, 2],
        }
    }
}

pub fn can_castle(
    board: &Board,
    color: Color,
    side: CastleSide,
    castling_rights: &CastlingRights,
) -> bool {
    if !castling_rights.for_color(color).side(side) {
        return false;
    }

    let home_row = color.home_row();
    let king_home = Position::new(home_row, KING_HOME_COL);
    let rook_home = Position::new(home_row, side.rook_home_col());

    let king_in_place = matches!(
        board.piece_at(king_home),
        Some(piece) if piece.kind == PieceKind::King && piece.color == color && !piece.has_moved
    );
    let rook_in_place = matches!(
        board.piece_at(rook_home),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
    );
    if !king_in_place || !rook_in_place {
        return false;
    }

    if is_king_in_check(board, color) {
        return false;
    }

    if side
        .between_cols()
        .iter()
        .any(|&col| board.piece_at(Position::new(home_row, col)).is_some())
    {
        return false;
    }

    let opponent = color.opposite();
    !side
        .king_transit_cols()
        .iter()
        .any(|&col| is_square_attacked(board, Position::new(home_row, col), opponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn bare_castling_board() -> Board {
        let mut board = Board::empty();
        board.set(
            Position::new(7, 4),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        board.set(
            Position::new(7, 7),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        board.set(
            Position::new(7, 0),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        board.set(
            Position::new(0, 4),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        board
    }

    #[test]
    fn clear_path_and_fresh_rights_allow_both_sides() {
        let board = bare_castling_board();
        let rights = CastlingRights::full();
        assert!(can_castle(&board, Color::White, CastleSide::KingSide, &rights));
        assert!(can_castle(&board, Color::White, CastleSide::QueenSide, &rights));
    }

    #[test]
    fn revoked_right_blocks_castling() {
        let board = bare_castling_board();
        let mut rights = CastlingRights::full();
        rights.white.king_side = false;
        assert!(!can_castle(&board, Color::White, CastleSide::KingSide, &rights));
        assert!(can_castle(&board, Color::White, CastleSide::QueenSide, &rights));
    }

    #[test]
    fn moved_king_or_rook_blocks_castling() {
        let rights = CastlingRights::full();

        let mut board = bare_castling_board();
        board.set(
            Position::new(7, 4),
            Some(Piece::moved(PieceKind::King, Color::White)),
        );
        assert!(!can_castle(&board, Color::White, CastleSide::KingSide, &rights));

        let mut board = bare_castling_board();
        board.set(
            Position::new(7, 7),
            Some(Piece::moved(PieceKind::Rook, Color::White)),
        );
        assert!(!can_castle(&board, Color::White, CastleSide::KingSide, &rights));
    }

    #[test]
    fn occupied_intervening_square_blocks_castling() {
        let mut board = bare_castling_board();
        board.set(
            Position::new(7, 1),
            Some(Piece::new(PieceKind::Knight, Color::White)),
        );
        let rights = CastlingRights::full();
        assert!(!can_castle(&board, Color::White, CastleSide::QueenSide, &rights));
        assert!(can_castle(&board, Color::White, CastleSide::KingSide, &rights));
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let mut board = bare_castling_board();
        board.set(
            Position::new(0, 4),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        board.set(
            Position::new(2, 4),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        let rights = CastlingRights::full();
        assert!(!can_castle(&board, Color::White, CastleSide::KingSide, &rights));
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        let mut board = bare_castling_board();
        // Black rook controls f1 (and f8, harmless here).
        board.set(
            Position::new(2, 5),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        let rights = CastlingRights::full();
        assert!(!can_castle(&board, Color::White, CastleSide::KingSide, &rights));
        // Queenside transit (d1, c1) is untouched.
        assert!(can_castle(&board, Color::White, CastleSide::QueenSide, &rights));
    }

    #[test]
    fn attacked_rook_transit_square_is_irrelevant_queenside() {
        let mut board = bare_castling_board();
        // Black rook controls only b1, which the king never crosses.
        board.set(
            Position::new(2, 1),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        let rights = CastlingRights::full();
        assert!(can_castle(&board, Color::White, CastleSide::QueenSide, &rights));
    }
}
