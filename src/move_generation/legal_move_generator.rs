//! Check-filtered legal move generation and game-ending detection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastleSide, CastlingRights, Color, GameStatus, PieceKind, Position,
};
use crate::move_generation::castling::can_castle;
use crate::move_generation::legal_move_checks::{is_king_in_check, would_be_in_check};
use crate::move_generation::raw_moves::raw_moves;

/// Legal destinations for the piece at `position`. Empty when the square is
/// empty or holds an opponent piece. Raw geometry is filtered through
/// `would_be_in_check`; an eligible king additionally receives its castling
/// destinations.
pub fn calculate_legal_moves(
    board: &Board,
    position: Position,
    current_player: Color,
    en_passant_target: Option<Position>,
    castling_rights: &CastlingRights,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(position) else {
        return Vec::new();
    };
    if piece.color != current_player {
        return Vec::new();
    }

    let mut legal: Vec<Position> = raw_moves(board, position, en_passant_target)
        .into_iter()
        .filter(|&to| !would_be_in_check(board, position, to, current_player, en_passant_target))
        .collect();

    if piece.kind == PieceKind::King {
        let home_row = current_player.home_row();
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if can_castle(board, current_player, side, castling_rights) {
                legal.push(Position::new(home_row, side.king_destination_col()));
            }
        }
    }

    legal
}

/// True when any piece of `color` has at least one legal move.
pub fn has_legal_moves(
    board: &Board,
    color: Color,
    en_passant_target: Option<Position>,
    castling_rights: &CastlingRights,
) -> bool {
    board.pieces_of(color).any(|(position, _)| {
        !calculate_legal_moves(board, position, color, en_passant_target, castling_rights)
            .is_empty()
    })
}

/// Sole authority for the game status after a move: checkmate when the side
/// to move is in check with no legal reply, stalemate when out of check with
/// none, check when in check with replies, otherwise still playing.
pub fn get_game_end_state(
    board: &Board,
    player: Color,
    en_passant_target: Option<Position>,
    castling_rights: &CastlingRights,
) -> GameStatus {
    let in_check = is_king_in_check(board, player);
    let any_moves = has_legal_moves(board, player, en_passant_target, castling_rights);
    match (in_check, any_moves) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn startpos_has_twenty_legal_moves() {
        let board = Board::initial();
        let rights = CastlingRights::full();
        let total: usize = board
            .pieces_of(Color::White)
            .map(|(pos, _)| calculate_legal_moves(&board, pos, Color::White, None, &rights).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn wrong_color_or_empty_square_yields_nothing() {
        let board = Board::initial();
        let rights = CastlingRights::full();
        assert!(
            calculate_legal_moves(&board, Position::new(1, 0), Color::White, None, &rights)
                .is_empty()
        );
        assert!(
            calculate_legal_moves(&board, Position::new(4, 4), Color::White, None, &rights)
                .is_empty()
        );
    }

    #[test]
    fn pinned_rook_may_not_leave_the_file() {
        let mut board = Board::empty();
        board.set(
            Position::new(7, 4),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        board.set(
            Position::new(6, 4),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        board.set(
            Position::new(0, 4),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        board.set(
            Position::new(0, 0),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );

        let rights = CastlingRights::full();
        let legal =
            calculate_legal_moves(&board, Position::new(6, 4), Color::White, None, &rights);
        assert!(!legal.is_empty());
        assert!(legal.iter().all(|p| p.col == 4));
        assert!(legal.contains(&Position::new(0, 4)));
    }

    #[test]
    fn eligible_king_gains_castling_destinations() {
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

        let rights = CastlingRights::full();
        let legal =
            calculate_legal_moves(&board, Position::new(7, 4), Color::White, None, &rights);
        assert!(legal.contains(&Position::new(7, 6)));
        assert!(legal.contains(&Position::new(7, 2)));
    }

    #[test]
    fn cornered_king_with_guarded_queen_is_checkmate() {
        // Black king a8, white queen b7 defended by the white king on c6.
        let mut board = Board::empty();
        board.set(
            Position::new(0, 0),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        board.set(
            Position::new(1, 1),
            Some(Piece::moved(PieceKind::Queen, Color::White)),
        );
        board.set(
            Position::new(2, 2),
            Some(Piece::moved(PieceKind::King, Color::White)),
        );

        let rights = CastlingRights::full();
        assert_eq!(
            get_game_end_state(&board, Color::Black, None, &rights),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn cornered_king_with_no_moves_but_no_check_is_stalemate() {
        // Black king a8, white queen c7: every king square is covered but a8
        // itself is not attacked.
        let mut board = Board::empty();
        board.set(
            Position::new(0, 0),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        board.set(
            Position::new(1, 2),
            Some(Piece::moved(PieceKind::Queen, Color::White)),
        );
        board.set(
            Position::new(7, 7),
            Some(Piece::moved(PieceKind::King, Color::White)),
        );

        let rights = CastlingRights::full();
        assert_eq!(
            get_game_end_state(&board, Color::Black, None, &rights),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn check_with_an_escape_reports_check() {
        let mut board = Board::empty();
        board.set(
            Position::new(0, 0),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        board.set(
            Position::new(0, 7),
            Some(Piece::moved(PieceKind::Rook, Color::White)),
        );
        board.set(
            Position::new(7, 7),
            Some(Piece::moved(PieceKind::King, Color::White)),
        );

        let rights = CastlingRights::full();
        assert_eq!(
            get_game_end_state(&board, Color::Black, None, &rights),
            GameStatus::Check
        );
    }
}
