//! Move application.
//!
//! `execute_move` applies a chosen move to a cloned board and returns the new
//! board, the captured piece if any, the replacement en-passant target, and
//! the special-move classification. The caller's board is never mutated.

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Position, SpecialMove};

/// Result of applying one move.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub board: Board,
    pub captured: Option<Piece>,
    /// Target for the next ply; `Some` only after a pawn double-step.
    pub en_passant_target: Option<Position>,
    pub special: SpecialMove,
}

/// Classify a move without mutating anything. Priority order: castling (king
/// moving two files), promotion (pawn reaching the opposing back rank),
/// en-passant (pawn capturing onto the current target), capture, normal.
pub fn detect_special_move(
    board: &Board,
    from: Position,
    to: Position,
    en_passant_target: Option<Position>,
) -> SpecialMove {
    let Some(piece) = board.piece_at(from) else {
        return SpecialMove::Normal;
    };

    if piece.kind == PieceKind::King && from.col.abs_diff(to.col) == 2 {
        return if to.col > from.col {
            SpecialMove::CastleKingside
        } else {
            SpecialMove::CastleQueenside
        };
    }

    if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
        return SpecialMove::Promotion;
    }

    if piece.kind == PieceKind::Pawn && en_passant_target == Some(to) && from.col != to.col {
        return SpecialMove::EnPassant;
    }

    if board.piece_at(to).is_some() {
        return SpecialMove::Capture;
    }

    SpecialMove::Normal
}

/// Apply the move `from -> to`, handling all four special-move variants.
/// `promotion` selects the replacement piece for a promotion and defaults to
/// a queen.
pub fn execute_move(
    board: &Board,
    from: Position,
    to: Position,
    en_passant_target: Option<Position>,
    promotion: Option<PieceKind>,
) -> Result<MoveOutcome, ChessError> {
    let piece = board
        .piece_at(from)
        .ok_or(ChessError::EmptyOriginSquare(from))?;

    let special = detect_special_move(board, from, to, en_passant_target);
    let mut next = board.clone();
    let mut captured = None;
    let mut new_en_passant_target = None;

    match special {
        SpecialMove::CastleKingside | SpecialMove::CastleQueenside => {
            let side = if special == SpecialMove::CastleKingside {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            let home_row = piece.color.home_row();
            let rook_from = Position::new(home_row, side.rook_home_col());
            let rook_to = Position::new(home_row, side.rook_destination_col());

            next.take(from);
            next.set(to, Some(Piece::moved(PieceKind::King, piece.color)));
            if let Some(rook) = next.take(rook_from) {
                next.set(rook_to, Some(Piece::moved(rook.kind, rook.color)));
            }
        }
        SpecialMove::EnPassant => {
            // The captured pawn sits behind the destination, on the mover's
            // origin row.
            captured = next.take(Position::new(from.row, to.col));
            next.take(from);
            next.set(to, Some(Piece::moved(piece.kind, piece.color)));
        }
        SpecialMove::Promotion => {
            captured = next.piece_at(to);
            next.take(from);
            let promoted_kind = promotion.unwrap_or(PieceKind::Queen);
            next.set(to, Some(Piece::moved(promoted_kind, piece.color)));
        }
        SpecialMove::Capture | SpecialMove::Normal => {
            captured = next.piece_at(to);
            next.take(from);
            next.set(to, Some(Piece::moved(piece.kind, piece.color)));

            if piece.kind == PieceKind::Pawn && from.row.abs_diff(to.row) == 2 {
                let passed_row = (from.row + to.row) / 2;
                new_en_passant_target = Some(Position::new(passed_row, from.col));
            }
        }
    }

    Ok(MoveOutcome {
        board: next,
        captured,
        en_passant_target: new_en_passant_target,
        special,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn double_step_sets_the_passed_square_as_target() {
        let board = Board::initial();
        let outcome = execute_move(
            &board,
            Position::new(6, 4),
            Position::new(4, 4),
            None,
            None,
        )
        .expect("e2-e4 should apply");

        assert_eq!(outcome.special, SpecialMove::Normal);
        assert_eq!(outcome.en_passant_target, Some(Position::new(5, 4)));
        assert_eq!(outcome.captured, None);
        let moved = outcome
            .board
            .piece_at(Position::new(4, 4))
            .expect("pawn should land on e4");
        assert!(moved.has_moved);
        assert_eq!(outcome.board.piece_at(Position::new(6, 4)), None);
        // Input board untouched.
        assert!(board.piece_at(Position::new(6, 4)).is_some());
    }

    #[test]
    fn single_step_clears_any_previous_target() {
        let board = Board::initial();
        let outcome = execute_move(
            &board,
            Position::new(6, 4),
            Position::new(5, 4),
            Some(Position::new(2, 0)),
            None,
        )
        .expect("e2-e3 should apply");
        assert_eq!(outcome.en_passant_target, None);
    }

    #[test]
    fn en_passant_removes_the_pawn_behind_the_destination() {
        // White pawn just double-stepped d2-d4; black pawn on e4 captures it.
        let mut board = Board::empty();
        board.set(
            Position::new(4, 3),
            Some(Piece::moved(PieceKind::Pawn, Color::White)),
        );
        board.set(
            Position::new(4, 4),
            Some(Piece::moved(PieceKind::Pawn, Color::Black)),
        );

        let outcome = execute_move(
            &board,
            Position::new(4, 4),
            Position::new(5, 3),
            Some(Position::new(5, 3)),
            None,
        )
        .expect("en-passant capture should apply");

        assert_eq!(outcome.special, SpecialMove::EnPassant);
        let captured = outcome.captured.expect("a pawn should be captured");
        assert_eq!(captured.kind, PieceKind::Pawn);
        assert_eq!(captured.color, Color::White);
        // The white pawn leaves its own row, not the destination row.
        assert_eq!(outcome.board.piece_at(Position::new(4, 3)), None);
        assert_eq!(
            outcome.board.piece_at(Position::new(5, 3)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(outcome.en_passant_target, None);
    }

    #[test]
    fn kingside_castle_places_rook_beside_the_king() {
        let mut board = Board::empty();
        board.set(
            Position::new(7, 4),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        board.set(
            Position::new(7, 7),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );

        let outcome = execute_move(
            &board,
            Position::new(7, 4),
            Position::new(7, 6),
            None,
            None,
        )
        .expect("castle should apply");

        assert_eq!(outcome.special, SpecialMove::CastleKingside);
        let king = outcome
            .board
            .piece_at(Position::new(7, 6))
            .expect("king should be on g1");
        let rook = outcome
            .board
            .piece_at(Position::new(7, 5))
            .expect("rook should be on f1");
        assert!(king.has_moved && rook.has_moved);
        assert_eq!(outcome.board.piece_at(Position::new(7, 7)), None);
        assert_eq!(outcome.board.piece_at(Position::new(7, 4)), None);
    }

    #[test]
    fn queenside_castle_places_rook_on_the_d_file() {
        let mut board = Board::empty();
        board.set(
            Position::new(0, 4),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        board.set(
            Position::new(0, 0),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );

        let outcome = execute_move(
            &board,
            Position::new(0, 4),
            Position::new(0, 2),
            None,
            None,
        )
        .expect("castle should apply");

        assert_eq!(outcome.special, SpecialMove::CastleQueenside);
        assert!(outcome.board.piece_at(Position::new(0, 2)).is_some());
        assert!(outcome.board.piece_at(Position::new(0, 3)).is_some());
        assert_eq!(outcome.board.piece_at(Position::new(0, 0)), None);
    }

    #[test]
    fn promotion_replaces_the_pawn_defaulting_to_queen() {
        let mut board = Board::empty();
        board.set(
            Position::new(1, 0),
            Some(Piece::moved(PieceKind::Pawn, Color::White)),
        );

        let outcome = execute_move(
            &board,
            Position::new(1, 0),
            Position::new(0, 0),
            None,
            None,
        )
        .expect("promotion should apply");

        assert_eq!(outcome.special, SpecialMove::Promotion);
        let promoted = outcome
            .board
            .piece_at(Position::new(0, 0))
            .expect("promoted piece should be on a8");
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);
        assert!(promoted.has_moved);
    }

    #[test]
    fn underpromotion_honors_the_requested_kind() {
        let mut board = Board::empty();
        board.set(
            Position::new(6, 2),
            Some(Piece::moved(PieceKind::Pawn, Color::Black)),
        );

        let outcome = execute_move(
            &board,
            Position::new(6, 2),
            Position::new(7, 2),
            None,
            Some(PieceKind::Knight),
        )
        .expect("underpromotion should apply");
        assert_eq!(
            outcome.board.piece_at(Position::new(7, 2)).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn moving_from_an_empty_square_is_an_error() {
        let board = Board::empty();
        let result = execute_move(
            &board,
            Position::new(4, 4),
            Position::new(3, 4),
            None,
            None,
        );
        assert_eq!(
            result.err(),
            Some(ChessError::EmptyOriginSquare(Position::new(4, 4)))
        );
    }
}
