use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};

/// Raw pawn geometry: one step forward onto an empty square, two from the
/// start row when both squares are empty, and diagonal steps only when they
/// capture an enemy piece or land on the en-passant target.
pub fn raw_pawn_moves(
    board: &Board,
    from: Position,
    pawn: Piece,
    en_passant_target: Option<Position>,
    out: &mut Vec<Position>,
) {
    let direction = pawn.color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(one_step);

            if from.row == pawn.color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diagonal) = from.offset(direction, d_col) else {
            continue;
        };
        let captures_enemy = matches!(
            board.piece_at(diagonal),
            Some(occupant) if occupant.color != pawn.color
        );
        if captures_enemy || en_passant_target == Some(diagonal) {
            out.push(diagonal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn moves(board: &Board, from: Position, ep: Option<Position>) -> Vec<Position> {
        let pawn = board.piece_at(from).expect("test square should hold a pawn");
        let mut out = Vec::new();
        raw_pawn_moves(board, from, pawn, ep, &mut out);
        out
    }

    #[test]
    fn unmoved_pawn_may_advance_one_or_two_squares() {
        let board = Board::initial();
        let from = Position::new(6, 4);
        let out = moves(&board, from, None);
        assert_eq!(out, vec![Position::new(5, 4), Position::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        let mut board = Board::initial();
        board.set(
            Position::new(5, 4),
            Some(Piece::new(PieceKind::Knight, Color::Black)),
        );
        assert!(moves(&board, Position::new(6, 4), None).is_empty());
    }

    #[test]
    fn diagonal_requires_enemy_or_en_passant_target() {
        let mut board = Board::empty();
        board.set(
            Position::new(4, 4),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        board.set(
            Position::new(3, 3),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );

        let out = moves(&board, Position::new(4, 4), None);
        assert!(out.contains(&Position::new(3, 3)));
        assert!(!out.contains(&Position::new(3, 5)));

        let out = moves(&board, Position::new(4, 4), Some(Position::new(3, 5)));
        assert!(out.contains(&Position::new(3, 5)));
    }
}
