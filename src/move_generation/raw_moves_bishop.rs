use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::raw_move_shared::{push_ray_moves, DIAGONAL_DIRECTIONS};

/// Raw bishop geometry: diagonal rays, stopping at the first occupied square
/// and including it only when capturable.
pub fn raw_bishop_moves(board: &Board, from: Position, bishop: Piece, out: &mut Vec<Position>) {
    push_ray_moves(board, from, bishop.color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn bishop_ray_stops_at_first_piece() {
        let mut board = Board::empty();
        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        board.set(Position::new(4, 4), Some(bishop));
        board.set(
            Position::new(2, 2),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        board.set(
            Position::new(6, 6),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );

        let mut out = Vec::new();
        raw_bishop_moves(&board, Position::new(4, 4), bishop, &mut out);

        // Enemy blocker is capturable and terminates the ray.
        assert!(out.contains(&Position::new(3, 3)));
        assert!(out.contains(&Position::new(2, 2)));
        assert!(!out.contains(&Position::new(1, 1)));
        // Friendly blocker is excluded.
        assert!(out.contains(&Position::new(5, 5)));
        assert!(!out.contains(&Position::new(6, 6)));
    }
}
