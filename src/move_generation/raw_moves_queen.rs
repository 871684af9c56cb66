use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::raw_move_shared::{
    push_ray_moves, DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS,
};

/// Raw queen geometry: the union of rook and bishop rays.
pub fn raw_queen_moves(board: &Board, from: Position, queen: Piece, out: &mut Vec<Position>) {
    push_ray_moves(board, from, queen.color, &STRAIGHT_DIRECTIONS, out);
    push_ray_moves(board, from, queen.color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn central_queen_on_empty_board_reaches_27_squares() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Color::White);
        board.set(Position::new(4, 3), Some(queen));

        let mut out = Vec::new();
        raw_queen_moves(&board, Position::new(4, 3), queen, &mut out);
        assert_eq!(out.len(), 27);
    }
}
