//! 8x8 mailbox board.
//!
//! The board is a plain matrix of optional pieces. Row 0 holds black's back
//! rank and row 7 holds white's, matching the coordinate convention in
//! [`Position`]. Simulations clone the whole board so speculative moves never
//! alias the live game state.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

/// Back-rank ordering shared by both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board with no pieces, for building test and puzzle positions.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: back ranks on rows 0 and 7, pawns on rows
    /// 1 and 6.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            board.set(
                Position::new(0, col),
                Some(Piece::new(BACK_RANK[col as usize], Color::Black)),
            );
            board.set(
                Position::new(1, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set(
                Position::new(6, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set(
                Position::new(7, col),
                Some(Piece::new(BACK_RANK[col as usize], Color::White)),
            );
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row as usize][position.col as usize]
    }

    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row as usize][position.col as usize] = piece;
    }

    /// Remove and return whatever occupies `position`.
    #[inline]
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.row as usize][position.col as usize].take()
    }

    /// Squares currently occupied by `color`, with their pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| {
            self.piece_at(pos)
                .filter(|piece| piece.color == color)
                .map(|piece| (pos, piece))
        })
    }

    /// Locate the king of `color`, if present.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        Position::all().find(|&pos| {
            matches!(
                self.piece_at(pos),
                Some(piece) if piece.kind == PieceKind::King && piece.color == color
            )
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
