//! Core value types shared by the board model, move generation, and the
//! session layer: colors, piece kinds, piece identity, board coordinates,
//! castling rights, special-move tags, and game status.

use std::fmt;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back-rank row for this color (row 0 is black's back rank).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta for a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on (the opposing back rank).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Standard-algebraic piece letter; pawns have none.
    #[inline]
    pub const fn notation_letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece occupying one board cell. `has_moved` flips exactly once, the
/// first time the piece moves, and gates castling eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: true,
        }
    }
}

/// Board coordinate. Row 0 is black's back rank (rank 8), col 0 is file 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Both coordinates must be in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "position coordinates must be in 0..8");
        Self { row, col }
    }

    /// Step by a row/col delta, returning `None` if the result leaves the
    /// board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Position> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate every square of the board, row 0 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    /// Renders algebraic notation: col maps to file 'a'..'h', row to rank
    /// 8..1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// Which wing a castle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            CastleSide::KingSide => "kingside",
            CastleSide::QueenSide => "queenside",
        }
    }
}

/// Castling availability for one color. Flags only ever turn off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl SideCastlingRights {
    #[inline]
    pub const fn full() -> Self {
        Self {
            king_side: true,
            queen_side: true,
        }
    }

    #[inline]
    pub const fn side(self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side,
            CastleSide::QueenSide => self.queen_side,
        }
    }
}

/// Castling availability for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl CastlingRights {
    #[inline]
    pub const fn full() -> Self {
        Self {
            white: SideCastlingRights::full(),
            black: SideCastlingRights::full(),
        }
    }

    #[inline]
    pub const fn for_color(&self, color: Color) -> SideCastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn for_color_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::full()
    }
}

/// Classification assigned by the executor when a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    Normal,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
}

/// One committed move as stored in the history list. `piece` carries the
/// post-move identity, so a promotion stores the promoted piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    pub special: SpecialMove,
}

/// Session-level game status. `Draw` is defined for completeness but no
/// transition currently produces it (no repetition or fifty-move tracking).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_offsets_respect_board_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Position::new(1, 1)));
        assert_eq!(Position::new(7, 7).offset(1, 0), None);
    }

    #[test]
    fn position_displays_algebraic_notation() {
        assert_eq!(Position::new(7, 0).to_string(), "a1");
        assert_eq!(Position::new(0, 7).to_string(), "h8");
        assert_eq!(Position::new(4, 4).to_string(), "e4");
    }

    #[test]
    #[should_panic(expected = "position coordinates must be in 0..8")]
    fn out_of_bounds_position_is_rejected_in_debug_builds() {
        let _ = Position::new(8, 0);
    }

    #[test]
    fn pawn_rows_match_board_orientation() {
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.pawn_start_row(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.home_row(), 0);
    }
}
