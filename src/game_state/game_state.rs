//! Aggregate game state.
//!
//! `GameState` is the single model the session layer owns: board, turn,
//! selection cache, history, castling rights, en-passant target, and status.
//! Transitions replace the aggregate rather than mutating it piecemeal, so a
//! reader always observes a consistent snapshot.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastlingRights, Color, GameStatus, MoveRecord, Position,
};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    /// Square the user has selected, if any.
    pub selected: Option<Position>,
    /// Legal destinations cached for the current selection.
    pub legal_moves: Vec<Position>,
    pub move_history: Vec<MoveRecord>,
    pub game_status: GameStatus,
    pub is_training_mode: bool,
    /// Square of the king currently in check, when status is check or
    /// checkmate.
    pub king_in_check: Option<Position>,
    /// Square passed over by the last double-step pawn move; replaced on
    /// every executed move, never carried more than one ply.
    pub en_passant_target: Option<Position>,
    pub castling_rights: CastlingRights,
}

impl GameState {
    /// Fresh game: standard position, white to move, full castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::initial(),
            current_player: Color::White,
            selected: None,
            legal_moves: Vec::new(),
            move_history: Vec::new(),
            game_status: GameStatus::Playing,
            is_training_mode: false,
            king_in_check: None,
            en_passant_target: None,
            castling_rights: CastlingRights::full(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_with_white_and_full_rights() {
        let state = GameState::new_game();
        assert_eq!(state.current_player, Color::White);
        assert_eq!(state.game_status, GameStatus::Playing);
        assert!(state.castling_rights.white.king_side);
        assert!(state.castling_rights.white.queen_side);
        assert!(state.castling_rights.black.king_side);
        assert!(state.castling_rights.black.queen_side);
        assert_eq!(state.en_passant_target, None);
        assert!(state.move_history.is_empty());
        assert_eq!(state.selected, None);
    }
}
