//! Interactive game session.
//!
//! `ChessSession` is the state machine behind the UI: it owns the
//! [`GameState`] aggregate and replaces it atomically on every accepted
//! action. Selection, legality checking, execution, status recomputation,
//! notation, feedback, and event emission all run synchronously to
//! completion; the injected [`EventSink`] is strictly fire-and-forget.

use chrono::Utc;

use crate::events::chess_event::{ChessEvent, EventSink, NullEventSink};
use crate::explanations::move_explanations::{
    no_legal_moves_explanation, piece_rule_explanation, wrong_color_explanation,
};
use crate::game_state::chess_types::{
    CastleSide, Color, GameStatus, MoveRecord, Piece, PieceKind, Position, SpecialMove,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{calculate_legal_moves, get_game_end_state};
use crate::move_generation::move_executor::execute_move;
use crate::session::feedback::{FeedbackKind, FeedbackMessage};
use crate::session::training::training_hint;
use crate::utils::notation::create_move_notation;

pub struct ChessSession {
    state: GameState,
    feedback: Vec<FeedbackMessage>,
    modal_feedback: Option<FeedbackMessage>,
    paused: bool,
    promotion_pending: Option<Position>,
    events: Box<dyn EventSink>,
    feedback_seq: u64,
}

impl ChessSession {
    pub fn new() -> Self {
        Self::with_sink(Box::new(NullEventSink))
    }

    pub fn with_sink(sink: Box<dyn EventSink>) -> Self {
        let mut session = Self {
            state: GameState::new_game(),
            feedback: Vec::new(),
            modal_feedback: None,
            paused: false,
            promotion_pending: None,
            events: sink,
            feedback_seq: 0,
        };
        session.events.publish(ChessEvent::game_start());
        session
    }

    /// Resume from an arbitrary aggregate, e.g. a puzzle position. No
    /// `game_start` event is emitted.
    pub fn from_state(state: GameState, sink: Box<dyn EventSink>) -> Self {
        Self {
            state,
            feedback: Vec::new(),
            modal_feedback: None,
            paused: false,
            promotion_pending: None,
            events: sink,
            feedback_seq: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn feedback(&self) -> &[FeedbackMessage] {
        &self.feedback
    }

    /// Drain the queued toast messages.
    pub fn take_feedback(&mut self) -> Vec<FeedbackMessage> {
        std::mem::take(&mut self.feedback)
    }

    pub fn remove_feedback(&mut self, id: &str) {
        self.feedback.retain(|message| message.id != id);
    }

    pub fn modal_feedback(&self) -> Option<&FeedbackMessage> {
        self.modal_feedback.as_ref()
    }

    /// Acknowledge the blocking modal and resume play.
    pub fn dismiss_modal(&mut self) {
        self.modal_feedback = None;
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn promotion_pending(&self) -> Option<Position> {
        self.promotion_pending
    }

    /// Primary user action: click a square. Selects, reselects, rejects, or
    /// commits a move depending on the current selection state.
    pub fn select_square(&mut self, position: Position) {
        if self.paused {
            tracing::debug!(%position, "selection ignored while a modal is open");
            return;
        }
        if self.promotion_pending.is_some() {
            tracing::debug!(%position, "selection ignored while a promotion is pending");
            return;
        }
        if self.state.game_status.is_game_over() {
            tracing::debug!(%position, status = ?self.state.game_status, "game is over");
            return;
        }

        match self.state.selected {
            Some(selected) => self.handle_destination(selected, position),
            None => self.handle_selection(position),
        }
    }

    fn handle_selection(&mut self, position: Position) {
        let Some(piece) = self.state.board.piece_at(position) else {
            // Clicking an empty square with nothing selected is a no-op.
            return;
        };

        if piece.color != self.state.current_player {
            let explanation = wrong_color_explanation(self.state.current_player);
            self.add_feedback(FeedbackMessage::from_explanation(
                FeedbackKind::Warning,
                explanation,
                "⚠️",
            ));
            return;
        }

        let legal_moves = calculate_legal_moves(
            &self.state.board,
            position,
            self.state.current_player,
            self.state.en_passant_target,
            &self.state.castling_rights,
        );

        if legal_moves.is_empty() {
            let explanation = no_legal_moves_explanation(piece.kind);
            self.add_feedback(FeedbackMessage::from_explanation(
                FeedbackKind::Info,
                explanation,
                "ℹ️",
            ));
        }

        self.state.selected = Some(position);
        self.state.legal_moves = legal_moves;
        self.events.publish(ChessEvent::piece_select(piece, position));
    }

    fn handle_destination(&mut self, selected: Position, position: Position) {
        if self.state.legal_moves.contains(&position) {
            let Some(mover) = self.state.board.piece_at(selected) else {
                tracing::error!(%selected, "selected square is empty; clearing selection");
                self.clear_selection();
                return;
            };

            // Pawn reaching the final rank: defer until the UI chooses the
            // replacement piece.
            if mover.kind == PieceKind::Pawn && position.row == mover.color.promotion_row() {
                self.promotion_pending = Some(position);
                self.state.legal_moves.clear();
                tracing::debug!(from = %selected, to = %position, "promotion pending");
                return;
            }

            self.commit_move(selected, position, None);
            return;
        }

        let same_color_piece = self
            .state
            .board
            .piece_at(position)
            .filter(|piece| piece.color == self.state.current_player);
        if let Some(piece) = same_color_piece {
            // Reselect, silently abandoning the previous selection.
            self.state.legal_moves = calculate_legal_moves(
                &self.state.board,
                position,
                self.state.current_player,
                self.state.en_passant_target,
                &self.state.castling_rights,
            );
            self.state.selected = Some(position);
            self.events.publish(ChessEvent::piece_select(piece, position));
            return;
        }

        // Illegal destination: enemy piece or empty square outside the legal
        // set. Diagnose, report, and drop the selection.
        let Some(mover) = self.state.board.piece_at(selected) else {
            tracing::error!(%selected, "selected square is empty; clearing selection");
            self.clear_selection();
            return;
        };
        let explanation = piece_rule_explanation(
            mover,
            selected,
            position,
            self.state.board.piece_at(position),
            self.state.current_player,
        );
        self.add_feedback(FeedbackMessage::from_explanation(
            FeedbackKind::Error,
            explanation,
            "❌",
        ));
        self.clear_selection();
    }

    /// Complete a deferred promotion. Ignored when none is pending or the
    /// requested kind is not a legal promotion target.
    pub fn promote_pawn(&mut self, kind: PieceKind) {
        let (Some(pending), Some(origin)) = (self.promotion_pending, self.state.selected) else {
            tracing::warn!("promote_pawn called with no promotion pending");
            return;
        };
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            tracing::warn!(kind = kind.name(), "invalid promotion target ignored");
            return;
        }

        self.promotion_pending = None;
        self.commit_move(origin, pending, Some(kind));
    }

    /// The committed-move path shared by immediate moves and completed
    /// promotions.
    fn commit_move(&mut self, from: Position, to: Position, promotion: Option<PieceKind>) {
        let Some(mover) = self.state.board.piece_at(from) else {
            tracing::error!(%from, "no piece to move; clearing selection");
            self.clear_selection();
            return;
        };

        let outcome = match execute_move(
            &self.state.board,
            from,
            to,
            self.state.en_passant_target,
            promotion,
        ) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(%error, %from, %to, "move execution failed");
                self.clear_selection();
                return;
            }
        };
        let Some(piece_after) = outcome.board.piece_at(to) else {
            tracing::error!(%to, "executed move left the destination empty");
            self.clear_selection();
            return;
        };

        let mut castling_rights = self.state.castling_rights;
        let side_rights = castling_rights.for_color_mut(mover.color);
        match mover.kind {
            PieceKind::King => {
                side_rights.king_side = false;
                side_rights.queen_side = false;
            }
            PieceKind::Rook => {
                let home_row = mover.color.home_row();
                if from == Position::new(home_row, CastleSide::QueenSide.rook_home_col()) {
                    side_rights.queen_side = false;
                } else if from == Position::new(home_row, CastleSide::KingSide.rook_home_col()) {
                    side_rights.king_side = false;
                }
            }
            _ => {}
        }

        let next_player = self.state.current_player.opposite();
        let status = get_game_end_state(
            &outcome.board,
            next_player,
            outcome.en_passant_target,
            &castling_rights,
        );
        let king_in_check = if matches!(status, GameStatus::Check | GameStatus::Checkmate) {
            outcome.board.king_position(next_player)
        } else {
            None
        };

        let promoted_kind = (outcome.special == SpecialMove::Promotion).then_some(piece_after.kind);
        let notation = create_move_notation(
            piece_after,
            from,
            to,
            outcome.captured,
            outcome.special,
            promoted_kind,
        );
        let record = MoveRecord {
            from,
            to,
            piece: piece_after,
            captured: outcome.captured,
            notation: notation.clone(),
            special: outcome.special,
        };

        if self.state.is_training_mode {
            let hint = training_hint(mover.kind);
            self.add_feedback(FeedbackMessage::plain(FeedbackKind::Info, hint, "ℹ️"));
        }
        self.emit_move_feedback(piece_after, &record, status, next_player.opposite());
        self.emit_move_events(mover, piece_after, &record, status, next_player, king_in_check);

        tracing::debug!(%notation, special = ?outcome.special, status = ?status, "move committed");

        self.state.board = outcome.board;
        self.state.current_player = next_player;
        self.state.selected = None;
        self.state.legal_moves = Vec::new();
        self.state.move_history.push(record);
        self.state.game_status = status;
        self.state.king_in_check = king_in_check;
        self.state.en_passant_target = outcome.en_passant_target;
        self.state.castling_rights = castling_rights;
        self.promotion_pending = None;
    }

    fn emit_move_feedback(
        &mut self,
        piece_after: Piece,
        record: &MoveRecord,
        status: GameStatus,
        mover_color: Color,
    ) {
        match record.special {
            SpecialMove::CastleKingside => {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Info,
                    "Castled kingside.",
                    "🏰",
                ));
            }
            SpecialMove::CastleQueenside => {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Info,
                    "Castled queenside.",
                    "🏰",
                ));
            }
            SpecialMove::Promotion => {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Success,
                    format!("Pawn promoted to {}!", piece_after.kind.name()),
                    "👑",
                ));
            }
            SpecialMove::EnPassant => {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Success,
                    "Pawn captured en passant!",
                    "♟️",
                ));
            }
            SpecialMove::Capture | SpecialMove::Normal => {}
        }

        if let Some(captured) = record.captured {
            if record.special != SpecialMove::EnPassant {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Success,
                    format!("Captured the {} {}!", captured.color, captured.kind.name()),
                    "♟️",
                ));
            }
        }

        match status {
            GameStatus::Check => {
                self.add_feedback(FeedbackMessage::plain(FeedbackKind::Info, "Check!", "⚠️"));
            }
            GameStatus::Checkmate => {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Info,
                    format!("Checkmate! {} wins.", mover_color),
                    "🏆",
                ));
            }
            GameStatus::Stalemate => {
                self.add_feedback(FeedbackMessage::plain(
                    FeedbackKind::Info,
                    "Stalemate. The game is a draw.",
                    "🤝",
                ));
            }
            GameStatus::Playing | GameStatus::Draw => {}
        }
    }

    fn emit_move_events(
        &mut self,
        mover: Piece,
        piece_after: Piece,
        record: &MoveRecord,
        status: GameStatus,
        next_player: Color,
        king_in_check: Option<Position>,
    ) {
        let event = match record.special {
            SpecialMove::CastleKingside => ChessEvent::castling(
                mover.color,
                CastleSide::KingSide,
                record.from,
                record.to,
            ),
            SpecialMove::CastleQueenside => ChessEvent::castling(
                mover.color,
                CastleSide::QueenSide,
                record.from,
                record.to,
            ),
            SpecialMove::Promotion => ChessEvent::promotion(piece_after, record.from, record.to),
            SpecialMove::Capture | SpecialMove::EnPassant => match record.captured {
                Some(captured) => {
                    ChessEvent::capture(piece_after, record.from, record.to, captured)
                }
                None => ChessEvent::moved(piece_after, record.from, record.to),
            },
            SpecialMove::Normal => ChessEvent::moved(piece_after, record.from, record.to),
        };
        self.events.publish(event);

        match status {
            GameStatus::Check => {
                if let Some(king) = king_in_check {
                    self.events.publish(ChessEvent::check(next_player, king));
                }
            }
            GameStatus::Checkmate => {
                if let Some(king) = king_in_check {
                    self.events.publish(ChessEvent::checkmate(next_player, king));
                }
            }
            GameStatus::Stalemate => self.events.publish(ChessEvent::stalemate()),
            GameStatus::Playing | GameStatus::Draw => {}
        }
    }

    /// Pop and revert the last committed move. Castling rights, the
    /// en-passant target, and the game status are deliberately not restored;
    /// a promotion move puts a pawn back on the origin square.
    pub fn undo_move(&mut self) {
        let Some(record) = self.state.move_history.pop() else {
            tracing::warn!("undo requested with empty history");
            self.add_feedback(FeedbackMessage::plain(
                FeedbackKind::Warning,
                "No move to undo.",
                "⚠️",
            ));
            return;
        };

        let restored_kind = if record.special == SpecialMove::Promotion {
            PieceKind::Pawn
        } else {
            record.piece.kind
        };
        self.state.board.set(
            record.from,
            Some(Piece::moved(restored_kind, record.piece.color)),
        );
        self.state.board.set(record.to, record.captured);

        self.state.current_player = self.state.current_player.opposite();
        self.state.selected = None;
        self.state.legal_moves = Vec::new();
        self.promotion_pending = None;

        self.add_feedback(FeedbackMessage::plain(FeedbackKind::Info, "Move undone.", "↩️"));
        tracing::debug!(notation = %record.notation, "move undone");
    }

    /// Replace the aggregate with a fresh game.
    pub fn reset_game(&mut self) {
        self.state = GameState::new_game();
        self.feedback.clear();
        self.modal_feedback = None;
        self.paused = false;
        self.promotion_pending = None;

        self.add_feedback(FeedbackMessage::plain(
            FeedbackKind::Info,
            "New game. White moves first.",
            "ℹ️",
        ));
        self.events.publish(ChessEvent::game_start());
        tracing::debug!("game reset");
    }

    /// Flip training mode; when on, every executed move also surfaces a
    /// didactic tip for the moved piece.
    pub fn toggle_training_mode(&mut self) {
        self.state.is_training_mode = !self.state.is_training_mode;
        let message = if self.state.is_training_mode {
            "Training mode on. You will see tips for your moves."
        } else {
            "Training mode off."
        };
        let icon = if self.state.is_training_mode { "📚" } else { "ℹ️" };
        self.add_feedback(FeedbackMessage::plain(FeedbackKind::Info, message, icon));
    }

    fn clear_selection(&mut self) {
        self.state.selected = None;
        self.state.legal_moves = Vec::new();
    }

    fn add_feedback(&mut self, mut message: FeedbackMessage) {
        self.feedback_seq += 1;
        message.id = format!("{}-{}", Utc::now().timestamp_millis(), self.feedback_seq);

        if message.kind.is_blocking() {
            self.modal_feedback = Some(message);
            self.paused = true;
        } else {
            self.feedback.push(message);
        }
    }
}

impl Default for ChessSession {
    fn default() -> Self {
        Self::new()
    }
}
