//! Abstract gameplay events for the external explanation collaborator.
//!
//! Each significant transition produces one [`ChessEvent`] record: squares as
//! algebraic strings, piece and color names as lowercase words. The session
//! publishes records through an injected [`EventSink`] and never waits on or
//! reads anything back from it, so a slow or failing collaborator cannot
//! affect game state.

use std::io::Write;
use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::game_state::chess_types::{CastleSide, Color, Piece, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChessEventType {
    Move,
    Capture,
    Check,
    Checkmate,
    Castling,
    Promotion,
    Stalemate,
    PieceSelect,
    GameStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessEvent {
    #[serde(rename = "type")]
    pub event_type: ChessEventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_piece: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub castling_side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl ChessEvent {
    fn bare(event_type: ChessEventType) -> Self {
        Self {
            event_type,
            piece: None,
            piece_color: None,
            from: None,
            to: None,
            captured_piece: None,
            promotion_piece: None,
            castling_side: None,
            winner: None,
        }
    }

    pub fn game_start() -> Self {
        Self::bare(ChessEventType::GameStart)
    }

    pub fn piece_select(piece: Piece, at: Position) -> Self {
        Self {
            piece: Some(piece.kind.name().to_owned()),
            piece_color: Some(piece.color.name().to_owned()),
            from: Some(at.to_string()),
            ..Self::bare(ChessEventType::PieceSelect)
        }
    }

    pub fn moved(piece: Piece, from: Position, to: Position) -> Self {
        Self {
            piece: Some(piece.kind.name().to_owned()),
            piece_color: Some(piece.color.name().to_owned()),
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            ..Self::bare(ChessEventType::Move)
        }
    }

    pub fn capture(piece: Piece, from: Position, to: Position, captured: Piece) -> Self {
        Self {
            captured_piece: Some(captured.kind.name().to_owned()),
            ..Self::moved(piece, from, to).with_type(ChessEventType::Capture)
        }
    }

    pub fn castling(color: Color, side: CastleSide, from: Position, to: Position) -> Self {
        Self {
            piece: Some("king".to_owned()),
            piece_color: Some(color.name().to_owned()),
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            castling_side: Some(side.name().to_owned()),
            ..Self::bare(ChessEventType::Castling)
        }
    }

    pub fn promotion(piece: Piece, from: Position, to: Position) -> Self {
        Self {
            promotion_piece: Some(piece.kind.name().to_owned()),
            ..Self::moved(piece, from, to).with_type(ChessEventType::Promotion)
        }
    }

    pub fn check(color_in_check: Color, king: Position) -> Self {
        Self {
            piece: Some("king".to_owned()),
            piece_color: Some(color_in_check.name().to_owned()),
            to: Some(king.to_string()),
            ..Self::bare(ChessEventType::Check)
        }
    }

    pub fn checkmate(loser: Color, king: Position) -> Self {
        Self {
            winner: Some(loser.opposite().name().to_owned()),
            ..Self::check(loser, king).with_type(ChessEventType::Checkmate)
        }
    }

    pub fn stalemate() -> Self {
        Self::bare(ChessEventType::Stalemate)
    }

    fn with_type(mut self, event_type: ChessEventType) -> Self {
        self.event_type = event_type;
        self
    }
}

/// Boundary the session publishes through. Implementations must not feed
/// anything back into move legality.
pub trait EventSink {
    fn publish(&mut self, event: ChessEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn publish(&mut self, _event: ChessEvent) {}
}

/// Forwards events over an mpsc channel; the receiving half is free to batch,
/// drop, or query an external collaborator. Used as the test double.
#[derive(Debug)]
pub struct ChannelEventSink {
    sender: Sender<ChessEvent>,
}

impl ChannelEventSink {
    pub fn new(sender: Sender<ChessEvent>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelEventSink {
    fn publish(&mut self, event: ChessEvent) {
        // A disconnected receiver must not disturb the game.
        let _ = self.sender.send(event);
    }
}

/// Writes one JSON object per line, the shape external collaborators consume.
#[derive(Debug)]
pub struct JsonLineEventSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineEventSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> EventSink for JsonLineEventSink<W> {
    fn publish(&mut self, event: ChessEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => {
                if writeln!(self.writer, "{line}").is_err() {
                    tracing::warn!("event sink writer failed; event dropped");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to serialize chess event"),
        }
    }
}
