//! Natural-language diagnosis of rejected moves.
//!
//! Every outcome pairs a short message and a longer explanation with a stable
//! rule identifier. The identifiers are opaque cross-reference tokens for the
//! external explanation collaborator; nothing in the engine interprets them
//! beyond string identity.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

pub const RULE_TURN_VIOLATION: &str = "chess:TurnViolation";
pub const RULE_NO_SELECTION: &str = "chess:NoSelection";
pub const RULE_NO_LEGAL_MOVES: &str = "chess:NoLegalMoves";
pub const RULE_INVALID_PAWN_CAPTURE: &str = "chess:InvalidPawnCapture";
pub const RULE_INVALID_PAWN_MOVE: &str = "chess:InvalidPawnMove";
pub const RULE_INVALID_PAWN_DIRECTION: &str = "chess:InvalidPawnDirection";
pub const RULE_INVALID_ROOK_MOVE: &str = "chess:InvalidRookMove";
pub const RULE_ROOK_PATH_BLOCKED: &str = "chess:RookPathBlocked";
pub const RULE_INVALID_BISHOP_MOVE: &str = "chess:InvalidBishopMove";
pub const RULE_BISHOP_PATH_BLOCKED: &str = "chess:BishopPathBlocked";
pub const RULE_INVALID_QUEEN_MOVE: &str = "chess:InvalidQueenMove";
pub const RULE_QUEEN_PATH_BLOCKED: &str = "chess:QueenPathBlocked";
pub const RULE_INVALID_KING_MOVE: &str = "chess:InvalidKingMove";
pub const RULE_KING_INTO_CHECK: &str = "chess:KingIntoCheck";
pub const RULE_INVALID_KNIGHT_MOVE: &str = "chess:InvalidKnightMove";

/// One explanation triple. Same inputs always yield the same triple; the
/// generator holds no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveExplanation {
    pub message: String,
    pub explanation: String,
    pub rule: &'static str,
}

/// Diagnose why moving `piece` from `from` to `to` was rejected. Only called
/// for destinations already known to be outside the legal set, so the
/// per-piece arms distinguish wrong shape from blocked path (or, for the
/// king, a move into check).
pub fn piece_rule_explanation(
    piece: Piece,
    from: Position,
    to: Position,
    target: Option<Piece>,
    current_player: Color,
) -> MoveExplanation {
    if piece.color != current_player {
        return MoveExplanation {
            message: "It is not your turn".to_owned(),
            explanation: format!(
                "It is {current_player}'s turn to play. You cannot move your opponent's pieces."
            ),
            rule: RULE_TURN_VIOLATION,
        };
    }

    let dx = to.col.abs_diff(from.col);
    let dy = to.row.abs_diff(from.row);

    match piece.kind {
        PieceKind::Pawn => {
            let direction = piece.color.pawn_direction();
            let row_delta = to.row as i8 - from.row as i8;
            let is_forward = row_delta == direction || row_delta == 2 * direction;
            let is_diagonal = dx == 1 && row_delta == direction;

            if is_diagonal && target.is_none() {
                return MoveExplanation {
                    message: "Diagonal capture is not possible".to_owned(),
                    explanation: format!(
                        "A pawn may only capture diagonally, and only when an enemy piece \
                         occupies the target square. The square {to} is empty."
                    ),
                    rule: RULE_INVALID_PAWN_CAPTURE,
                };
            }
            if dx == 0 && target.is_some() {
                return MoveExplanation {
                    message: "A pawn cannot capture straight ahead".to_owned(),
                    explanation: format!(
                        "Pawns advance straight but capture only on the diagonals. A piece \
                         blocks the way on {to}."
                    ),
                    rule: RULE_INVALID_PAWN_MOVE,
                };
            }
            if !is_forward {
                return MoveExplanation {
                    message: "A pawn cannot move backwards".to_owned(),
                    explanation: "A pawn only ever moves towards the opposing side; it can \
                                  never retreat."
                        .to_owned(),
                    rule: RULE_INVALID_PAWN_DIRECTION,
                };
            }
            MoveExplanation {
                message: "Invalid pawn move".to_owned(),
                explanation: "A pawn advances one square (or two from its starting square) \
                              and captures diagonally. This move follows neither rule."
                    .to_owned(),
                rule: RULE_INVALID_PAWN_MOVE,
            }
        }

        PieceKind::Rook => {
            if dx != 0 && dy != 0 {
                return MoveExplanation {
                    message: "A rook does not move diagonally".to_owned(),
                    explanation: "The rook moves only in straight lines, horizontally or \
                                  vertically, over any number of squares. Diagonals belong to \
                                  the bishop and the queen."
                        .to_owned(),
                    rule: RULE_INVALID_ROOK_MOVE,
                };
            }
            MoveExplanation {
                message: "Rook move is blocked".to_owned(),
                explanation: format!(
                    "A rook cannot jump over other pieces. One or more pieces block the path \
                     to {to}."
                ),
                rule: RULE_ROOK_PATH_BLOCKED,
            }
        }

        PieceKind::Bishop => {
            if dx != dy {
                return MoveExplanation {
                    message: "A bishop only moves diagonally".to_owned(),
                    explanation: "The bishop moves only along diagonals, over any number of \
                                  squares, and always stays on its starting square color."
                        .to_owned(),
                    rule: RULE_INVALID_BISHOP_MOVE,
                };
            }
            MoveExplanation {
                message: "Bishop move is blocked".to_owned(),
                explanation: format!(
                    "A bishop cannot jump over other pieces. One or more pieces block the \
                     diagonal to {to}."
                ),
                rule: RULE_BISHOP_PATH_BLOCKED,
            }
        }

        PieceKind::Queen => {
            if dx != dy && dx != 0 && dy != 0 {
                return MoveExplanation {
                    message: "Invalid queen move".to_owned(),
                    explanation: "The queen combines the rook and the bishop: straight lines \
                                  or diagonals, but never the knight's L-shape."
                        .to_owned(),
                    rule: RULE_INVALID_QUEEN_MOVE,
                };
            }
            MoveExplanation {
                message: "Queen move is blocked".to_owned(),
                explanation: format!(
                    "The queen cannot jump over other pieces. One or more pieces block the \
                     path to {to}."
                ),
                rule: RULE_QUEEN_PATH_BLOCKED,
            }
        }

        PieceKind::King => {
            if dx > 1 || dy > 1 {
                return MoveExplanation {
                    message: "The king moves one square at a time".to_owned(),
                    explanation: "The king may move in any direction, but only one square. A \
                                  two-square king move is castling, which has its own \
                                  conditions."
                        .to_owned(),
                    rule: RULE_INVALID_KING_MOVE,
                };
            }
            MoveExplanation {
                message: "The king would be in check".to_owned(),
                explanation: "The king cannot step onto a square attacked by an enemy piece. \
                              That square is controlled by your opponent."
                    .to_owned(),
                rule: RULE_KING_INTO_CHECK,
            }
        }

        PieceKind::Knight => {
            let is_l_shape = (dx == 2 && dy == 1) || (dx == 1 && dy == 2);
            if !is_l_shape {
                return MoveExplanation {
                    message: "A knight moves in an L-shape".to_owned(),
                    explanation: "The knight moves two squares in one direction and then one \
                                  square perpendicular to it. It is the only piece that may \
                                  jump over others."
                        .to_owned(),
                    rule: RULE_INVALID_KNIGHT_MOVE,
                };
            }
            MoveExplanation {
                message: "Invalid knight move".to_owned(),
                explanation: "The knight must complete an L-shaped move: two squares plus one \
                              square perpendicular."
                    .to_owned(),
                rule: RULE_INVALID_KNIGHT_MOVE,
            }
        }
    }
}

/// Clicking a destination with nothing selected. The session treats that
/// click as a silent no-op, so no built-in path emits this; it completes the
/// rule vocabulary for front-ends that want to surface the situation instead.
pub fn empty_square_explanation() -> MoveExplanation {
    MoveExplanation {
        message: "No piece selected".to_owned(),
        explanation: "First click one of your pieces to select it, then click its destination \
                      square."
            .to_owned(),
        rule: RULE_NO_SELECTION,
    }
}

/// Selecting an opponent piece.
pub fn wrong_color_explanation(current_player: Color) -> MoveExplanation {
    MoveExplanation {
        message: "That is not your piece".to_owned(),
        explanation: format!(
            "It is {current_player}'s turn. You may only select your own pieces."
        ),
        rule: RULE_TURN_VIOLATION,
    }
}

/// Selecting an owned piece that has no legal destination.
pub fn no_legal_moves_explanation(kind: PieceKind) -> MoveExplanation {
    MoveExplanation {
        message: format!("The {} is stuck", kind.name()),
        explanation: "This piece has no legal move available. It is either blocked by other \
                      pieces, or every one of its moves would leave your king in check."
            .to_owned(),
        rule: RULE_NO_LEGAL_MOVES,
    }
}
