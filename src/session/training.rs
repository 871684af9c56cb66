//! Didactic tips shown after each move in training mode.

use rand::prelude::IndexedRandom;

use crate::game_state::chess_types::PieceKind;

const PAWN_TIPS: &[&str] = &[
    "Pawns advance straight ahead but capture diagonally.",
    "Control the center with your pawns early in the game.",
    "A passed pawn can become a fearsome threat.",
];

const KNIGHT_TIPS: &[&str] = &[
    "Knights excel in closed positions.",
    "Knights move in an L-shape and can jump over pieces.",
    "Place your knights in the center for maximum control.",
];

const BISHOP_TIPS: &[&str] = &[
    "Bishops are powerful on long diagonals.",
    "The bishop pair can be a significant advantage.",
    "Bishops excel in open positions.",
];

const ROOK_TIPS: &[&str] = &[
    "Rooks are strongest on open files.",
    "Connect your rooks for maximum power.",
    "The seventh rank is ideal for rooks.",
];

const QUEEN_TIPS: &[&str] = &[
    "Do not bring your queen out too early.",
    "The queen is your most powerful piece.",
    "Use the queen to create multiple threats.",
];

const KING_TIPS: &[&str] = &[
    "Keep your king safe, especially in the middlegame.",
    "In the endgame, the king becomes an active piece.",
    "Castle early to protect your king.",
];

/// One uniformly chosen tip for the moved piece's kind.
pub fn training_hint(kind: PieceKind) -> &'static str {
    let tips = match kind {
        PieceKind::Pawn => PAWN_TIPS,
        PieceKind::Knight => KNIGHT_TIPS,
        PieceKind::Bishop => BISHOP_TIPS,
        PieceKind::Rook => ROOK_TIPS,
        PieceKind::Queen => QUEEN_TIPS,
        PieceKind::King => KING_TIPS,
    };
    let mut rng = rand::rng();
    tips.choose(&mut rng)
        .copied()
        .unwrap_or("Look at the whole board before you move.")
}
