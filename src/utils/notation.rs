//! Move-notation builder.
//!
//! Produces the short-algebraic string stored in each history record: pawn
//! pushes ("e4"), pawn and en-passant captures ("exd5"), piece moves and
//! captures ("Nf3", "Qxh4"), castling ("O-O" / "O-O-O"), and the promotion
//! suffix ("e8=Q"). Replaying the fields of a stored record reproduces its
//! notation exactly; `piece` carries the post-move identity, so promotions
//! are recognized by their special-move tag rather than the piece kind.

use crate::game_state::chess_types::{Piece, PieceKind, Position, SpecialMove};

pub fn create_move_notation(
    piece: Piece,
    from: Position,
    to: Position,
    captured: Option<Piece>,
    special: SpecialMove,
    promotion: Option<PieceKind>,
) -> String {
    match special {
        SpecialMove::CastleKingside => return "O-O".to_owned(),
        SpecialMove::CastleQueenside => return "O-O-O".to_owned(),
        _ => {}
    }

    let is_pawn_move = piece.kind == PieceKind::Pawn || special == SpecialMove::Promotion;
    let is_capture = captured.is_some() || special == SpecialMove::EnPassant;
    let destination = to.to_string();

    let mut notation = if is_pawn_move {
        if is_capture {
            let from_file = char::from(b'a' + from.col);
            format!("{from_file}x{destination}")
        } else {
            destination
        }
    } else {
        let letter = piece.kind.notation_letter();
        if is_capture {
            format!("{letter}x{destination}")
        } else {
            format!("{letter}{destination}")
        }
    };

    if special == SpecialMove::Promotion {
        let promoted = promotion.unwrap_or(PieceKind::Queen);
        notation.push('=');
        notation.push_str(promoted.notation_letter());
    }

    notation
}
