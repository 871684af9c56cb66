//! Crate root module declarations for the Chess Tutor engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! the interactive session, explanations, events, and utility helpers) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_executor;
    pub mod raw_move_shared;
    pub mod raw_moves;
    pub mod raw_moves_bishop;
    pub mod raw_moves_king;
    pub mod raw_moves_knight;
    pub mod raw_moves_pawn;
    pub mod raw_moves_queen;
    pub mod raw_moves_rook;
}

pub mod session {
    pub mod feedback;
    pub mod game_session;
    pub mod training;
}

pub mod explanations {
    pub mod move_explanations;
}

pub mod events {
    pub mod chess_event;
}

pub mod utils {
    pub mod algebraic;
    pub mod notation;
    pub mod render_board;
}

pub mod chess_errors;
