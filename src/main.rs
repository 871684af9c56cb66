use std::fs::File;
use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use chess_tutor::events::chess_event::{EventSink, JsonLineEventSink, NullEventSink};
use chess_tutor::game_state::chess_types::PieceKind;
use chess_tutor::session::game_session::ChessSession;
use chess_tutor::utils::algebraic::notation_to_position;
use chess_tutor::utils::render_board::render_board;

fn event_sink() -> Box<dyn EventSink> {
    match std::env::var("CHESS_TUTOR_EVENT_LOG") {
        Ok(path) => match File::create(&path) {
            Ok(file) => Box::new(JsonLineEventSink::new(file)),
            Err(error) => {
                eprintln!("cannot open event log {path}: {error}");
                Box::new(NullEventSink)
            }
        },
        Err(_) => Box::new(NullEventSink),
    }
}

fn print_session(session: &mut ChessSession) {
    println!("{}", render_board(&session.state().board));
    for message in session.take_feedback() {
        println!("{} {}", message.icon, message.message);
        if let Some(explanation) = &message.explanation {
            println!("   {explanation}");
        }
    }
    if let Some(modal) = session.modal_feedback() {
        println!("{} {}", modal.icon, modal.message);
        if let Some(explanation) = &modal.explanation {
            println!("   {explanation}");
        }
        println!("   (press enter to continue)");
    }
}

fn prompt(session: &ChessSession) -> String {
    if session.promotion_pending().is_some() {
        return "promote to [q/r/b/n]> ".to_owned();
    }
    match session.state().selected {
        Some(square) => format!("{} from {square}> ", session.state().current_player),
        None => format!("{}> ", session.state().current_player),
    }
}

fn promotion_choice(input: &str) -> Option<PieceKind> {
    match input {
        "q" | "queen" => Some(PieceKind::Queen),
        "r" | "rook" => Some(PieceKind::Rook),
        "b" | "bishop" => Some(PieceKind::Bishop),
        "n" | "knight" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = ChessSession::with_sink(event_sink());
    println!("Chess Tutor. Enter squares like e2, or: new, undo, train, quit.");
    print_session(&mut session);

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        print!("{}", prompt(&session));
        io::stdout().flush().ok();

        input.clear();
        let Ok(n) = stdin_lock.read_line(&mut input) else {
            break;
        };
        if n == 0 {
            break;
        }
        let trimmed = input.trim().to_ascii_lowercase();

        if session.modal_feedback().is_some() {
            session.dismiss_modal();
            if trimmed.is_empty() {
                continue;
            }
        }

        if session.promotion_pending().is_some() {
            match promotion_choice(&trimmed) {
                Some(kind) => session.promote_pawn(kind),
                None => println!("choose q, r, b, or n"),
            }
            print_session(&mut session);
            continue;
        }

        match trimmed.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => session.reset_game(),
            "undo" => session.undo_move(),
            "train" => session.toggle_training_mode(),
            square => match notation_to_position(square) {
                Ok(position) => session.select_square(position),
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            },
        }

        print_session(&mut session);
    }
}
