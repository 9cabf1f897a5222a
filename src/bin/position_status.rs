use std::env;
use std::process::ExitCode;

use chess_rules::board::STARTING_FEN;
use chess_rules::{Game, GameStatus, PieceKind, Position};

/// Parse `e2e4` or `e7e8q`
fn parse_move(text: &str) -> Option<(Position, Position, Option<PieceKind>)> {
    let from = text.get(0..2)?.parse().ok()?;
    let to = text.get(2..4)?.parse().ok()?;
    let promotion = match text.get(4..) {
        None | Some("") => None,
        Some(rest) => {
            let mut chars = rest.chars();
            let kind = PieceKind::from_char(chars.next()?)?;
            if chars.next().is_some() {
                return None;
            }
            Some(kind)
        }
    };
    Some((from, to, promotion))
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|a| a == "-h" || a == "--help") {
        eprintln!("usage: position_status [\"<fen>\"] [move1 move2 ...]");
        return ExitCode::SUCCESS;
    }

    let (fen, moves) = match args.first() {
        Some(first) if first.contains('/') => (first.as_str(), &args[1..]),
        _ => (STARTING_FEN, &args[..]),
    };

    let mut game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for text in moves {
        let Some((from, to, promotion)) = parse_move(text) else {
            eprintln!("error: cannot parse move '{text}'");
            return ExitCode::FAILURE;
        };
        let Some(piece) = game.board().piece_at(from) else {
            eprintln!("error: no piece on {from}");
            return ExitCode::FAILURE;
        };
        if let Err(err) = game.apply_move(piece, from, to, promotion) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let turn = game.current_turn();
    let legal_moves = game.all_legal_moves();
    println!("side_to_move: {turn}");
    println!("in_check: {}", game.is_in_check(turn));
    match game.status() {
        GameStatus::Ongoing => println!("status: ongoing"),
        GameStatus::Checkmate { winner } => println!("status: checkmate ({winner} wins)"),
        GameStatus::Stalemate => println!("status: stalemate"),
    }
    println!("halfmove_clock: {}", game.halfmove_clock());
    println!("legal_moves: {}", legal_moves.len());
    for (from, mv) in legal_moves {
        println!("{from}{} {mv:?}", mv.destination());
    }
    ExitCode::SUCCESS
}
