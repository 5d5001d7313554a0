use std::env;
use std::process::ExitCode;

use checkers_engine::board::{Board, Color, Engine, SearchParams, StdoutLogger};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: best_turn <white|black> <depth> [board-text]");
        return ExitCode::FAILURE;
    }

    let color: Color = match args[1].parse() {
        Ok(color) => color,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let depth: u32 = match args[2].parse() {
        Ok(depth) => depth,
        Err(err) => {
            eprintln!("invalid depth '{}': {err}", args[2]);
            return ExitCode::FAILURE;
        }
    };
    let board = match args.get(3) {
        Some(text) => match Board::try_from_text(text) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Board::initial(),
    };

    let params = SearchParams::new(depth).with_no_random(true);
    let mut engine = Engine::new(params).with_logger(Box::new(StdoutLogger));

    print!("{board}");
    let legal_moves = engine.legal_moves(&board, color);
    println!("side_to_move: {color}");
    println!("legal_moves: {}", legal_moves.len());
    for mv in legal_moves.iter() {
        println!("{mv}");
    }

    let turn = engine.find_best_turn(&board, color);
    if turn.is_empty() {
        println!("bestturn (none)");
    } else {
        println!("bestturn {turn}");
    }
    ExitCode::SUCCESS
}
