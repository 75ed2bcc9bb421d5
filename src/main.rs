//! Terminal chess: a human playing White against a computer opponent.
//!
//! If a UCI engine binary is found in the working directory it is used as
//! the opponent, otherwise a random mover steps in.

use std::io::Write;
use std::time::Duration;

use quince_chess::engines::opponent_trait::Opponent;
use quince_chess::engines::random_opponent::RandomOpponent;
use quince_chess::engines::uci_opponent::UciOpponent;
use quince_chess::errors::ChessErrors;
use quince_chess::game_state::board::Board;
use quince_chess::game_state::chess_types::{Color, Move, Piece, PlayerMove};
use quince_chess::move_generation::apply_move::apply_player_move;
use quince_chess::move_generation::legal_move_generator::{
    generate_legal_moves, is_king_under_attack,
};
use quince_chess::rules::draw::{is_fifty_move_rule_draw, is_material_insufficient};
use quince_chess::utils::algebraic::parse_long_algebraic;
use quince_chess::utils::render_game_state::render_board;

fn main() {
    if let Err(err) = run_game() {
        eprintln!("game aborted: {err}");
        std::process::exit(1);
    }
}

fn run_game() -> Result<(), ChessErrors> {
    let mut opponent = build_opponent()?;
    println!("Playing against: {}", opponent.name());

    let mut board = Board::new();
    let mut player_turn = Color::White;

    loop {
        println!("\n{}\n", render_board(&board));

        let legal_moves = generate_legal_moves(&board, player_turn);
        let in_check = is_king_under_attack(&board, player_turn);

        if legal_moves.is_empty() {
            if in_check {
                println!("Checkmate! {:?} wins!", player_turn.opposite());
            } else {
                println!("Draw via stalemate");
            }
            return Ok(());
        }
        if is_material_insufficient(&board) {
            println!("Draw via insufficient material");
            return Ok(());
        }
        if is_fifty_move_rule_draw(&board) {
            println!("Draw via 50 move rule");
            return Ok(());
        }

        if in_check {
            println!("{player_turn:?} is in check");
        }

        let chosen = match player_turn {
            Color::White => prompt_human_move(&legal_moves)?,
            _ => await_opponent_move(opponent.as_mut(), &board, player_turn, &legal_moves)?,
        };

        apply_player_move(&mut board, &chosen);
        player_turn = player_turn.opposite();
    }
}

fn build_opponent() -> Result<Box<dyn Opponent>, ChessErrors> {
    match UciOpponent::discover() {
        Some(engine_path) => {
            println!("Found engine binary at {}", engine_path.display());
            Ok(Box::new(UciOpponent::spawn(&engine_path)?))
        }
        None => Ok(Box::new(RandomOpponent::new())),
    }
}

/// Prompts until the human enters a legal move in long algebraic form,
/// for example `e2e4` or `e7e8q`. Promotions without a suffix default to
/// a queen.
fn prompt_human_move(legal_moves: &[Move]) -> Result<PlayerMove, ChessErrors> {
    loop {
        print!("Your move: ");
        std::io::stdout()
            .flush()
            .map_err(|err| ChessErrors::IoFailure(err.to_string()))?;

        let mut line = String::new();
        let bytes = std::io::stdin()
            .read_line(&mut line)
            .map_err(|err| ChessErrors::IoFailure(err.to_string()))?;
        if bytes == 0 {
            return Err(ChessErrors::IoFailure("stdin closed".to_owned()));
        }

        let text = line.trim();
        let (from, to, promotion) = match parse_long_algebraic(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match legal_moves.iter().find(|mv| mv.from == from && mv.to == to) {
            Some(mv) => {
                let promotion = if mv.promotes && promotion == Piece::None {
                    Piece::Queen
                } else {
                    promotion
                };
                return Ok(PlayerMove {
                    mv: *mv,
                    promotion,
                });
            }
            None => println!("{text} is not a legal move here"),
        }
    }
}

fn await_opponent_move(
    opponent: &mut dyn Opponent,
    board: &Board,
    player_turn: Color,
    legal_moves: &[Move],
) -> Result<PlayerMove, ChessErrors> {
    opponent.queue_move_request(board, player_turn)?;

    loop {
        if let Some(chosen) = opponent.poll_move(legal_moves)? {
            return Ok(chosen);
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}
