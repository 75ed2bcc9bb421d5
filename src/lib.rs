//! A mailbox chess rules engine with a terminal game driver.
//!
//! The crate models the board as 64 fields, generates pseudo-legal moves,
//! filters them to legal moves by simulation, and applies committed moves
//! through a single ordered bookkeeping routine. En passant is handled
//! with transient one-ply ghost pieces, and castling rights derive from
//! per-field `moved` flags rather than separate state.
//!
//! Opponents plug in behind the [`engines::opponent_trait::Opponent`]
//! trait: an external UCI engine process when one is available, a random
//! mover otherwise.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod castling;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod rules {
    pub mod draw;
}

pub mod engines {
    pub mod opponent_trait;
    pub mod random_opponent;
    pub mod uci_opponent;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod render_game_state;
}
