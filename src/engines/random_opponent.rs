//! Uniform-random fallback opponent.
//!
//! Used when no external engine binary is available; also handy for
//! integration tests and smoke playouts.

use rand::prelude::IndexedRandom;

use crate::engines::opponent_trait::Opponent;
use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Piece, PlayerMove};

pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn name(&self) -> &str {
        "Random mover"
    }

    fn queue_move_request(
        &mut self,
        _board: &Board,
        _player_turn: Color,
    ) -> Result<(), ChessErrors> {
        // Nothing to precompute; the choice happens at poll time.
        Ok(())
    }

    fn poll_move(&mut self, legal_moves: &[Move]) -> Result<Option<PlayerMove>, ChessErrors> {
        let mut rng = rand::rng();
        let picked = legal_moves.choose(&mut rng).ok_or(ChessErrors::NoLegalMoves)?;

        Ok(Some(PlayerMove {
            mv: *picked,
            promotion: Piece::Queen,
        }))
    }
}
