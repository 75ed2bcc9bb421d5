//! Computer-opponent abstraction.
//!
//! The game driver talks to every opponent through the same queue/poll
//! pair, so the rules engine stays decoupled from whether moves come
//! from an external engine process or a local fallback.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, PlayerMove};

pub trait Opponent: Send {
    /// Short display name for the terminal UI.
    fn name(&self) -> &str;

    /// Hands the opponent the position it should move in. Non-blocking;
    /// the answer is retrieved through [`Opponent::poll_move`].
    fn queue_move_request(&mut self, board: &Board, player_turn: Color)
        -> Result<(), ChessErrors>;

    /// Polls for the opponent's choice. Returns `Ok(None)` while the
    /// opponent is still thinking. The returned move is always one of
    /// `legal_moves`, matched by origin and destination.
    fn poll_move(&mut self, legal_moves: &[Move]) -> Result<Option<PlayerMove>, ChessErrors>;
}
