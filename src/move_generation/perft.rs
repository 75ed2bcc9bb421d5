//! Perft: exhaustive legal-move-tree counting.
//!
//! Used by tests and benchmarks to pin the generator against known node
//! counts. A promoting move counts once here, since the promotion piece
//! choice is external to `Move` the tree does not branch over it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Piece};
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn count_leaf(&mut self, board: &Board, mv: Move) {
        self.nodes += 1;

        if mv.captures {
            self.captures += 1;
            if board.field_at(mv.to).piece == Piece::PawnGhost {
                self.en_passant += 1;
            }
        }
        if mv.castles {
            self.castles += 1;
        }
        if mv.promotes {
            self.promotions += 1;
        }
    }
}

/// Counts the legal move tree of the given depth, classifying the moves at
/// the leaves.
pub fn perft(board: &Board, player_turn: Color, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();

    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in generate_legal_moves(board, player_turn) {
        if depth == 1 {
            total.count_leaf(board, mv);
        } else {
            let mut after = board.clone();
            apply_move(&mut after, mv, Piece::Queen);
            total.merge(perft(&after, player_turn.opposite(), depth - 1));
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_is_a_single_node() {
        let counts = perft(&Board::new(), Color::White, 0);
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 0);
    }

    #[test]
    fn perft_startpos_depth_one_and_two() {
        let board = Board::new();
        assert_eq!(perft(&board, Color::White, 1).nodes, 20);
        assert_eq!(perft(&board, Color::White, 2).nodes, 400);
    }

    #[test]
    fn perft_startpos_depth_three() {
        let counts = perft(&Board::new(), Color::White, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.castles, 0);
        assert_eq!(counts.promotions, 0);
    }
}
