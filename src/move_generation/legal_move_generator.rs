//! Full legal move generation pipeline.
//!
//! Pseudo-legal generation plus castling, filtered by simulating every
//! candidate on a board clone and discarding the ones that leave the
//! mover's own king attacked. This is the only move-generation entry point
//! callers should use.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Piece};
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::castling::add_castling_moves;
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;

/// Pseudo-legal moves plus castling, still ignoring king safety.
pub fn generate_moves_with_castling(board: &Board, player_turn: Color) -> Vec<Move> {
    let mut moves = generate_pseudo_legal_moves(board, player_turn);
    add_castling_moves(board, player_turn, &mut moves);
    moves
}

/// Every move `player_turn` may actually play: pseudo-legal plus castling,
/// minus anything that exposes the mover's own king.
pub fn generate_legal_moves(board: &Board, player_turn: Color) -> Vec<Move> {
    let mut moves = generate_moves_with_castling(board, player_turn);

    moves.retain(|&mv| {
        let mut after = board.clone();
        // The promotion choice cannot affect check exposure, so a fixed
        // placeholder piece is enough for the simulation.
        apply_move(&mut after, mv, Piece::Queen);
        !is_king_under_attack(&after, player_turn)
    });

    moves
}

/// Whether `player_turn`'s king is attacked by any opposing pseudo-legal
/// move. Castling never captures, so plain pseudo-legal moves suffice.
pub fn is_king_under_attack(board: &Board, player_turn: Color) -> bool {
    generate_pseudo_legal_moves(board, player_turn.opposite())
        .iter()
        .any(|mv| {
            let field = board.field_at(mv.to);
            field.piece == Piece::King && field.color == player_turn
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Field, Position};

    fn place(board: &mut Board, x: u8, y: u8, color: Color, piece: Piece, moved: bool) {
        board.set_field(x, y, Field { color, piece, moved });
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let board = Board::new();
        assert_eq!(generate_legal_moves(&board, Color::White).len(), 20);
    }

    #[test]
    fn black_has_twenty_replies_to_every_opening_move() {
        let board = Board::new();
        for mv in generate_legal_moves(&board, Color::White) {
            let mut after = board.clone();
            apply_move(&mut after, mv, Piece::Queen);
            assert_eq!(
                generate_legal_moves(&after, Color::Black).len(),
                20,
                "black should have 20 replies after {:?}",
                mv
            );
        }
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let board = Board::new();
        for mv in generate_legal_moves(&board, Color::White) {
            let mut after = board.clone();
            apply_move(&mut after, mv, Piece::Queen);
            assert!(!is_king_under_attack(&after, Color::White));
        }
    }

    #[test]
    fn pinned_piece_must_stay_on_the_pin_line() {
        let mut board = Board::blank();
        place(&mut board, 4, 0, Color::White, Piece::King, true);
        place(&mut board, 4, 1, Color::White, Piece::Rook, true);
        place(&mut board, 4, 7, Color::Black, Piece::Rook, true);
        place(&mut board, 0, 7, Color::Black, Piece::King, true);

        let rook_moves: Vec<_> = generate_legal_moves(&board, Color::White)
            .into_iter()
            .filter(|mv| mv.from == Position::new(4, 1))
            .collect();

        assert!(!rook_moves.is_empty());
        assert!(rook_moves.iter().all(|mv| mv.to.x == 4));
        assert!(rook_moves
            .iter()
            .any(|mv| mv.to == Position::new(4, 7) && mv.captures));
    }

    #[test]
    fn king_may_not_step_into_an_attacked_square() {
        let mut board = Board::blank();
        place(&mut board, 4, 0, Color::White, Piece::King, true);
        place(&mut board, 3, 7, Color::Black, Piece::Rook, true);
        place(&mut board, 0, 7, Color::Black, Piece::King, true);

        let king_moves = generate_legal_moves(&board, Color::White);
        assert!(!king_moves.is_empty());
        assert!(king_moves.iter().all(|mv| mv.to.x != 3));
    }

    #[test]
    fn check_detection_sees_knights_and_sliders() {
        let mut board = Board::blank();
        place(&mut board, 4, 0, Color::White, Piece::King, true);
        place(&mut board, 0, 7, Color::Black, Piece::King, true);
        assert!(!is_king_under_attack(&board, Color::White));

        place(&mut board, 5, 2, Color::Black, Piece::Knight, true);
        assert!(is_king_under_attack(&board, Color::White));

        place(&mut board, 5, 2, Color::None, Piece::None, false);
        place(&mut board, 7, 3, Color::Black, Piece::Bishop, true);
        assert!(is_king_under_attack(&board, Color::White));
    }

    #[test]
    fn smothered_mate_position_has_no_legal_moves() {
        // Back-rank corner mate: king h1 boxed in by its own pawns with a
        // knight delivering check from f2.
        let mut board = Board::blank();
        place(&mut board, 7, 0, Color::White, Piece::King, true);
        place(&mut board, 6, 1, Color::White, Piece::Pawn, true);
        place(&mut board, 7, 1, Color::White, Piece::Pawn, true);
        place(&mut board, 6, 0, Color::White, Piece::Rook, true);
        place(&mut board, 5, 1, Color::Black, Piece::Knight, true);
        place(&mut board, 0, 7, Color::Black, Piece::King, true);

        assert!(is_king_under_attack(&board, Color::White));
        let moves = generate_legal_moves(&board, Color::White);
        assert!(
            moves.is_empty(),
            "expected checkmate, found moves: {:?}",
            moves
        );
    }
}
