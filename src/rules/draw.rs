//! Draw detection: insufficient material and the fifty-move rule.
//!
//! Checkmate and stalemate are not decided here; the game driver derives
//! them from an empty legal move list combined with the check status.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};

/// Dead-position check over solid pieces (kings assumed present):
/// - king against king,
/// - king against king and a single minor piece (bishop or knight),
/// - king and bishop against king and bishop with both bishops on squares
///   of the same color parity.
pub fn is_material_insufficient(board: &Board) -> bool {
    let mut white: Vec<(Piece, bool)> = Vec::new();
    let mut black: Vec<(Piece, bool)> = Vec::new();

    for y in 0..8 {
        for x in 0..8 {
            let field = board.field(x, y);
            if !field.is_solid_piece() {
                continue;
            }

            let entry = (field.piece, (x + y) % 2 == 0);
            match field.color {
                Color::White => white.push(entry),
                Color::Black => black.push(entry),
                Color::None => {}
            }
        }
    }

    let (smaller, larger) = if white.len() <= black.len() {
        (white, black)
    } else {
        (black, white)
    };

    if smaller.len() == 1 {
        // king against king
        if larger.len() == 1 {
            return true;
        }

        // king against king and bishop, or king and knight
        if larger.len() == 2
            && larger
                .iter()
                .any(|&(piece, _)| piece == Piece::Bishop || piece == Piece::Knight)
        {
            return true;
        }
    }

    if smaller.len() == 2 && larger.len() == 2 {
        let a = non_king_entry(&smaller);
        let b = non_king_entry(&larger);
        if let (Some((Piece::Bishop, parity_a)), Some((Piece::Bishop, parity_b))) = (a, b) {
            if parity_a == parity_b {
                return true;
            }
        }
    }

    false
}

fn non_king_entry(pieces: &[(Piece, bool)]) -> Option<(Piece, bool)> {
    pieces.iter().copied().find(|&(piece, _)| piece != Piece::King)
}

/// Fifty-move rule over the halved counter.
pub fn is_fifty_move_rule_draw(board: &Board) -> bool {
    board.moves_since_capture_or_pawn_move() >= 50
}
