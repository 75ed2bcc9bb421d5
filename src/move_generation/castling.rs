//! Castling rule evaluation.
//!
//! Castling is layered on top of the pseudo-legal generator: the opponent's
//! pseudo-legal move targets provide the attack information gating the
//! king's transit squares. The produced move stores only the king's
//! destination; the rook relocation is derived at apply time.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Field, Move, Piece, Position};
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;

/// Appends the legal castling moves (king shifts ±2 files) for
/// `player_turn`:
/// - king unmoved and not currently attacked,
/// - neither square the king crosses or lands on attacked,
/// - the corresponding rook present and unmoved, with every square strictly
///   between king and rook empty.
pub fn add_castling_moves(board: &Board, player_turn: Color, moves: &mut Vec<Move>) {
    let Some(king_pos) = board.find_piece(player_turn, Piece::King) else {
        return;
    };

    if board.field_at(king_pos).moved {
        return;
    }

    let kx = king_pos.x as i8;
    let mut queen_side_blocked = false;
    let mut king_side_blocked = false;

    for mv in generate_pseudo_legal_moves(board, player_turn.opposite()) {
        // Castling is impossible while the king is attacked.
        if mv.to == king_pos {
            return;
        }

        if mv.to.y != king_pos.y {
            continue;
        }

        let tx = mv.to.x as i8;
        if tx == kx - 1 || tx == kx - 2 {
            queen_side_blocked = true;
        }
        if tx == kx + 1 || tx == kx + 2 {
            king_side_blocked = true;
        }
    }

    if queen_side_blocked && king_side_blocked {
        return;
    }

    let rank = king_pos.y;
    let is_valid_rook = |field: Field| {
        !field.moved && field.piece == Piece::Rook && field.color == player_turn
    };
    // Half-open range: every square strictly between king and rook.
    let is_path_clear =
        |from_x: u8, to_x: u8| (from_x..to_x).all(|x| !board.field(x, rank).is_solid_piece());

    if !queen_side_blocked
        && kx - 2 >= 0
        && is_valid_rook(board.field(0, rank))
        && is_path_clear(1, king_pos.x)
    {
        moves.push(Move {
            from: king_pos,
            to: Position::new((kx - 2) as u8, rank),
            castles: true,
            ..Move::default()
        });
    }

    if !king_side_blocked
        && kx + 2 <= 7
        && is_valid_rook(board.field(7, rank))
        && is_path_clear(king_pos.x + 1, 7)
    {
        moves.push(Move {
            from: king_pos,
            to: Position::new((kx + 2) as u8, rank),
            castles: true,
            ..Move::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, x: u8, y: u8, color: Color, piece: Piece, moved: bool) {
        board.set_field(x, y, Field { color, piece, moved });
    }

    fn castling_targets(board: &Board, player_turn: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        add_castling_moves(board, player_turn, &mut moves);
        assert!(moves.iter().all(|mv| mv.castles));
        moves.iter().map(|mv| mv.to).collect()
    }

    fn both_sides_castlable() -> Board {
        let mut board = Board::blank();
        place(&mut board, 4, 0, Color::White, Piece::King, false);
        place(&mut board, 0, 0, Color::White, Piece::Rook, false);
        place(&mut board, 7, 0, Color::White, Piece::Rook, false);
        place(&mut board, 4, 7, Color::Black, Piece::King, false);
        board
    }

    #[test]
    fn both_castling_moves_when_all_conditions_hold() {
        let board = both_sides_castlable();
        let targets = castling_targets(&board, Color::White);
        assert!(targets.contains(&Position::new(2, 0)));
        assert!(targets.contains(&Position::new(6, 0)));
    }

    #[test]
    fn moved_king_or_rook_disables_castling() {
        let mut board = both_sides_castlable();
        place(&mut board, 7, 0, Color::White, Piece::Rook, true);
        let targets = castling_targets(&board, Color::White);
        assert_eq!(targets, vec![Position::new(2, 0)]);

        place(&mut board, 4, 0, Color::White, Piece::King, true);
        assert!(castling_targets(&board, Color::White).is_empty());
    }

    #[test]
    fn occupied_path_disables_that_side() {
        let mut board = both_sides_castlable();
        place(&mut board, 1, 0, Color::White, Piece::Knight, false);
        let targets = castling_targets(&board, Color::White);
        assert_eq!(targets, vec![Position::new(6, 0)]);
    }

    #[test]
    fn attacked_transit_square_disables_that_side() {
        let mut board = both_sides_castlable();
        // Black rook covering f1 from f8.
        place(&mut board, 5, 7, Color::Black, Piece::Rook, true);
        let targets = castling_targets(&board, Color::White);
        assert_eq!(targets, vec![Position::new(2, 0)]);
    }

    #[test]
    fn checked_king_may_not_castle_at_all() {
        let mut board = both_sides_castlable();
        // Black rook attacking e1 down the e-file.
        place(&mut board, 4, 5, Color::Black, Piece::Rook, true);
        assert!(castling_targets(&board, Color::White).is_empty());
    }

    #[test]
    fn missing_rook_disables_that_side() {
        let mut board = both_sides_castlable();
        place(&mut board, 0, 0, Color::None, Piece::None, false);
        let targets = castling_targets(&board, Color::White);
        assert_eq!(targets, vec![Position::new(6, 0)]);
    }
}
