//! Pseudo-legal move generation for every piece type.
//!
//! Moves produced here obey per-piece movement geometry but ignore king
//! safety and castling; `legal_move_generator` layers both on top. Output
//! order is unspecified.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Field, Move, Piece, Position};

const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Every move available to `player_turn`'s pieces under per-piece movement
/// rules, ignoring whether the mover's own king stays safe.
pub fn generate_pseudo_legal_moves(board: &Board, player_turn: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    for y in 0..8 {
        for x in 0..8 {
            let field = board.field(x, y);
            if !field.is_solid_piece() || field.color != player_turn {
                continue;
            }

            moves_for_field(board, Position::new(x, y), field, &mut moves);
        }
    }

    moves
}

fn moves_for_field(board: &Board, from: Position, field: Field, moves: &mut Vec<Move>) {
    match field.piece {
        Piece::Pawn => pawn_moves(board, from, field, moves),
        Piece::Bishop => slider_moves(board, from, field, &DIAGONAL_DIRECTIONS, moves),
        Piece::Knight => knight_moves(board, from, field, moves),
        Piece::Rook => slider_moves(board, from, field, &STRAIGHT_DIRECTIONS, moves),
        Piece::Queen => {
            slider_moves(board, from, field, &STRAIGHT_DIRECTIONS, moves);
            slider_moves(board, from, field, &DIAGONAL_DIRECTIONS, moves);
        }
        Piece::King => king_moves(board, from, field, moves),
        Piece::None | Piece::PawnGhost => {}
    }
}

#[inline]
fn is_within_board(x: i8, y: i8) -> bool {
    (0..8).contains(&x) && (0..8).contains(&y)
}

/// Records a single-step move onto `to` under the shared occupancy rule.
/// Returns whether a sliding ray may continue past the target square.
fn step_to(board: &Board, from: Position, to: Position, field: Field, moves: &mut Vec<Move>) -> bool {
    let target = board.field_at(to);

    if target.is_solid_piece() {
        if target.color != field.color {
            moves.push(Move {
                from,
                to,
                captures: true,
                ..Move::default()
            });
        }

        false
    } else {
        // En passant is only allowed for pawns, so moving onto a ghost
        // square here never captures; the square counts as empty.
        moves.push(Move {
            from,
            to,
            ..Move::default()
        });

        true
    }
}

fn slider_moves(
    board: &Board,
    from: Position,
    field: Field,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(ox, oy) in directions {
        let mut fx = from.x as i8 + ox;
        let mut fy = from.y as i8 + oy;

        while is_within_board(fx, fy) {
            if !step_to(board, from, Position::new(fx as u8, fy as u8), field, moves) {
                break;
            }

            fx += ox;
            fy += oy;
        }
    }
}

fn knight_moves(board: &Board, from: Position, field: Field, moves: &mut Vec<Move>) {
    for long in [-2i8, 2] {
        for short in [-1i8, 1] {
            for (ox, oy) in [(long, short), (short, long)] {
                let fx = from.x as i8 + ox;
                let fy = from.y as i8 + oy;
                if is_within_board(fx, fy) {
                    step_to(board, from, Position::new(fx as u8, fy as u8), field, moves);
                }
            }
        }
    }
}

fn king_moves(board: &Board, from: Position, field: Field, moves: &mut Vec<Move>) {
    for oy in -1i8..=1 {
        for ox in -1i8..=1 {
            if ox == 0 && oy == 0 {
                continue;
            }

            let fx = from.x as i8 + ox;
            let fy = from.y as i8 + oy;
            if is_within_board(fx, fy) {
                step_to(board, from, Position::new(fx as u8, fy as u8), field, moves);
            }
        }
    }
}

fn pawn_moves(board: &Board, from: Position, field: Field, moves: &mut Vec<Move>) {
    let direction = field.color.pawn_direction();
    let max_advance = if field.moved { 1 } else { 2 };

    for step in 1..=max_advance {
        let dy = from.y as i8 + step * direction;
        if !(0..8).contains(&dy) {
            break;
        }

        let target = board.field(from.x, dy as u8);
        if target.is_solid_piece() {
            break;
        }

        moves.push(Move {
            from,
            to: Position::new(from.x, dy as u8),
            promotes: dy == 0 || dy == 7,
            ..Move::default()
        });
    }

    for x_offset in [-1i8, 1] {
        let dx = from.x as i8 + x_offset;
        let dy = from.y as i8 + direction;
        if !is_within_board(dx, dy) {
            continue;
        }

        let target = board.field(dx as u8, dy as u8);

        // An enemy ghost on the diagonal is the en passant capture case.
        if target.piece == Piece::None || target.color == field.color {
            continue;
        }

        moves.push(Move {
            from,
            to: Position::new(dx as u8, dy as u8),
            captures: true,
            promotes: dy == 0 || dy == 7,
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

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = Board::new();
        assert_eq!(generate_pseudo_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(generate_pseudo_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn lone_rook_covers_fourteen_squares() {
        let mut board = Board::blank();
        place(&mut board, 3, 3, Color::White, Piece::Rook, true);

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|mv| !mv.captures));
    }

    #[test]
    fn slider_ray_stops_on_first_occupied_square() {
        let mut board = Board::blank();
        place(&mut board, 0, 0, Color::White, Piece::Rook, true);
        place(&mut board, 0, 3, Color::Black, Piece::Pawn, true);
        place(&mut board, 3, 0, Color::White, Piece::Pawn, true);

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        let rook_moves: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from == Position::new(0, 0))
            .collect();

        // Up the file: a2, a3, then the capture on a4. Along the rank: b1,
        // c1, stopping short of the friendly pawn on d1.
        assert_eq!(rook_moves.len(), 5);
        let capture = rook_moves
            .iter()
            .find(|mv| mv.to == Position::new(0, 3))
            .expect("rook should capture the enemy pawn");
        assert!(capture.captures);
        assert!(!rook_moves.iter().any(|mv| mv.to == Position::new(3, 0)));
    }

    #[test]
    fn knight_jumps_from_corner() {
        let mut board = Board::blank();
        place(&mut board, 0, 0, Color::White, Piece::Knight, true);

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        let mut targets: Vec<_> = moves.iter().map(|mv| mv.to).collect();
        targets.sort_by_key(|p| (p.x, p.y));
        assert_eq!(targets, vec![Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn pawn_double_step_requires_unmoved_flag_and_empty_path() {
        let mut board = Board::blank();
        place(&mut board, 4, 1, Color::White, Piece::Pawn, false);

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 2);

        // Same pawn marked as moved only advances a single square.
        place(&mut board, 4, 1, Color::White, Piece::Pawn, true);
        assert_eq!(generate_pseudo_legal_moves(&board, Color::White).len(), 1);

        // A blocker two squares ahead removes just the double step.
        place(&mut board, 4, 1, Color::White, Piece::Pawn, false);
        place(&mut board, 4, 3, Color::Black, Piece::Pawn, true);
        let moves = generate_pseudo_legal_moves(&board, Color::White);
        assert_eq!(
            moves
                .iter()
                .filter(|mv| mv.from == Position::new(4, 1))
                .count(),
            1
        );
    }

    #[test]
    fn pawn_diagonals_need_an_enemy_occupant() {
        let mut board = Board::blank();
        place(&mut board, 4, 3, Color::White, Piece::Pawn, true);
        place(&mut board, 3, 4, Color::Black, Piece::Knight, true);
        place(&mut board, 5, 4, Color::White, Piece::Bishop, true);

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        let pawn_moves: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from == Position::new(4, 3))
            .collect();

        assert_eq!(pawn_moves.len(), 2);
        assert!(pawn_moves
            .iter()
            .any(|mv| mv.to == Position::new(3, 4) && mv.captures));
        assert!(!pawn_moves.iter().any(|mv| mv.to == Position::new(5, 4)));
    }

    #[test]
    fn pawn_captures_enemy_ghost_diagonally() {
        let mut board = Board::blank();
        place(&mut board, 4, 4, Color::White, Piece::Pawn, true);
        place(&mut board, 3, 5, Color::Black, Piece::PawnGhost, true);
        place(&mut board, 3, 4, Color::Black, Piece::Pawn, true);
        board.pawn_ghosts = 1;

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        let en_passant = moves
            .iter()
            .find(|mv| mv.from == Position::new(4, 4) && mv.to == Position::new(3, 5))
            .expect("pawn should capture the ghost");
        assert!(en_passant.captures);
    }

    #[test]
    fn non_pawn_treats_ghost_square_as_empty() {
        let mut board = Board::blank();
        place(&mut board, 0, 0, Color::White, Piece::Rook, true);
        place(&mut board, 0, 3, Color::Black, Piece::PawnGhost, true);
        board.pawn_ghosts = 1;

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        let onto_ghost = moves
            .iter()
            .find(|mv| mv.to == Position::new(0, 3))
            .expect("rook should be able to pass over the ghost square");
        assert!(!onto_ghost.captures);

        // The ray continues past the ghost.
        assert!(moves.iter().any(|mv| mv.to == Position::new(0, 7)));
    }

    #[test]
    fn pawn_reaching_last_rank_is_flagged_as_promotion() {
        let mut board = Board::blank();
        place(&mut board, 0, 6, Color::White, Piece::Pawn, true);
        place(&mut board, 1, 7, Color::Black, Piece::Rook, true);

        let moves = generate_pseudo_legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.promotes));
        assert!(moves
            .iter()
            .any(|mv| mv.to == Position::new(1, 7) && mv.captures));
    }
}
