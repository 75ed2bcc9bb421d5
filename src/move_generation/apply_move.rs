//! Move application and its special-move bookkeeping.
//!
//! `apply_move` assumes its move argument came from the most recent legal
//! move list for the same board and color; anything else is a precondition
//! violation. Debug builds assert the cheap invariants and fail loudly,
//! release builds trust the caller.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Field, Move, Piece, PlayerMove};

/// Mutates `board` in place for a chosen move. `promotion` is only
/// consulted when `mv.promotes` is set.
///
/// The steps are order-sensitive: counters, piece relocation (with
/// promotion), en-passant removal, ghost expiry, ghost creation, castling
/// rook relocation.
pub fn apply_move(board: &mut Board, mv: Move, promotion: Piece) {
    let from_field = board.field_at(mv.from);
    let to_field = board.field_at(mv.to);

    debug_assert!(
        from_field.is_solid_piece(),
        "apply_move: origin square {:?} holds no solid piece",
        mv.from
    );
    debug_assert!(
        from_field.color != Color::None,
        "apply_move: origin square {:?} has no owner",
        mv.from
    );

    if from_field.piece == Piece::Pawn || mv.captures {
        board.half_move_counter = 0;
    } else {
        board.half_move_counter += 1;
    }

    if from_field.color == Color::Black {
        board.full_move_number += 1;
    }

    // Relocate the piece, promoting it if needed.
    board.set_field_at(mv.from, Field::EMPTY);
    board.set_field_at(
        mv.to,
        Field {
            color: from_field.color,
            piece: if mv.promotes { promotion } else { from_field.piece },
            moved: true,
        },
    );

    // En passant: the captured pawn sits one rank behind the ghost, toward
    // the ghost owner's side.
    if mv.captures && to_field.piece == Piece::PawnGhost {
        let pawn_y = (mv.to.y as i8 + to_field.color.pawn_direction()) as u8;
        board.set_field(mv.to.x, pawn_y, Field::EMPTY);
        board.pawn_ghosts -= 1;
    }

    // Ghosts live for exactly one ply.
    if board.pawn_ghosts > 0 {
        for y in 0..8 {
            for x in 0..8 {
                if board.field(x, y).piece == Piece::PawnGhost {
                    board.set_field(x, y, Field::EMPTY);
                }
            }
        }

        board.pawn_ghosts = 0;
    }

    // A two-rank pawn advance leaves a ghost on the skipped square.
    if from_field.piece == Piece::Pawn && (mv.from.y as i8 - mv.to.y as i8).abs() == 2 {
        let ghost_y = (mv.to.y as i8 - from_field.color.pawn_direction()) as u8;
        board.set_field(
            mv.to.x,
            ghost_y,
            Field {
                color: from_field.color,
                piece: Piece::PawnGhost,
                moved: true,
            },
        );
        board.pawn_ghosts += 1;
    }

    if mv.castles {
        // -1 = queen side, +1 = king side.
        let direction = (mv.to.x as i8 - mv.from.x as i8) / 2;

        let rook_x = if direction == -1 { 0 } else { 7 };
        let rook = board.field(rook_x, mv.from.y);
        let rook_dest_x = (mv.from.x as i8 + direction) as u8;

        board.set_field(rook_x, mv.from.y, Field::EMPTY);
        board.set_field(
            rook_dest_x,
            mv.from.y,
            Field {
                color: rook.color,
                piece: rook.piece,
                moved: true,
            },
        );
    }
}

/// Applies a move together with the player's promotion choice.
pub fn apply_player_move(board: &mut Board, player_move: &PlayerMove) {
    apply_move(board, player_move.mv, player_move.promotion);
}
