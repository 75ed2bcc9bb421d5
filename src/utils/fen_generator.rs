//! FEN export for the external engine boundary.
//!
//! The rules core never parses FEN, since games always start from the
//! fixed initial placement. Every committed position is serialized here
//! and handed to the UCI engine as `position fen ...`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::utils::algebraic::position_to_algebraic;

/// FEN of the starting position in this crate's coordinate convention
/// (`y == 0` is White's back rank; ranks are emitted from `y == 7` down).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Serializes the position for `player_turn` to move: piece placement,
/// side to move, castling rights (derived from king/rook `moved` flags),
/// en-passant target (derived from the ghost, if any), the raw half-move
/// counter, and the full move number.
pub fn generate_fen(board: &Board, player_turn: Color) -> String {
    let placement = generate_placement_field(board);
    let side_to_move = match player_turn {
        Color::Black => "b",
        _ => "w",
    };
    let castling = generate_castling_field(board);
    let en_passant = generate_en_passant_field(board, player_turn);

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        board.half_move_counter,
        board.full_move_number
    )
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for y in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for x in 0..8 {
            let field = board.field(x, y);

            // Ghost squares serialize as empty.
            if field.is_solid_piece() {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                if let Some(ch) = piece_to_fen_char(field.color, field.piece) {
                    out.push(ch);
                }
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if y > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: Color, piece: Piece) -> Option<char> {
    let base = match piece {
        Piece::Pawn => 'p',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
        Piece::None | Piece::PawnGhost => return None,
    };

    Some(match color {
        Color::White => base.to_ascii_uppercase(),
        _ => base,
    })
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        let y = if color == Color::White { 0 } else { 7 };

        let king = board.field(4, y);
        if king.piece != Piece::King || king.moved {
            continue;
        }

        let king_side = board.field(7, y);
        let queen_side = board.field(0, y);

        if king_side.piece == Piece::Rook && !king_side.moved {
            out.push(if color == Color::White { 'K' } else { 'k' });
        }
        if queen_side.piece == Piece::Rook && !queen_side.moved {
            out.push(if color == Color::White { 'Q' } else { 'q' });
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(board: &Board, player_turn: Color) -> String {
    if board.pawn_ghosts > 0 {
        // The ghost belongs to the side that just moved.
        if let Some(ghost) = board.find_piece(player_turn.opposite(), Piece::PawnGhost) {
            return position_to_algebraic(ghost);
        }
    }

    "-".to_owned()
}
