//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the terminal game driver and
//! for diagnostics in tests. Ghost squares render as empty.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};

/// Render the board to a Unicode string, White's back rank at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in (0..8u8).rev() {
        out.push(char::from(b'1' + y));
        out.push(' ');

        for x in 0..8 {
            let field = board.field(x, y);
            match piece_to_unicode(field.color, field.piece) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if x < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + y));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: Piece) -> Option<char> {
    match (color, piece) {
        (Color::White, Piece::Pawn) => Some('♙'),
        (Color::White, Piece::Knight) => Some('♘'),
        (Color::White, Piece::Bishop) => Some('♗'),
        (Color::White, Piece::Rook) => Some('♖'),
        (Color::White, Piece::Queen) => Some('♕'),
        (Color::White, Piece::King) => Some('♔'),
        (Color::Black, Piece::Pawn) => Some('♟'),
        (Color::Black, Piece::Knight) => Some('♞'),
        (Color::Black, Piece::Bishop) => Some('♝'),
        (Color::Black, Piece::Rook) => Some('♜'),
        (Color::Black, Piece::Queen) => Some('♛'),
        (Color::Black, Piece::King) => Some('♚'),
        _ => None,
    }
}
