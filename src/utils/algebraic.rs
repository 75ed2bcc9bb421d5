//! Coordinate text conversions.
//!
//! Converts between board positions and long-algebraic coordinate text
//! ("e4", "e2e4", "e7e8q") as used on the UCI wire and at the terminal
//! prompt. This is plain coordinate parsing; SAN/PGN are out of scope.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Piece, PlayerMove, Position};

/// Formats a position as a square name, for example `e4`.
pub fn position_to_algebraic(position: Position) -> String {
    let file = char::from(b'a' + position.x);
    let rank = char::from(b'1' + position.y);
    format!("{file}{rank}")
}

/// Parses a square name, for example `e4`.
pub fn algebraic_to_position(text: &str) -> Result<Position, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(Position::new(file - b'a', rank - b'1'))
}

/// Parses a long-algebraic move ("e2e4", "e7e8q") into origin, destination,
/// and the promotion piece (`Piece::None` when no promotion suffix is
/// present).
pub fn parse_long_algebraic(text: &str) -> Result<(Position, Position, Piece), ChessErrors> {
    // Byte indexing below is only sound on ASCII input.
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;

    let promotion = match text.as_bytes().get(4).copied() {
        None => Piece::None,
        Some(b'q') | Some(b'Q') => Piece::Queen,
        Some(b'n') | Some(b'N') => Piece::Knight,
        Some(b'b') | Some(b'B') => Piece::Bishop,
        Some(b'r') | Some(b'R') => Piece::Rook,
        Some(other) => return Err(ChessErrors::InvalidAlgebraicChar(other as char)),
    };

    Ok((from, to, promotion))
}

/// Formats a chosen move back into long algebraic, appending the promotion
/// letter when the move promotes.
pub fn format_long_algebraic(player_move: &PlayerMove) -> String {
    let mut out = position_to_algebraic(player_move.mv.from);
    out.push_str(&position_to_algebraic(player_move.mv.to));

    if player_move.mv.promotes {
        out.push(match player_move.promotion {
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            _ => 'q',
        });
    }

    out
}
