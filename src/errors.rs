//! Errors used throughout the chess crate.
//!
//! The rules engine itself is total over well-formed boards and does not
//! return errors; `ChessErrors` covers the fallible edges of the crate:
//! coordinate/text parsing, terminal input, and the external UCI engine
//! process boundary.

use std::fmt;

/// Unified error type for the fallible parts of the crate.
#[derive(Debug)]
pub enum ChessErrors {
    /// A single character used during algebraic parsing was invalid.
    InvalidAlgebraicChar(char),
    /// An algebraic string (square or long-algebraic move) failed to parse.
    InvalidAlgebraicString(String),
    /// Reading or writing a local stream (stdin/stdout) failed.
    IoFailure(String),
    /// The external engine process could not be started, died, or its
    /// pipes broke.
    EngineProcessFailure(String),
    /// The external engine violated the UCI exchange this crate relies on
    /// (for example `bestmove (none)` for a position with legal moves).
    EngineProtocolViolation(String),
    /// The external engine answered with a move that does not match any
    /// entry of the legal move list it was asked about.
    EngineReturnedUnknownMove(String),
    /// No legal moves are available for the side to move.
    NoLegalMoves,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(c) => {
                write!(f, "invalid algebraic character: {c}")
            }
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid algebraic string: {s}")
            }
            ChessErrors::IoFailure(s) => write!(f, "i/o failure: {s}"),
            ChessErrors::EngineProcessFailure(s) => {
                write!(f, "engine process failure: {s}")
            }
            ChessErrors::EngineProtocolViolation(s) => {
                write!(f, "engine protocol violation: {s}")
            }
            ChessErrors::EngineReturnedUnknownMove(s) => {
                write!(f, "engine returned a move outside the legal list: {s}")
            }
            ChessErrors::NoLegalMoves => write!(f, "no legal moves available"),
        }
    }
}

impl std::error::Error for ChessErrors {}
