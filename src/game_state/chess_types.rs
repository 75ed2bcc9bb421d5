//! Core value types for the mailbox board representation.
//!
//! Everything here is a small `Copy` value: the board is an array of
//! `Field`s, moves carry coordinates plus three flags, and simulation works
//! on whole-board clones instead of undo logs.

/// Side identity. `None` only ever marks an empty square; rule functions
/// are never called with it as a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    None,
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// Forward direction of this side's pawns along the `y` axis.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
            Color::None => 0,
        }
    }
}

/// Piece kind occupying a field.
///
/// `PawnGhost` is not a real piece: it marks, for exactly one ply, the
/// square a pawn skipped when advancing two ranks, so that en passant is
/// expressible as "capture the piece on the target square". Ghosts are
/// never capture targets for non-pawn moves and never count as material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    None,
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
    PawnGhost,
}

/// Pieces a pawn may promote to.
pub const PROMOTION_PIECES: [Piece; 4] = [Piece::Queen, Piece::Knight, Piece::Rook, Piece::Bishop];

/// One cell of the board.
///
/// `moved` is set the first time a committed move populates the square and
/// is the sole source of truth for castling eligibility (king/rook) and
/// pawn double-step eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub color: Color,
    pub piece: Piece,
    pub moved: bool,
}

impl Field {
    pub const EMPTY: Field = Field {
        color: Color::None,
        piece: Piece::None,
        moved: false,
    };

    /// A real, capturable unit: anything other than an empty square or a
    /// pawn ghost.
    #[inline]
    pub const fn is_solid_piece(self) -> bool {
        !matches!(self.piece, Piece::None | Piece::PawnGhost)
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::EMPTY
    }
}

/// Board coordinate. `x` is the file, `y` the rank order with `y == 0` as
/// White's back rank; both are in `0..8` by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Position { x, y }
    }
}

/// A candidate or committed move.
///
/// `captures` is set for any move removing a solid enemy piece, including
/// en passant, but never for moves merely landing on a ghost square.
/// `promotes` is set exactly when a pawn move terminates on the farthest
/// rank; the promotion piece itself is chosen at apply time. `castles` is
/// set only for the two ±2-file king moves; the rook relocation is derived
/// from the move direction when the move is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captures: bool,
    pub promotes: bool,
    pub castles: bool,
}

/// A move together with the player's promotion choice. The promotion piece
/// is ignored unless `mv.promotes` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMove {
    pub mv: Move,
    pub promotion: Piece,
}
