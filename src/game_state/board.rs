//! Mailbox board storage and derived queries.
//!
//! `Board` owns the 64 fields plus the move counters; it performs no rule
//! validation of its own. Move generation and application are the sole
//! authorities on legality. The struct is a plain value type: legality
//! filtering and history/undo both work by cloning whole boards.

use crate::game_state::chess_types::{Color, Field, Piece, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub fields: [Field; 64],

    /// Plies since the last capture or pawn advance, for the fifty-move
    /// rule. Stored doubled: incremented every ply, consumed as `/ 2`.
    pub half_move_counter: u32,

    /// Full move number. Starts at 1 and increments after Black moves.
    pub full_move_number: u32,

    /// Number of `PawnGhost` fields currently on the board (0 or 1 between
    /// moves).
    pub pawn_ghosts: u8,
}

impl Board {
    /// Standard initial position; every field starts with `moved == false`.
    pub fn new() -> Self {
        let mut board = Self::blank();

        let mut place_pair = |x: u8, y: u8, piece: Piece| {
            board.set_field(
                x,
                y,
                Field {
                    color: Color::White,
                    piece,
                    moved: false,
                },
            );
            board.set_field(
                x,
                7 - y,
                Field {
                    color: Color::Black,
                    piece,
                    moved: false,
                },
            );
        };

        place_pair(0, 0, Piece::Rook);
        place_pair(7, 0, Piece::Rook);

        place_pair(1, 0, Piece::Knight);
        place_pair(6, 0, Piece::Knight);

        place_pair(2, 0, Piece::Bishop);
        place_pair(5, 0, Piece::Bishop);

        place_pair(3, 0, Piece::Queen);
        place_pair(4, 0, Piece::King);

        for x in 0..8 {
            place_pair(x, 1, Piece::Pawn);
        }

        board
    }

    /// A board with no pieces at all. Useful for building test positions;
    /// regular games always start from [`Board::new`].
    pub fn blank() -> Self {
        Board {
            fields: [Field::EMPTY; 64],
            half_move_counter: 0,
            full_move_number: 1,
            pawn_ghosts: 0,
        }
    }

    #[inline]
    fn index(x: u8, y: u8) -> usize {
        x as usize + y as usize * 8
    }

    #[inline]
    pub fn field(&self, x: u8, y: u8) -> Field {
        self.fields[Self::index(x, y)]
    }

    #[inline]
    pub fn field_at(&self, position: Position) -> Field {
        self.field(position.x, position.y)
    }

    #[inline]
    pub fn set_field(&mut self, x: u8, y: u8, field: Field) {
        self.fields[Self::index(x, y)] = field;
    }

    #[inline]
    pub fn set_field_at(&mut self, position: Position, field: Field) {
        self.set_field(position.x, position.y, field);
    }

    /// First field (scanning rank by rank) holding the given piece of the
    /// given color.
    pub fn find_piece(&self, color: Color, piece: Piece) -> Option<Position> {
        for y in 0..8 {
            for x in 0..8 {
                let field = self.field(x, y);
                if field.piece == piece && field.color == color {
                    return Some(Position::new(x, y));
                }
            }
        }

        None
    }

    /// Halved counter consumed by the fifty-move rule.
    #[inline]
    pub fn moves_since_capture_or_pawn_move(&self) -> u32 {
        self.half_move_counter / 2
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
