//! Core value types for the 0x88 mailbox board.
//!
//! Squares are 0x88 indexes `rank * 16 + file` with `a1 == 0x00` and
//! `h8 == 0x77`. The right half of every rank (files 8..15) is padding: any
//! index with a bit of `0x88` set is off the board, so jump and ray walks test
//! the edge with one mask instead of separate file and rank range checks.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Number of slots in the padded board array.
pub const BOARD_SIZE: usize = 128;

/// Bits that mark a slot as off-board padding.
pub const OFF_BOARD_MASK: u8 = 0x88;

/// Board square as a 0x88 index.
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Number of distinct colored piece identities.
pub const PIECE_COUNT: usize = 12;

/// One of the twelve colored piece identities occupying a board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Dense identity index in `0..PIECE_COUNT` (light pieces first).
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * 6 + self.kind.index()
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= PIECE_COUNT {
            return None;
        }
        let color = if index < 6 { Color::Light } else { Color::Dark };
        let kind = ALL_PIECE_KINDS[index % 6];
        Some(Self { color, kind })
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = CASTLE_LIGHT_KINGSIDE
    | CASTLE_LIGHT_QUEENSIDE
    | CASTLE_DARK_KINGSIDE
    | CASTLE_DARK_QUEENSIDE;

pub const A1: Square = 0x00;
pub const B1: Square = 0x01;
pub const C1: Square = 0x02;
pub const D1: Square = 0x03;
pub const E1: Square = 0x04;
pub const F1: Square = 0x05;
pub const G1: Square = 0x06;
pub const H1: Square = 0x07;
pub const A8: Square = 0x70;
pub const B8: Square = 0x71;
pub const C8: Square = 0x72;
pub const D8: Square = 0x73;
pub const E8: Square = 0x74;
pub const F8: Square = 0x75;
pub const G8: Square = 0x76;
pub const H8: Square = 0x77;

#[inline]
pub const fn square(file: u8, rank: u8) -> Square {
    rank * 16 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 0x0F
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 4
}

#[inline]
pub const fn is_on_board(square: Square) -> bool {
    square & OFF_BOARD_MASK == 0
}

/// Step `offset` slots away from `square`, or `None` past the board edge.
///
/// Wrapping arithmetic makes every negative result land in `0x80..=0xFF`,
/// which the same mask rejects.
#[inline]
pub const fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = square.wrapping_add(offset as u8);
    if is_on_board(target) {
        Some(target)
    } else {
        None
    }
}

/// Reflect a square across the horizontal midline (a1 <-> a8).
#[inline]
pub const fn mirror_square(square: Square) -> Square {
    square ^ 0x70
}

/// The 64 playable squares in ascending 0x88 order (a1, b1, ..., h8).
pub fn board_squares() -> impl Iterator<Item = Square> {
    (0..BOARD_SIZE as u8).filter(|sq| is_on_board(*sq))
}
