//! Move records and their packed integer form.
//!
//! Generation and execution work on `ChessMove`, a plain record with named
//! fields. Search tables (killers, principal variation) store the packed
//! `u32` form, where `NO_MOVE == 0` is the empty-slot sentinel: no real move
//! has equal source and target squares.

use crate::game_state::chess_types::{Piece, Square, PIECE_COUNT};

/// Upper bound on pseudo-legal moves in any reachable position.
pub const MAX_MOVES: usize = 256;

/// Moves produced by one generation call.
pub type MoveList = Vec<ChessMove>;

/// Packed move: source, target, promotion and flags in one integer.
pub type PackedMove = u32;
pub const NO_MOVE: PackedMove = 0;

pub const FLAG_CAPTURE: u8 = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 1;
pub const FLAG_EN_PASSANT: u8 = 1 << 2;
pub const FLAG_CASTLING: u8 = 1 << 3;
const FLAGS_MASK: u8 = FLAG_CAPTURE | FLAG_DOUBLE_PAWN_PUSH | FLAG_EN_PASSANT | FLAG_CASTLING;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 7;
const PROMOTION_SHIFT: u32 = 14;
const FLAGS_SHIFT: u32 = 18;

const SQUARE_MASK: u32 = 0x7F;
const PROMOTION_MASK: u32 = 0xF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// Piece that replaces the pawn on the final rank.
    pub promotion: Option<Piece>,
    pub flags: u8,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square, flags: u8) -> Self {
        Self {
            from,
            to,
            promotion: None,
            flags,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Piece, flags: u8) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
            flags,
        }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    #[inline]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub fn pack(self) -> PackedMove {
        let promotion = self.promotion.map_or(0, |piece| piece.index() as u32 + 1);
        ((self.from as u32 & SQUARE_MASK) << FROM_SHIFT)
            | ((self.to as u32 & SQUARE_MASK) << TO_SHIFT)
            | (promotion << PROMOTION_SHIFT)
            | (u32::from(self.flags & FLAGS_MASK) << FLAGS_SHIFT)
    }

    /// Decode a packed move; `None` for `NO_MOVE` or a bad promotion code.
    pub fn unpack(packed: PackedMove) -> Option<Self> {
        if packed == NO_MOVE {
            return None;
        }

        let promotion_code = ((packed >> PROMOTION_SHIFT) & PROMOTION_MASK) as usize;
        let promotion = match promotion_code {
            0 => None,
            code if code <= PIECE_COUNT => Some(Piece::from_index(code - 1)?),
            _ => return None,
        };

        Some(Self {
            from: ((packed >> FROM_SHIFT) & SQUARE_MASK) as Square,
            to: ((packed >> TO_SHIFT) & SQUARE_MASK) as Square,
            promotion,
            flags: (packed >> FLAGS_SHIFT) as u8 & FLAGS_MASK,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{square, Color, PieceKind, E8};

    const E7: Square = square(4, 6);

    #[test]
    fn packing_keeps_every_field() {
        let promotion = Piece::new(Color::Light, PieceKind::Knight);
        let mv = ChessMove::with_promotion(square(3, 6), E8, promotion, FLAG_CAPTURE);
        let packed = mv.pack();

        assert_ne!(packed, NO_MOVE);
        assert_eq!(ChessMove::unpack(packed), Some(mv));
    }

    #[test]
    fn quiet_move_has_no_flags_or_promotion() {
        let mv = ChessMove::new(E7, square(4, 5), 0);
        let decoded = ChessMove::unpack(mv.pack()).expect("real move should decode");
        assert!(!decoded.is_capture());
        assert!(!decoded.is_double_pawn_push());
        assert!(!decoded.is_en_passant());
        assert!(!decoded.is_castling());
        assert_eq!(decoded.promotion, None);
    }

    #[test]
    fn sentinel_and_corrupt_codes_do_not_decode() {
        assert_eq!(ChessMove::unpack(NO_MOVE), None);
        let bad_promotion = ChessMove::new(E7, E8, 0).pack() | (0xF << PROMOTION_SHIFT);
        assert_eq!(ChessMove::unpack(bad_promotion), None);
    }
}
