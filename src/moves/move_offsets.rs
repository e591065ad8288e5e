//! Step offsets on the 0x88 board.
//!
//! Adding an offset to a square and masking with `0x88` is the whole edge
//! test, so every piece's movement is just a list of signed steps.

use crate::game_state::chess_types::{rank_of, Color, Square};

pub const KNIGHT_OFFSETS: [i8; 8] = [33, 31, 18, 14, -33, -31, -18, -14];
pub const BISHOP_OFFSETS: [i8; 4] = [15, 17, -15, -17];
pub const ROOK_OFFSETS: [i8; 4] = [16, -16, 1, -1];
pub const KING_OFFSETS: [i8; 8] = [16, -16, 1, -1, 15, 17, -15, -17];

/// Single-step pawn push for `color`.
#[inline]
pub const fn pawn_push_offset(color: Color) -> i8 {
    match color {
        Color::Light => 16,
        Color::Dark => -16,
    }
}

/// Diagonal pawn capture steps for `color`.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [i8; 2] {
    match color {
        Color::Light => [15, 17],
        Color::Dark => [-15, -17],
    }
}

/// Rank a pawn of `color` starts on and may double-push from.
#[inline]
pub const fn is_pawn_start_rank(color: Color, square: Square) -> bool {
    match color {
        Color::Light => rank_of(square) == 1,
        Color::Dark => rank_of(square) == 6,
    }
}

/// Rank from which a pawn of `color` promotes on its next step.
#[inline]
pub const fn is_pre_promotion_rank(color: Color, square: Square) -> bool {
    match color {
        Color::Light => rank_of(square) == 6,
        Color::Dark => rank_of(square) == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{offset_square, square};

    #[test]
    fn knight_in_corner_has_two_targets() {
        let targets = KNIGHT_OFFSETS
            .iter()
            .filter_map(|offset| offset_square(square(0, 0), *offset))
            .count();
        assert_eq!(targets, 2);
    }

    #[test]
    fn king_offsets_are_rook_and_bishop_steps() {
        for offset in ROOK_OFFSETS.iter().chain(BISHOP_OFFSETS.iter()) {
            assert!(KING_OFFSETS.contains(offset));
        }
    }

    #[test]
    fn pawn_ranks_mirror_between_colors() {
        assert!(is_pawn_start_rank(Color::Light, square(4, 1)));
        assert!(is_pawn_start_rank(Color::Dark, square(4, 6)));
        assert!(is_pre_promotion_rank(Color::Light, square(0, 6)));
        assert!(is_pre_promotion_rank(Color::Dark, square(0, 1)));
        assert_eq!(pawn_push_offset(Color::Dark), -pawn_push_offset(Color::Light));
    }
}
