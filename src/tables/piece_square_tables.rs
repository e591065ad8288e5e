//! Material values and positional bonus tables.
//!
//! Tables are written from Light's point of view with the eighth rank on the
//! first line, as a board diagram reads. Dark pieces look up the vertically
//! mirrored square so one table serves both colors.

use crate::game_state::chess_types::*;

#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 350,
        PieceKind::Rook => 500,
        PieceKind::Queen => 1000,
        PieceKind::King => 10000,
    }
}

#[rustfmt::skip]
pub const PAWN_TABLE: [i32; 64] = [
    90,  90,  90,  90,  90,  90,  90,  90,
    30,  30,  30,  40,  40,  30,  30,  30,
    20,  20,  20,  30,  30,  30,  20,  20,
    10,  10,  10,  20,  20,  10,  10,  10,
     5,   5,  10,  20,  20,   5,   5,   5,
     0,   0,   0,   5,   5,   0,   0,   0,
     0,   0,   0, -10, -10,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [i32; 64] = [
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,  10,  10,   0,   0,  -5,
    -5,   5,  20,  20,  20,  20,   5,  -5,
    -5,  10,  20,  30,  30,  20,  10,  -5,
    -5,  10,  20,  30,  30,  20,  10,  -5,
    -5,   5,  20,  10,  10,  20,   5,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5, -10,   0,   0,   0,   0, -10,  -5,
];

#[rustfmt::skip]
pub const BISHOP_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,  10,  10,   0,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,  10,   0,   0,   0,   0,  10,   0,
     0,  10,   0,   0,   0,   0,  10,   0,
     0,   0, -10,   0,   0, -10,   0,   0,
];

#[rustfmt::skip]
pub const ROOK_TABLE: [i32; 64] = [
    50,  50,  50,  50,  50,  50,  50,  50,
    50,  50,  50,  50,  50,  50,  50,  50,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,   0,  20,  20,   0,   0,   0,
];

#[rustfmt::skip]
pub const KING_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   5,   5,   5,   5,   0,   0,
     0,   5,   5,  10,  10,   5,   5,   0,
     0,   5,  10,  20,  20,  10,   5,   0,
     0,   5,  10,  20,  20,  10,   5,   0,
     0,   0,   5,  10,  10,   5,   0,   0,
     0,   5,   5,  -5,  -5,   0,   5,   0,
     0,   0,   5,   0, -15,   0,  10,   0,
];

/// Table slot for a square seen from `color`'s side of the board.
#[inline]
pub const fn table_index(color: Color, square: Square) -> usize {
    let relative = match color {
        Color::Light => square,
        Color::Dark => mirror_square(square),
    };
    ((7 - rank_of(relative)) as usize) * 8 + file_of(relative) as usize
}

/// Positional bonus for `piece` standing on `square`; queens have none.
#[inline]
pub fn positional_value(piece: Piece, square: Square) -> i32 {
    let index = table_index(piece.color, square);
    match piece.kind {
        PieceKind::Pawn => PAWN_TABLE[index],
        PieceKind::Knight => KNIGHT_TABLE[index],
        PieceKind::Bishop => BISHOP_TABLE[index],
        PieceKind::Rook => ROOK_TABLE[index],
        PieceKind::Queen => 0,
        PieceKind::King => KING_TABLE[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_read_like_a_diagram() {
        let light_pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let dark_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        // Light's e2 pawn is discouraged from staying home.
        assert_eq!(positional_value(light_pawn, square(4, 1)), -10);
        // Dark's e7 pawn is the mirror of e2.
        assert_eq!(positional_value(dark_pawn, square(4, 6)), -10);
        assert_eq!(positional_value(light_pawn, square(0, 6)), 30);
    }

    #[test]
    fn castled_king_square_is_rewarded() {
        let king = Piece::new(Color::Light, PieceKind::King);
        assert_eq!(positional_value(king, G1), 10);
        assert_eq!(positional_value(king, E1), -15);
        let dark_king = Piece::new(Color::Dark, PieceKind::King);
        assert_eq!(positional_value(dark_king, G8), 10);
    }
}
