//! Canonical chess-rule constants.
//!
//! Reference positions used for setup and perft validation, and the
//! per-square castling-rights mask applied on every move.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// "Kiwipete": castling, pins, en passant and promotions within a few plies.
pub const TRICKY_POSITION_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/// Promotion-heavy position with an en-passant square set on the first ply.
pub const KILLER_POSITION_FEN: &str =
    "rnbqkb1r/pp1p1pPp/8/2p1pP2/1P1P4/3P3P/P1P1P3/RNBQKBNR w KQkq e6 0 1";

/// Castling rights that survive a move touching each square.
///
/// A right is cleared whenever either endpoint of a move is the home square
/// of the king or rook it depends on, whatever piece stands there.
pub const CASTLING_RIGHTS_MASKS: [CastlingRights; BOARD_SIZE] = build_castling_rights_masks();

const fn build_castling_rights_masks() -> [CastlingRights; BOARD_SIZE] {
    let mut masks = [CASTLE_ALL; BOARD_SIZE];
    masks[A1 as usize] = CASTLE_ALL & !CASTLE_LIGHT_QUEENSIDE;
    masks[E1 as usize] = CASTLE_ALL & !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
    masks[H1 as usize] = CASTLE_ALL & !CASTLE_LIGHT_KINGSIDE;
    masks[A8 as usize] = CASTLE_ALL & !CASTLE_DARK_QUEENSIDE;
    masks[E8 as usize] = CASTLE_ALL & !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    masks[H8 as usize] = CASTLE_ALL & !CASTLE_DARK_KINGSIDE;
    masks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_masks_match_home_squares() {
        assert_eq!(CASTLING_RIGHTS_MASKS[A1 as usize], 13);
        assert_eq!(CASTLING_RIGHTS_MASKS[E1 as usize], 12);
        assert_eq!(CASTLING_RIGHTS_MASKS[H1 as usize], 14);
        assert_eq!(CASTLING_RIGHTS_MASKS[A8 as usize], 7);
        assert_eq!(CASTLING_RIGHTS_MASKS[E8 as usize], 3);
        assert_eq!(CASTLING_RIGHTS_MASKS[H8 as usize], 11);

        let untouched = board_squares()
            .filter(|sq| ![A1, E1, H1, A8, E8, H8].contains(sq))
            .all(|sq| CASTLING_RIGHTS_MASKS[sq as usize] == CASTLE_ALL);
        assert!(untouched);
    }
}
