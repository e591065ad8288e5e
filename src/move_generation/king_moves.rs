use crate::game_state::chess_types::*;
use crate::move_generation::attack_checks::is_square_attacked;
use crate::move_generation::knight_moves::generate_step_moves;
use crate::moves::move_descriptions::{ChessMove, MoveList, FLAG_CASTLING};
use crate::moves::move_offsets::KING_OFFSETS;

/// One castling option: right bit, king path and the squares that must be empty.
struct CastlePath {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    transit: Square,
    empty: &'static [Square],
}

const LIGHT_CASTLES: [CastlePath; 2] = [
    CastlePath {
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: E1,
        king_to: G1,
        transit: F1,
        empty: &[F1, G1],
    },
    CastlePath {
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: E1,
        king_to: C1,
        transit: D1,
        empty: &[D1, C1, B1],
    },
];

const DARK_CASTLES: [CastlePath; 2] = [
    CastlePath {
        right: CASTLE_DARK_KINGSIDE,
        king_from: E8,
        king_to: G8,
        transit: F8,
        empty: &[F8, G8],
    },
    CastlePath {
        right: CASTLE_DARK_QUEENSIDE,
        king_from: E8,
        king_to: C8,
        transit: D8,
        empty: &[D8, C8, B8],
    },
];

/// Castling moves first, then single steps.
pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    generate_castling_moves(game_state, from, out);
    generate_step_moves(game_state, from, &KING_OFFSETS, out);
}

/// The king's destination is not tested for attack here; `make_move_in_place`
/// rejects castling into check with its post-move test.
fn generate_castling_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let paths = match side {
        Color::Light => &LIGHT_CASTLES,
        Color::Dark => &DARK_CASTLES,
    };

    for path in paths {
        if game_state.castling_rights & path.right == 0 || from != path.king_from {
            continue;
        }
        if !path.empty.iter().all(|sq| game_state.is_empty(*sq)) {
            continue;
        }
        if is_square_attacked(game_state, path.king_from, enemy)
            || is_square_attacked(game_state, path.transit, enemy)
        {
            continue;
        }
        out.push(ChessMove::new(path.king_from, path.king_to, FLAG_CASTLING));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king_moves(fen: &str) -> MoveList {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = game.king_square(game.side_to_move);
        let mut out = MoveList::new();
        generate_king_moves(&game, from, &mut out);
        out
    }

    #[test]
    fn kingside_castle_carries_only_the_castling_flag() {
        let moves = king_moves("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let castle = moves
            .iter()
            .find(|mv| mv.is_castling())
            .expect("castling should be generated");
        assert_eq!((castle.from, castle.to), (E1, G1));
        assert_eq!(castle.flags, FLAG_CASTLING);
        assert_eq!(castle.promotion, None);
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        let moves = king_moves("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!moves.iter().any(|mv| mv.is_castling()));
    }

    #[test]
    fn attacked_destination_is_left_for_the_executor() {
        let moves = king_moves("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(moves.iter().any(|mv| mv.is_castling() && mv.to == G1));
    }

    #[test]
    fn queenside_needs_b_file_empty() {
        let moves = king_moves("r3k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(!moves.iter().any(|mv| mv.is_castling()));

        let moves = king_moves("r3k3/8/8/8/8/8/8/R3K3 b q - 0 1");
        assert!(moves.iter().any(|mv| mv.is_castling() && mv.to == C8));
    }
}
