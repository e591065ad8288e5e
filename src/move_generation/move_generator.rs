//! Pseudo-legal move generation.
//!
//! Walks the board from a1 to h8 and dispatches each piece of the side to
//! move to its generator. Moves that leave the mover's king attacked are not
//! filtered here; `make_move_in_place` rejects them when they are tried.

use crate::game_state::chess_types::*;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::move_apply::{make_move_in_place, unmake_move_in_place, MoveMode};
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::slider_moves::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_descriptions::{MoveList, MAX_MOVES};

/// All pseudo-legal moves for the side to move, rebuilt on every call.
pub fn generate_moves(game_state: &GameState) -> MoveList {
    let mut out = MoveList::with_capacity(MAX_MOVES);
    let side = game_state.side_to_move;

    for from in board_squares() {
        let Some(piece) = game_state.piece_at(from) else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, &mut out),
        }
    }

    out
}

/// Pseudo-legal moves filtered by apply-and-rollback on a scratch copy.
pub fn generate_legal_moves(game_state: &GameState) -> MoveList {
    let mut scratch = game_state.clone();
    generate_moves(game_state)
        .into_iter()
        .filter(|mv| match make_move_in_place(&mut scratch, *mv, MoveMode::AllMoves) {
            Some(undo) => {
                unmake_move_in_place(&mut scratch, &undo);
                true
            }
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{STARTING_POSITION_FEN, TRICKY_POSITION_FEN};

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = game(STARTING_POSITION_FEN);
        assert_eq!(generate_moves(&game).len(), 20);
        assert_eq!(generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn tricky_position_has_forty_eight_legal_moves() {
        let game = game(TRICKY_POSITION_FEN);
        assert_eq!(generate_legal_moves(&game).len(), 48);
    }

    #[test]
    fn pinned_piece_moves_are_generated_but_not_legal() {
        // Knight on e2 is pinned against the king by the rook on e8.
        let game = game("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let pseudo = generate_moves(&game);
        let legal = generate_legal_moves(&game);
        assert!(pseudo.iter().any(|mv| mv.from == square(4, 1)));
        assert!(legal.iter().all(|mv| mv.from != square(4, 1)));
    }

    #[test]
    fn generation_does_not_touch_the_position() {
        let game = game(TRICKY_POSITION_FEN);
        let before = game.clone();
        let _ = generate_legal_moves(&game);
        assert_eq!(game, before);
    }
}
