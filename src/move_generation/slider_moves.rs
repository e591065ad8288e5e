use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{ChessMove, MoveList, FLAG_CAPTURE};
use crate::moves::move_offsets::{BISHOP_OFFSETS, KING_OFFSETS, ROOK_OFFSETS};

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    generate_ray_moves(game_state, from, &BISHOP_OFFSETS, out);
}

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    generate_ray_moves(game_state, from, &ROOK_OFFSETS, out);
}

/// Queens walk all eight directions, which are exactly the king's steps.
pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    generate_ray_moves(game_state, from, &KING_OFFSETS, out);
}

fn generate_ray_moves(game_state: &GameState, from: Square, offsets: &[i8], out: &mut MoveList) {
    let side = game_state.side_to_move;
    for offset in offsets {
        let mut current = from;
        while let Some(to) = offset_square(current, *offset) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::new(from, to, 0)),
                Some(piece) => {
                    if piece.color != side {
                        out.push(ChessMove::new(from, to, FLAG_CAPTURE));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
