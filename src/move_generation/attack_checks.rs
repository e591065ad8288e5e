use crate::game_state::chess_types::*;
use crate::moves::move_offsets::{
    pawn_capture_offsets, BISHOP_OFFSETS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_OFFSETS,
};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`.
///
/// Walks outward from the target: pawns, knights and kings by single steps,
/// then bishop/queen and rook/queen rays until the first occupied slot.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        game_state.piece_at(sq) == Some(Piece::new(attacker_color, kind))
    };

    // A pawn attacks `square` if it stands one capture step behind it.
    for offset in pawn_capture_offsets(attacker_color) {
        if let Some(from) = offset_square(square, -offset) {
            if holds(from, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if steps_hit(game_state, square, &KNIGHT_OFFSETS, attacker_color, PieceKind::Knight) {
        return true;
    }

    if steps_hit(game_state, square, &KING_OFFSETS, attacker_color, PieceKind::King) {
        return true;
    }

    if rays_hit(
        game_state,
        square,
        &BISHOP_OFFSETS,
        attacker_color,
        PieceKind::Bishop,
    ) {
        return true;
    }

    rays_hit(
        game_state,
        square,
        &ROOK_OFFSETS,
        attacker_color,
        PieceKind::Rook,
    )
}

fn steps_hit(
    game_state: &GameState,
    square: Square,
    offsets: &[i8],
    attacker_color: Color,
    kind: PieceKind,
) -> bool {
    let attacker = Some(Piece::new(attacker_color, kind));
    offsets
        .iter()
        .filter_map(|offset| offset_square(square, *offset))
        .any(|from| game_state.piece_at(from) == attacker)
}

/// Slider rays; a queen counts for both the bishop and rook directions.
fn rays_hit(
    game_state: &GameState,
    square: Square,
    offsets: &[i8],
    attacker_color: Color,
    slider: PieceKind,
) -> bool {
    for offset in offsets {
        let mut current = square;
        while let Some(next) = offset_square(current, *offset) {
            if let Some(piece) = game_state.piece_at(next) {
                if piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
