//! Square conversions for coordinate notation.
//!
//! Converts between text such as `e4` and 0x88 square indexes, reused by the
//! FEN, move-text and UCI components.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{file_of, is_on_board, rank_of, square, Square};

/// Convert coordinate text (for example: "e4") to a 0x88 square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Ok(square(file - b'a', rank - b'1'))
}

/// Coordinate name of an on-board square.
#[inline]
pub fn square_name(sq: Square) -> String {
    debug_assert!(is_on_board(sq));
    let file_char = char::from(b'a' + file_of(sq));
    let rank_char = char::from(b'1' + rank_of(sq));
    format!("{file_char}{rank_char}")
}
