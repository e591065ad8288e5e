//! Long-algebraic (UCI) move text.
//!
//! Formats moves as `e2e4` or `e7e8q` and resolves incoming move text
//! against the legal moves of a position, so flags such as castling or en
//! passant never have to be inferred from the text.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_name};

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", promotion_to_char(piece.kind))?;
        }
        Ok(())
    }
}

#[inline]
pub fn move_to_long_algebraic(mv: ChessMove) -> String {
    mv.to_string()
}

/// Find the legal move described by `text` in `game_state`.
///
/// Malformed text is an error; well-formed text that names no legal move
/// resolves to `Ok(None)`.
pub fn resolve_move(text: &str, game_state: &GameState) -> ChessResult<Option<ChessMove>> {
    let (from, to, promotion) = parse_move_text(text)?;

    let found = generate_legal_moves(game_state).into_iter().find(|mv| {
        mv.from == from && mv.to == to && mv.promotion.map(|piece| piece.kind) == promotion
    });

    Ok(found)
}

fn parse_move_text(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !text.is_ascii() || !(text.len() == 4 || text.len() == 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(promotion_from_char(ch).ok_or_else(invalid)?),
    };

    Ok((from, to, promotion))
}

fn promotion_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
