//! FEN-to-GameState parser.
//!
//! Reads board layout, side to move, castling rights and the en-passant
//! square. Half-move and full-move counters are optional and ignored, since
//! the engine keeps no clocks. Each side must have exactly one king.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or(ChessError::MissingFenField("board layout"))?;
    let side_part = parts
        .next()
        .ok_or(ChessError::MissingFenField("side to move"))?;
    let castling_part = parts
        .next()
        .ok_or(ChessError::MissingFenField("castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or(ChessError::MissingFenField("en-passant square"))?;

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidRankCount(ranks.len()));
    }

    let mut king_counts = [0usize; 2];

    for (rank_str, rank) in ranks.iter().zip((0..8u8).rev()) {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidPieceChar(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessError::InvalidRankWidth(rank + 1));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessError::InvalidPieceChar(ch))?;
            if file >= 8 {
                return Err(ChessError::InvalidRankWidth(rank + 1));
            }

            if piece.kind == PieceKind::King {
                king_counts[piece.color.index()] += 1;
            }
            game_state.put_piece(square(file, rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidRankWidth(rank + 1));
        }
    }

    for color in [Color::Light, Color::Dark] {
        let count = king_counts[color.index()];
        if count != 1 {
            return Err(ChessError::KingCount { color, count });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessError::InvalidCastlingChar(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part).map(Some)
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
