//! Terminal-oriented Unicode board renderer.
//!
//! Prints the board with rank and file labels followed by the side to move,
//! castling rights, en-passant square and cached king squares, for the UCI
//! `d` command and for debugging.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_name;
use crate::utils::fen_generator::generate_fen;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(square(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n\n");

    let side = match game_state.side_to_move {
        Color::Light => "white",
        Color::Dark => "black",
    };
    let castling = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .iter()
    .map(|(bit, ch)| if game_state.castling_rights & bit != 0 { *ch } else { '-' })
    .collect::<String>();
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "no".to_owned(), square_name);

    out.push_str(&format!("     Side: {side}\n"));
    out.push_str(&format!(" Castling: {castling}\n"));
    out.push_str(&format!("Enpassant: {en_passant}\n"));
    out.push_str(&format!(
        "    Kings: {} {}\n",
        square_name(game_state.king_square(Color::Light)),
        square_name(game_state.king_square(Color::Dark))
    ));
    out.push_str(&format!("      Fen: {}", generate_fen(game_state)));

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
