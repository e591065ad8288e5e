//! Core mailbox board state representation.
//!
//! `GameState` is the central model for the engine: a padded 0x88 board, the
//! side to move, castling rights, the en-passant target, and a cache of both
//! kings' squares. It is mutated only through the move executor, which
//! snapshots and restores it as search recurses.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Position state shared by move generation, execution, evaluation and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Padded board; slots with a bit of `0x88` set are always `None`.
    pub board: [Option<Piece>; BOARD_SIZE],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,

    /// Square passed over by the last double pawn push, for one ply only.
    pub en_passant_square: Option<Square>,

    /// `[light, dark]` king locations; always equal to the kings on `board`.
    pub king_squares: [Square; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; BOARD_SIZE],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            king_squares: [E1, E8],
        }
    }
}

impl GameState {
    /// Empty board with light to move and no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut game_state = Self::new_empty();
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            game_state.put_piece(square(file, 0), Piece::new(Color::Light, kind));
            game_state.put_piece(square(file, 1), Piece::new(Color::Light, PieceKind::Pawn));
            game_state.put_piece(square(file, 6), Piece::new(Color::Dark, PieceKind::Pawn));
            game_state.put_piece(square(file, 7), Piece::new(Color::Dark, kind));
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square as usize].is_none()
    }

    /// Whether `square` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        matches!(self.board[square as usize], Some(piece) if piece.color == color)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Place `piece` on `square`, keeping the king-square cache in sync.
    ///
    /// Setup helper for position construction; moves go through
    /// `make_move_in_place`.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(is_on_board(square));
        self.board[square as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = square;
        }
    }

    /// Vertically mirrored position with every piece's color swapped.
    ///
    /// Side to move is kept, so the mover's evaluation flips sign.
    pub fn color_flipped(&self) -> Self {
        let mut flipped = Self::new_empty();
        for sq in board_squares() {
            if let Some(piece) = self.piece_at(sq) {
                flipped.put_piece(
                    mirror_square(sq),
                    Piece::new(piece.color.opposite(), piece.kind),
                );
            }
        }
        flipped.side_to_move = self.side_to_move;
        flipped.castling_rights = ((self.castling_rights & 0b0011) << 2)
            | ((self.castling_rights & 0b1100) >> 2);
        flipped.en_passant_square = self.en_passant_square.map(mirror_square);
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let built = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.king_square(Color::Light), E1);
        assert_eq!(built.king_square(Color::Dark), E8);
    }

    #[test]
    fn padding_slots_stay_empty() {
        let game = GameState::new_game();
        assert!((0..BOARD_SIZE as u8)
            .filter(|sq| !is_on_board(*sq))
            .all(|sq| game.piece_at(sq).is_none()));
    }

    #[test]
    fn color_flip_swaps_rights_and_kings() {
        let game = GameState::from_fen("r3k2r/8/8/8/4P3/8/8/R3K3 b Qk e3 0 1")
            .expect("FEN should parse");
        let flipped = game.color_flipped();

        assert_eq!(flipped.castling_rights, CASTLE_DARK_QUEENSIDE | CASTLE_LIGHT_KINGSIDE);
        assert_eq!(flipped.king_square(Color::Light), E1);
        assert_eq!(flipped.king_square(Color::Dark), E8);
        assert_eq!(flipped.en_passant_square, Some(square(4, 5)));
        assert_eq!(flipped.side_to_move, Color::Dark);
        assert_eq!(flipped.color_flipped(), game);
    }
}
