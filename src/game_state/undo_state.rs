use crate::game_state::chess_types::*;

/// Full value snapshot taken before a move is applied.
///
/// Restoring it is a byte-for-byte rollback of every `GameState` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub board: [Option<Piece>; BOARD_SIZE],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub king_squares: [Square; 2],
}

impl UndoState {
    #[inline]
    pub fn capture(game_state: &GameState) -> Self {
        Self {
            board: game_state.board,
            side_to_move: game_state.side_to_move,
            castling_rights: game_state.castling_rights,
            en_passant_square: game_state.en_passant_square,
            king_squares: game_state.king_squares,
        }
    }

    #[inline]
    pub fn restore(&self, game_state: &mut GameState) {
        game_state.board = self.board;
        game_state.side_to_move = self.side_to_move;
        game_state.castling_rights = self.castling_rights;
        game_state.en_passant_square = self.en_passant_square;
        game_state.king_squares = self.king_squares;
    }
}
