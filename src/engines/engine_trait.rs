//! Engine abstraction used by the UCI front end.
//!
//! The protocol layer only sees `GoParams` in and `EngineOutput` out, so the
//! search behind an engine can change without touching command handling.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// Ready-to-print `info ...` lines, in emission order.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> EngineOutput;
}
