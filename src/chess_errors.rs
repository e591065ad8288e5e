//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type for every fallible entry point:
//! FEN decoding, square and move text parsing, and protocol option handling.
//! The move generator, make/unmake, evaluation, and search never fail and do
//! not return it.
//!
//! Usage guidelines:
//! - Parsing helpers return `ChessResult<T>` and never read past malformed
//!   input or silently repair it.
//! - The UCI layer reports these errors as `info string` lines and keeps the
//!   previous position untouched.

use thiserror::Error;

use crate::game_state::chess_types::Color;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A required whitespace-separated FEN field was absent.
    #[error("missing {0} in FEN")]
    MissingFenField(&'static str),

    /// The board layout did not contain exactly eight `/`-separated ranks.
    #[error("board layout must contain 8 ranks, found {0}")]
    InvalidRankCount(usize),

    /// A rank described fewer or more than eight files.
    ///
    /// Payload: the rank number as written in the FEN (8 down to 1).
    #[error("rank {0} does not describe exactly 8 files")]
    InvalidRankWidth(u8),

    /// A board layout character was neither a piece letter nor a digit 1-8.
    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character '{0}'")]
    InvalidCastlingChar(char),

    /// Coordinate text such as `e9` or `i3` that does not name a square.
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// Each side needs exactly one king so the king-square cache is defined.
    #[error("{color:?} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    /// Move text that is not `<from><to>[promotion]` coordinate notation.
    #[error("invalid long algebraic move: {0}")]
    InvalidMoveText(String),

    /// Well-formed move text that is not legal in the current position.
    #[error("illegal move in current position: {0}")]
    IllegalMove(String),

    /// A `position` command that is neither `startpos` nor `fen <fen>`,
    /// optionally followed by `moves ...`.
    #[error("malformed position command near '{0}'")]
    InvalidPositionCommand(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },
}
