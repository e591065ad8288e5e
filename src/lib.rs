//! Crate root module declarations for the 0x88 chess engine.
//!
//! Exposes the board model, pseudo-legal move generation with make/unmake,
//! static evaluation, alpha-beta search, and the UCI front end so binaries,
//! benches, and tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_apply;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod perft;
    pub mod slider_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod move_ordering;
    pub mod search_heuristics;
}

pub mod tables {
    pub mod mvv_lva;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_trait;
}

pub mod uci {
    pub mod uci_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
