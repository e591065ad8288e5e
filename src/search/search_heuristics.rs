//! Per-search ordering tables: killers, history and the triangular PV.
//!
//! Owned by one `SearchContext` and cleared at the start of every top-level
//! search. Every ply index goes through `clamp_ply`, so check extensions that
//! chain past `MAX_PLY` reuse the last row instead of indexing out of bounds.

use crate::game_state::chess_types::{Piece, Square, BOARD_SIZE, PIECE_COUNT};
use crate::moves::move_descriptions::{ChessMove, PackedMove, NO_MOVE};

pub const MAX_PLY: usize = 64;

/// Ceiling for a history counter; keeps quiet moves below the killer scores.
pub const HISTORY_MAX: i32 = 7000;

type KillerTable = [[PackedMove; 2]; MAX_PLY];
type HistoryTable = [[i32; BOARD_SIZE]; PIECE_COUNT];
type PvTable = [[PackedMove; MAX_PLY]; MAX_PLY];

#[inline]
pub fn clamp_ply(ply: usize) -> usize {
    ply.min(MAX_PLY - 1)
}

#[derive(Debug, Clone)]
pub struct SearchHeuristics {
    killers: KillerTable,
    history: Box<HistoryTable>,
    pv_table: Box<PvTable>,
    pv_length: [usize; MAX_PLY],
}

impl Default for SearchHeuristics {
    fn default() -> Self {
        Self {
            killers: [[NO_MOVE; 2]; MAX_PLY],
            history: Box::new([[0; BOARD_SIZE]; PIECE_COUNT]),
            pv_table: Box::new([[NO_MOVE; MAX_PLY]; MAX_PLY]),
            pv_length: [0; MAX_PLY],
        }
    }
}

impl SearchHeuristics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.killers.fill([NO_MOVE; 2]);
        for row in self.history.iter_mut() {
            row.fill(0);
        }
        for row in self.pv_table.iter_mut() {
            row.fill(NO_MOVE);
        }
        self.pv_length.fill(0);
    }

    /// True when no table holds anything from a previous search.
    pub fn is_clear(&self) -> bool {
        self.killers.iter().flatten().all(|mv| *mv == NO_MOVE)
            && self.history.iter().flatten().all(|count| *count == 0)
            && self.pv_table.iter().flatten().all(|mv| *mv == NO_MOVE)
            && self.pv_length.iter().all(|len| *len == 0)
    }

    #[inline]
    pub fn killers_at(&self, ply: usize) -> [PackedMove; 2] {
        self.killers[clamp_ply(ply)]
    }

    /// Store a cutoff move in slot 0, shifting the old slot 0 into slot 1.
    pub fn record_killer(&mut self, ply: usize, mv: ChessMove) {
        let slots = &mut self.killers[clamp_ply(ply)];
        slots[1] = slots[0];
        slots[0] = mv.pack();
    }

    #[inline]
    pub fn history_score(&self, piece: Piece, to: Square) -> i32 {
        self.history[piece.index()][to as usize]
    }

    pub fn record_history(&mut self, piece: Piece, to: Square, depth: u32) {
        let bonus = i32::try_from(depth).unwrap_or(HISTORY_MAX);
        let entry = &mut self.history[piece.index()][to as usize];
        *entry = entry.saturating_add(bonus).min(HISTORY_MAX);
    }

    /// The previous iteration's principal-variation move at `ply`.
    #[inline]
    pub fn pv_move_at(&self, ply: usize) -> PackedMove {
        self.pv_table[0][clamp_ply(ply)]
    }

    /// Start an empty line at `ply`; called on entry to every node.
    #[inline]
    pub fn reset_pv_length(&mut self, ply: usize) {
        let ply = clamp_ply(ply);
        self.pv_length[ply] = ply;
    }

    /// Make `mv` followed by the child's line the best line at `ply`.
    pub fn update_pv(&mut self, ply: usize, mv: ChessMove) {
        let ply = clamp_ply(ply);
        self.pv_table[ply][ply] = mv.pack();

        let child = ply + 1;
        if child >= MAX_PLY {
            self.pv_length[ply] = MAX_PLY;
            return;
        }

        let child_length = self.pv_length[child].clamp(child, MAX_PLY);
        let (parents, children) = self.pv_table.split_at_mut(child);
        parents[ply][child..child_length].copy_from_slice(&children[0][child..child_length]);
        self.pv_length[ply] = child_length;
    }

    /// Root line found by the last completed iteration.
    pub fn principal_variation(&self) -> Vec<ChessMove> {
        self.pv_table[0][..self.pv_length[0].min(MAX_PLY)]
            .iter()
            .map_while(|packed| ChessMove::unpack(*packed))
            .collect()
    }
}
