//! Iterative deepening search with fail-hard negamax alpha-beta.
//!
//! Each pass runs a full-width negamax to the next depth, extends checks by
//! one ply, and resolves the horizon with a captures-only quiescence search.
//! Moves are made and unmade in place on one working position. Killer,
//! history and principal-variation tables live in the `SearchContext` and are
//! cleared when a new top-level search begins.

use crate::game_state::chess_types::GameState;
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::move_apply::{make_move_in_place, unmake_move_in_place, MoveMode};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::pick_next_move;
use crate::search::search_heuristics::SearchHeuristics;

/// Bound wider than any reachable score.
pub const INFINITY: i32 = 50_000;

/// Base of mate scores; a side mated at ply `p` scores `-MATE_VALUE + p`.
pub const MATE_VALUE: i32 = 49_000;

/// Scores beyond this magnitude are mates.
const MATE_THRESHOLD: i32 = MATE_VALUE - 1_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 6 }
    }
}

/// Snapshot taken after one completed iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterationReport {
    pub depth: u8,
    pub score: i32,
    /// Nodes visited since the search began, this iteration included.
    pub nodes: u64,
    pub principal_variation: Vec<ChessMove>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub principal_variation: Vec<ChessMove>,
    pub iterations: Vec<IterationReport>,
}

/// Signed full-move distance to mate, or `None` for a non-mate score.
///
/// Positive when the side to move mates, negative when it is mated.
pub fn mate_in_moves(score: i32) -> Option<i32> {
    if score > MATE_THRESHOLD {
        Some((MATE_VALUE - score + 1) / 2)
    } else if score < -MATE_THRESHOLD {
        Some(-(MATE_VALUE + score) / 2)
    } else {
        None
    }
}

/// Everything one in-flight search mutates besides the position itself.
#[derive(Debug, Clone)]
pub struct SearchContext<S: BoardScorer> {
    scorer: S,
    heuristics: SearchHeuristics,
    nodes: u64,
    ply: usize,
}

impl<S: BoardScorer> SearchContext<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            heuristics: SearchHeuristics::new(),
            nodes: 0,
            ply: 0,
        }
    }

    pub fn heuristics(&self) -> &SearchHeuristics {
        &self.heuristics
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `game_state` to `config.max_depth`, one depth at a time.
    ///
    /// Depth 0 returns the static evaluation and no move.
    pub fn search(&mut self, game_state: &GameState, config: SearchConfig) -> SearchResult {
        self.nodes = 0;
        self.ply = 0;
        self.heuristics.clear();

        let mut result = SearchResult {
            best_score: self.scorer.score(game_state),
            ..SearchResult::default()
        };

        let mut position = game_state.clone();
        for depth in 1..=config.max_depth {
            let score = self.negamax(&mut position, -INFINITY, INFINITY, u32::from(depth));
            let principal_variation = self.heuristics.principal_variation();

            log::debug!(
                "depth {} score {} nodes {} pv {}",
                depth,
                score,
                self.nodes,
                principal_variation
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );

            result.iterations.push(IterationReport {
                depth,
                score,
                nodes: self.nodes,
                principal_variation: principal_variation.clone(),
            });
            result.best_move = principal_variation.first().copied();
            result.best_score = score;
            result.reached_depth = depth;
            result.nodes = self.nodes;
            result.principal_variation = principal_variation;
        }

        result
    }

    fn negamax(
        &mut self,
        game_state: &mut GameState,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> i32 {
        self.heuristics.reset_pv_length(self.ply);

        if depth == 0 {
            return self.quiescence(game_state, alpha, beta);
        }

        self.nodes += 1;

        let in_check = is_king_in_check(game_state, game_state.side_to_move);
        let depth = if in_check { depth + 1 } else { depth };

        let mut moves = generate_moves(game_state);
        let mut legal_moves = 0usize;

        for index in 0..moves.len() {
            pick_next_move(&mut moves, index, game_state, &self.heuristics, self.ply);
            let mv = moves[index];

            let Some(undo) = make_move_in_place(game_state, mv, MoveMode::AllMoves) else {
                continue;
            };
            legal_moves += 1;

            self.ply += 1;
            let score = -self.negamax(game_state, -beta, -alpha, depth - 1);
            self.ply -= 1;
            unmake_move_in_place(game_state, &undo);

            if score >= beta {
                self.heuristics.record_killer(self.ply, mv);
                return beta;
            }

            if score > alpha {
                if let Some(piece) = game_state.piece_at(mv.from) {
                    self.heuristics.record_history(piece, mv.to, depth);
                }
                alpha = score;
                self.heuristics.update_pv(self.ply, mv);
            }
        }

        if legal_moves == 0 {
            return if in_check {
                -MATE_VALUE + self.ply as i32
            } else {
                0
            };
        }

        alpha
    }

    /// Captures-only search below the horizon; ends when captures run out.
    fn quiescence(&mut self, game_state: &mut GameState, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.scorer.score(game_state);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = generate_moves(game_state);
        for index in 0..moves.len() {
            pick_next_move(&mut moves, index, game_state, &self.heuristics, self.ply);
            let Some(undo) = make_move_in_place(game_state, moves[index], MoveMode::CapturesOnly)
            else {
                continue;
            };

            self.ply += 1;
            let score = -self.quiescence(game_state, -beta, -alpha);
            self.ply -= 1;
            unmake_move_in_place(game_state, &undo);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

/// One-shot search with fresh tables.
pub fn iterative_deepening_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: S,
    config: SearchConfig,
) -> SearchResult {
    SearchContext::new(scorer).search(game_state, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::TRICKY_POSITION_FEN;
    use crate::move_generation::move_apply::apply_move;
    use crate::move_generation::move_generator::generate_legal_moves;
    use crate::search::board_scoring::PieceSquareScorer;
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    fn search(fen: &str, max_depth: u8) -> SearchResult {
        iterative_deepening_search(&game(fen), PieceSquareScorer, SearchConfig { max_depth })
    }

    #[test]
    fn search_depth_zero_returns_eval_only() {
        let result = iterative_deepening_search(
            &GameState::new_game(),
            PieceSquareScorer,
            SearchConfig { max_depth: 0 },
        );
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.reached_depth, 0);
        assert!(result.iterations.is_empty());
    }

    #[test]
    fn single_legal_move_is_returned_at_depth_one() {
        // The rook covers b1 and b2, leaving Ka2.
        let fen = "1r5k/8/8/8/8/8/8/K7 w - - 0 1";
        let legal = generate_legal_moves(&game(fen));
        assert_eq!(legal.len(), 1);

        let result = search(fen, 1);
        assert_eq!(result.best_move, Some(legal[0]));
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let result = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3);
        let best = result.best_move.expect("mate should be found");
        assert_eq!(move_to_long_algebraic(best), "a1a8");
        assert_eq!(mate_in_moves(result.best_score), Some(1));
    }

    #[test]
    fn checkmated_side_has_no_move_and_mate_score() {
        let result = search("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, -MATE_VALUE);
        assert_eq!(mate_in_moves(result.best_score), Some(0));
    }

    #[test]
    fn stalemate_scores_zero() {
        let result = search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn wins_a_hanging_queen() {
        let result = search("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1", 2);
        let best = result.best_move.expect("search should pick a move");
        assert_eq!(move_to_long_algebraic(best), "d2d5");
        assert!(result.best_score > 400);
    }

    #[test]
    fn principal_variation_is_a_legal_line() {
        let root = game(TRICKY_POSITION_FEN);
        let config = SearchConfig { max_depth: 3 };
        let result = iterative_deepening_search(&root, PieceSquareScorer, config);

        assert_eq!(result.reached_depth, 3);
        assert_eq!(result.iterations.len(), 3);
        assert_eq!(result.best_move, result.principal_variation.first().copied());

        let mut position = root;
        for mv in &result.principal_variation {
            assert!(generate_legal_moves(&position).contains(mv), "{mv} is not legal");
            position = apply_move(&position, *mv).expect("PV move should apply");
        }
    }

    #[test]
    fn node_counts_accumulate_across_iterations() {
        let result = search(TRICKY_POSITION_FEN, 3);
        let nodes: Vec<u64> = result.iterations.iter().map(|report| report.nodes).collect();
        assert!(nodes.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(result.nodes, *nodes.last().expect("three iterations ran"));
    }

    #[test]
    fn repeated_searches_do_not_leak_tables() {
        let mut context = SearchContext::new(PieceSquareScorer);
        let first_game = game(TRICKY_POSITION_FEN);
        let first = context.search(&first_game, SearchConfig { max_depth: 3 });
        assert!(!context.heuristics().is_clear());

        let other = game("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        let _ = context.search(&other, SearchConfig { max_depth: 2 });
        let again = context.search(&first_game, SearchConfig { max_depth: 3 });

        assert_eq!(first, again);
        assert_eq!(context.nodes(), again.nodes);
    }

    #[test]
    fn search_leaves_the_caller_position_untouched() {
        let root = game(TRICKY_POSITION_FEN);
        let before = root.clone();
        let config = SearchConfig { max_depth: 2 };
        let _ = iterative_deepening_search(&root, PieceSquareScorer, config);
        assert_eq!(root, before);
    }

    #[test]
    fn mate_distance_conversion() {
        assert_eq!(mate_in_moves(MATE_VALUE - 1), Some(1));
        assert_eq!(mate_in_moves(MATE_VALUE - 3), Some(2));
        assert_eq!(mate_in_moves(-MATE_VALUE + 2), Some(-1));
        assert_eq!(mate_in_moves(350), None);
    }
}
