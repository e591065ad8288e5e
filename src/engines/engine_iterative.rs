//! Fixed-depth iterative-deepening engine.
//!
//! Wraps a `SearchContext` with piece-square evaluation and turns each
//! completed iteration into a UCI `info` line.

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::iterative_deepening::{
    mate_in_moves, IterationReport, SearchConfig, SearchContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth used when `go` carries no explicit depth.
    pub default_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: SearchConfig::default().max_depth,
        }
    }
}

pub struct IterativeEngine {
    config: EngineConfig,
    context: SearchContext<PieceSquareScorer>,
}

impl IterativeEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            context: SearchContext::new(PieceSquareScorer),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for IterativeEngine {
    fn new_game(&mut self) {
        self.context = SearchContext::new(PieceSquareScorer);
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|depth| *depth > 0)
                .ok_or_else(|| ChessError::InvalidOptionValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            self.config.default_depth = depth;
            return Ok(());
        }

        log::warn!("Ignoring unknown option '{name}'");
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> EngineOutput {
        // A protocol search always produces a move when one exists.
        let depth = params.depth.unwrap_or(self.config.default_depth).max(1);
        let result = self.context.search(game_state, SearchConfig { max_depth: depth });

        match result.best_move {
            Some(best) => log::info!(
                "Best move: {best} (depth {}, score {}, nodes {})",
                result.reached_depth,
                result.best_score,
                result.nodes
            ),
            None => log::info!("No legal move (score {})", result.best_score),
        }

        EngineOutput {
            best_move: result.best_move,
            info_lines: result.iterations.iter().map(format_info_line).collect(),
        }
    }
}

/// `info depth .. score .. nodes .. pv ..` for one finished iteration.
pub fn format_info_line(report: &IterationReport) -> String {
    let score = match mate_in_moves(report.score) {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {}", report.score),
    };

    let mut line = format!(
        "info depth {} score {} nodes {}",
        report.depth, score, report.nodes
    );
    if !report.principal_variation.is_empty() {
        line.push_str(" pv");
        for mv in &report.principal_variation {
            line.push(' ');
            line.push_str(&mv.to_string());
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::iterative_deepening::MATE_VALUE;

    #[test]
    fn go_depth_overrides_the_default() {
        let game = GameState::new_game();
        let mut engine = IterativeEngine::new(EngineConfig { default_depth: 5 });
        let params = GoParams { depth: Some(2) };

        let out = engine.choose_move(&game, &params);
        assert!(out.best_move.is_some());
        assert_eq!(out.info_lines.len(), 2);
        assert!(out.info_lines[0].starts_with("info depth 1 score cp"));
        assert!(out.info_lines[1].starts_with("info depth 2 score cp"));
    }

    #[test]
    fn depth_option_is_validated() {
        let mut engine = IterativeEngine::default();
        assert_eq!(engine.config().default_depth, 6);

        engine.set_option("depth", "3").expect("numeric depth should be accepted");
        assert_eq!(engine.config().default_depth, 3);

        let err = engine.set_option("Depth", "deep").expect_err("text depth should fail");
        assert_eq!(
            err,
            ChessError::InvalidOptionValue {
                name: "Depth".to_owned(),
                value: "deep".to_owned(),
            }
        );
        assert!(engine.set_option("Depth", "0").is_err());
        assert!(engine.set_option("Hash", "64").is_ok());
    }

    #[test]
    fn mate_scores_are_reported_in_moves() {
        let report = IterationReport {
            depth: 3,
            score: MATE_VALUE - 3,
            nodes: 42,
            principal_variation: Vec::new(),
        };
        assert_eq!(format_info_line(&report), "info depth 3 score mate 2 nodes 42");

        let losing = IterationReport {
            score: -MATE_VALUE + 2,
            ..report
        };
        assert_eq!(format_info_line(&losing), "info depth 3 score mate -1 nodes 42");
    }
}
