//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, maintains the current position, routes `go` requests
//! to the engine, and emits protocol output. Diagnostics go through `log`,
//! never to the protocol stream.

use std::io::{self, BufRead, Write};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_iterative::{EngineConfig, IterativeEngine};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::perft::perft_divide;
use crate::utils::long_algebraic::resolve_move;
use crate::utils::render_game_state::render_game_state;

const UCI_ENGINE_NAME: &str = "chess_0x88";
const UCI_ENGINE_AUTHOR: &str = "chess_0x88 developers";

pub fn run_stdio_loop(config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    log::info!("UCI loop finished");
    Ok(())
}

/// What a `go` command asks for.
#[derive(Debug)]
enum GoRequest {
    Search(GoParams),
    Perft(u32),
}

pub struct UciState {
    game_state: GameState,
    engine: IterativeEngine,
}

impl UciState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine: IterativeEngine::new(config),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line; `Ok(true)` means the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        let Some(cmd) = trimmed.split_whitespace().next() else {
            return Ok(false);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {UCI_ENGINE_NAME}")?;
                writeln!(out, "id author {UCI_ENGINE_AUTHOR}")?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max 64",
                    self.engine.config().default_depth
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    log::warn!("Rejected '{trimmed}': {err}");
                    writeln!(out, "info string setoption error: {err}")?;
                }
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
                log::info!("New game");
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    log::warn!("Rejected '{trimmed}': {err}");
                    writeln!(out, "info string position error: {err}")?;
                }
            }
            "go" => match parse_go_request(trimmed) {
                Ok(GoRequest::Search(params)) => self.handle_go(&params, out)?,
                Ok(GoRequest::Perft(depth)) => self.handle_perft(depth, out)?,
                Err(err) => {
                    log::warn!("Rejected '{trimmed}': {err}");
                    writeln!(out, "info string go error: {err}")?;
                    writeln!(out, "bestmove 0000")?;
                }
            },
            "d" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "stop" => {
                // Search is synchronous; nothing is running by now.
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                log::debug!("Ignoring unknown command '{cmd}'");
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> ChessResult<()> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.engine
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    fn handle_position(&mut self, line: &str) -> ChessResult<()> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.next_if(|tok| *tok != "moves") {
                    fen_parts.push(next);
                }
                GameState::from_fen(&fen_parts.join(" "))?
            }
            Some(other) => return Err(ChessError::InvalidPositionCommand(other.to_owned())),
            None => return Err(ChessError::InvalidPositionCommand(String::new())),
        };

        match tokens.next() {
            None => {}
            Some("moves") => {
                for text in tokens {
                    let mv = resolve_move(text, &state)?
                        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))?;
                    state = apply_move(&state, mv)
                        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))?;
                }
            }
            Some(other) => return Err(ChessError::InvalidPositionCommand(other.to_owned())),
        }

        self.game_state = state;
        Ok(())
    }

    fn handle_go(&mut self, params: &GoParams, out: &mut impl Write) -> io::Result<()> {
        let result = self.engine.choose_move(&self.game_state, params);

        for info in &result.info_lines {
            writeln!(out, "{info}")?;
        }

        match result.best_move {
            Some(best_move) => writeln!(out, "bestmove {best_move}"),
            None => writeln!(out, "bestmove 0000"),
        }
    }

    fn handle_perft(&mut self, depth: u32, out: &mut impl Write) -> io::Result<()> {
        let mut scratch = self.game_state.clone();
        let divide = perft_divide(&mut scratch, depth);
        let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();

        for (mv, nodes) in &divide {
            writeln!(out, "{mv}: {nodes}")?;
        }
        writeln!(out)?;
        writeln!(out, "Nodes searched: {total}")?;

        log::info!("perft {depth}: {total} nodes");
        Ok(())
    }
}

fn parse_go_request(line: &str) -> ChessResult<GoRequest> {
    let tokens = line.split_whitespace().skip(1).collect::<Vec<_>>();
    let mut params = GoParams::default();
    let mut i = 0usize;

    while i < tokens.len() {
        match tokens[i] {
            "perft" => {
                let value = tokens.get(i + 1).copied().unwrap_or_default();
                let depth = value.parse::<u32>().map_err(|_| ChessError::InvalidOptionValue {
                    name: "perft".to_owned(),
                    value: value.to_owned(),
                })?;
                return Ok(GoRequest::Perft(depth));
            }
            "depth" => {
                i += 1;
                let value = tokens.get(i).copied().unwrap_or_default();
                let depth = value.parse::<u8>().map_err(|_| ChessError::InvalidOptionValue {
                    name: "depth".to_owned(),
                    value: value.to_owned(),
                })?;
                params.depth = Some(depth);
            }
            other => log::debug!("Ignoring go token '{other}'"),
        }
        i += 1;
    }

    Ok(GoRequest::Search(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn run(state: &mut UciState, line: &str) -> (bool, String) {
        let mut out = Vec::<u8>::new();
        let quit = state
            .handle_command(line, &mut out)
            .expect("writing to a Vec should succeed");
        (quit, String::from_utf8(out).expect("output should be UTF-8"))
    }

    #[test]
    fn handshake_and_ready() {
        let mut state = UciState::new(EngineConfig::default());
        let (_, out) = run(&mut state, "uci");
        assert!(out.starts_with("id name chess_0x88\n"));
        assert!(out.contains("option name Depth type spin default 6"));
        assert!(out.ends_with("uciok\n"));

        let (_, out) = run(&mut state, "isready");
        assert_eq!(out, "readyok\n");
    }

    #[test]
    fn position_startpos_with_moves_updates_state() {
        let mut state = UciState::new(EngineConfig::default());
        let (_, out) = run(&mut state, "position startpos moves e2e4 e7e5 g1f3");
        assert!(out.is_empty());
        assert_eq!(state.game_state().side_to_move, Color::Dark);
        assert_eq!(
            state.game_state().get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 1"
        );
    }

    #[test]
    fn position_fen_without_moves_updates_state() {
        let mut state = UciState::new(EngineConfig::default());
        run(&mut state, "position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(state.game_state().get_fen(), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    }

    #[test]
    fn bad_position_keeps_previous_state() {
        let mut state = UciState::new(EngineConfig::default());
        run(&mut state, "position startpos moves e2e4");
        let before = state.game_state().clone();

        let (_, out) = run(&mut state, "position startpos moves e2e4 e2e4");
        assert_eq!(
            out,
            "info string position error: illegal move in current position: e2e4\n"
        );
        assert_eq!(state.game_state(), &before);

        let (_, out) = run(&mut state, "position fen 8/8/8 w - -");
        assert!(out.starts_with("info string position error:"));
        assert_eq!(state.game_state(), &before);
    }

    #[test]
    fn malformed_position_commands_are_rejected() {
        let mut state = UciState::new(EngineConfig::default());
        run(&mut state, "position startpos moves d2d4");
        let before = state.game_state().clone();

        let (_, out) = run(&mut state, "position foo");
        assert_eq!(
            out,
            "info string position error: malformed position command near 'foo'\n"
        );

        let (_, out) = run(&mut state, "position startpos junk e2e4");
        assert_eq!(
            out,
            "info string position error: malformed position command near 'junk'\n"
        );

        let (_, out) = run(&mut state, "position");
        assert!(out.starts_with("info string position error:"));
        assert_eq!(state.game_state(), &before);
    }

    #[test]
    fn go_depth_prints_info_and_bestmove() {
        let mut state = UciState::new(EngineConfig::default());
        run(&mut state, "position fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let (_, out) = run(&mut state, "go depth 2");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("info depth 1 "));
        assert!(lines[1].starts_with("info depth 2 score mate 1"));
        assert_eq!(lines[2], "bestmove a1a8");
    }

    #[test]
    fn go_without_legal_moves_prints_null_move() {
        let mut state = UciState::new(EngineConfig::default());
        run(&mut state, "position fen 7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let (_, out) = run(&mut state, "go depth 1");
        assert!(out.ends_with("bestmove 0000\n"));
    }

    #[test]
    fn malformed_go_still_answers() {
        let mut state = UciState::new(EngineConfig::default());
        let (_, out) = run(&mut state, "go depth many");
        assert!(out.starts_with("info string go error:"));
        assert!(out.ends_with("bestmove 0000\n"));
    }

    #[test]
    fn go_perft_prints_divide_and_total() {
        let mut state = UciState::new(EngineConfig::default());
        let (_, out) = run(&mut state, "go perft 2");
        assert!(out.contains("e2e4: 20\n"));
        assert!(out.ends_with("\nNodes searched: 400\n"));
        assert_eq!(out.lines().filter(|line| line.contains(": ")).count(), 21);
    }

    #[test]
    fn setoption_depth_is_validated() {
        let mut state = UciState::new(EngineConfig::default());
        let (_, out) = run(&mut state, "setoption name Depth value 3");
        assert!(out.is_empty());
        assert_eq!(state.engine.config().default_depth, 3);

        let (_, out) = run(&mut state, "setoption name Depth value zero");
        assert!(out.starts_with("info string setoption error:"));
        assert_eq!(state.engine.config().default_depth, 3);
    }

    #[test]
    fn display_and_quit() {
        let mut state = UciState::new(EngineConfig::default());
        let (quit, out) = run(&mut state, "d");
        assert!(!quit);
        assert!(out.contains("Kings: e1 e8"));

        assert!(!run(&mut state, "").0);
        assert!(!run(&mut state, "stop").0);
        assert!(run(&mut state, "quit").0);
    }
}
