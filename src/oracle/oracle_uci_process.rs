//! Oracle backed by an external UCI engine process (e.g. Stockfish).
//!
//! The process is started lazily on the first request and kept for later
//! ones. Every exchange is `position fen ...` followed by `go`, reading lines
//! until `bestmove`.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use crate::chess_errors::{ChessError, ChessResult};
use crate::oracle::oracle_trait::{MoveOracle, OracleOutput};
use crate::oracle::suggestion::is_null_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciSearchLimit {
    Depth(u8),
    MoveTimeMs(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOracleConfig {
    pub path: PathBuf,
    pub threads: u32,
    pub skill_level: u32,
    pub limit: UciSearchLimit,
}

impl Default for UciOracleConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("stockfish"),
            threads: 2,
            skill_level: 10,
            limit: UciSearchLimit::Depth(15),
        }
    }
}

impl UciOracleConfig {
    fn go_command(&self) -> String {
        match self.limit {
            UciSearchLimit::Depth(depth) => format!("go depth {depth}"),
            UciSearchLimit::MoveTimeMs(ms) => format!("go movetime {ms}"),
        }
    }
}

struct UciProcess {
    child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
}

impl UciProcess {
    fn spawn(config: &UciOracleConfig) -> ChessResult<Self> {
        let mut child = Command::new(&config.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| oracle_error(format!("failed to start {}: {e}", config.path.display())))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| oracle_error("engine stdin unavailable"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| oracle_error("engine stdout unavailable"))?;

        Ok(Self {
            child,
            stdin,
            reader: BufReader::new(stdout),
        })
    }

    fn send(&mut self, cmd: &str) -> ChessResult<()> {
        writeln!(self.stdin, "{cmd}").map_err(|e| oracle_error(format!("write failed: {e}")))?;
        self.stdin
            .flush()
            .map_err(|e| oracle_error(format!("flush failed: {e}")))
    }

    /// Read until a line starting with `prefix`; earlier lines go to `skipped`.
    fn wait_for(&mut self, prefix: &str, skipped: &mut Vec<String>) -> ChessResult<String> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| oracle_error(format!("read failed: {e}")))?;
            if read == 0 {
                return Err(oracle_error(format!("engine exited before sending {prefix}")));
            }

            let trimmed = line.trim();
            if trimmed.starts_with(prefix) {
                return Ok(trimmed.to_owned());
            }
            if !trimmed.is_empty() {
                skipped.push(trimmed.to_owned());
            }
        }
    }
}

impl Drop for UciProcess {
    fn drop(&mut self) {
        let _ = self.send("quit");
        let _ = self.child.wait();
    }
}

fn oracle_error(msg: impl Into<String>) -> ChessError {
    ChessError::Oracle(msg.into())
}

/// Move text out of a `bestmove <move> [ponder <move>]` line.
pub fn parse_bestmove_line(line: &str) -> ChessResult<Option<String>> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("bestmove") {
        return Err(oracle_error(format!("expected bestmove, got {line:?}")));
    }

    match tokens.next() {
        Some(text) if !is_null_move(text) => Ok(Some(text.to_owned())),
        _ => Ok(None),
    }
}

pub struct UciProcessOracle {
    config: UciOracleConfig,
    process: Option<UciProcess>,
}

impl UciProcessOracle {
    pub fn new(config: UciOracleConfig) -> Self {
        Self {
            config,
            process: None,
        }
    }

    fn process(&mut self, info_lines: &mut Vec<String>) -> ChessResult<&mut UciProcess> {
        if self.process.is_none() {
            let mut process = UciProcess::spawn(&self.config)?;
            process.send("uci")?;
            process.wait_for("uciok", info_lines)?;
            process.send(&format!("setoption name Threads value {}", self.config.threads))?;
            process.send(&format!(
                "setoption name Skill Level value {}",
                self.config.skill_level
            ))?;
            process.send("isready")?;
            process.wait_for("readyok", info_lines)?;
            info_lines.push(format!(
                "info string uci_oracle started {}",
                self.config.path.display()
            ));
            self.process = Some(process);
        }

        self.process
            .as_mut()
            .ok_or_else(|| oracle_error("engine process not running"))
    }

    fn search(&mut self, fen: &str, info_lines: &mut Vec<String>) -> ChessResult<String> {
        let go = self.config.go_command();
        let process = self.process(info_lines)?;
        process.send(&format!("position fen {fen}"))?;
        process.send(&go)?;
        process.wait_for("bestmove", info_lines)
    }
}

impl MoveOracle for UciProcessOracle {
    fn name(&self) -> &str {
        "uci process"
    }

    fn new_game(&mut self) -> ChessResult<()> {
        let mut ignored = Vec::new();
        let process = self.process(&mut ignored)?;
        process.send("ucinewgame")?;
        process.send("isready")?;
        process.wait_for("readyok", &mut ignored)?;
        Ok(())
    }

    fn suggest_move(&mut self, fen: &str) -> ChessResult<OracleOutput> {
        let mut out = OracleOutput::none();

        let line = match self.search(fen, &mut out.info_lines) {
            Ok(line) => line,
            Err(err) => {
                // A broken pipe leaves the process unusable; start over next time.
                self.process = None;
                return Err(err);
            }
        };

        out.suggestion = parse_bestmove_line(&line)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_bestmove_line, UciOracleConfig, UciProcessOracle, UciSearchLimit};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::oracle::oracle_trait::MoveOracle;

    #[test]
    fn bestmove_lines_parse() {
        assert_eq!(
            parse_bestmove_line("bestmove e2e4 ponder e7e5"),
            Ok(Some("e2e4".to_owned()))
        );
        assert_eq!(
            parse_bestmove_line("bestmove a7a8q"),
            Ok(Some("a7a8q".to_owned()))
        );
        assert_eq!(parse_bestmove_line("bestmove (none)"), Ok(None));
        assert_eq!(parse_bestmove_line("bestmove 0000"), Ok(None));
        assert!(parse_bestmove_line("info depth 1").is_err());
    }

    #[test]
    fn default_config_matches_the_usual_engine_setup() {
        let config = UciOracleConfig::default();
        assert_eq!(config.threads, 2);
        assert_eq!(config.skill_level, 10);
        assert_eq!(config.go_command(), "go depth 15");

        let timed = UciOracleConfig {
            limit: UciSearchLimit::MoveTimeMs(250),
            ..UciOracleConfig::default()
        };
        assert_eq!(timed.go_command(), "go movetime 250");
    }

    #[test]
    fn missing_engine_binary_is_an_oracle_error() {
        let mut oracle = UciProcessOracle::new(UciOracleConfig {
            path: "/nonexistent/chess-rules-test-engine".into(),
            ..UciOracleConfig::default()
        });
        assert!(matches!(
            oracle.suggest_move(STARTING_POSITION_FEN),
            Err(ChessError::Oracle(_))
        ));
    }
}
