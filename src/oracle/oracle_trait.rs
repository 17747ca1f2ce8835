//! Move-suggestion oracle abstraction.
//!
//! An oracle is an opaque collaborator that looks at a FEN position and may
//! name a move in coordinate notation. It is passed explicitly to whatever
//! needs it, so tests can hand in a fixed-answer double.

use crate::chess_errors::ChessResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleOutput {
    /// Coordinate text such as `e2e4` or `e7e8q`; `None` when the oracle has no move.
    pub suggestion: Option<String>,
    pub info_lines: Vec<String>,
}

impl OracleOutput {
    pub fn none() -> Self {
        Self::default()
    }
}

pub trait MoveOracle: Send {
    fn name(&self) -> &str;

    /// Forget any per-game state before a new game starts.
    fn new_game(&mut self) -> ChessResult<()> {
        Ok(())
    }

    fn suggest_move(&mut self, fen: &str) -> ChessResult<OracleOutput>;
}

#[cfg(test)]
pub(crate) mod test_doubles {
    use super::{MoveOracle, OracleOutput};
    use crate::chess_errors::{ChessError, ChessResult};

    /// Replays canned answers in order and records every FEN it was shown.
    pub struct ScriptedOracle {
        pub answers: Vec<ChessResult<Option<String>>>,
        pub seen_fens: Vec<String>,
    }

    impl ScriptedOracle {
        pub fn new(answers: Vec<ChessResult<Option<String>>>) -> Self {
            Self {
                answers,
                seen_fens: Vec::new(),
            }
        }
    }

    impl MoveOracle for ScriptedOracle {
        fn name(&self) -> &str {
            "scripted"
        }

        fn suggest_move(&mut self, fen: &str) -> ChessResult<OracleOutput> {
            self.seen_fens.push(fen.to_owned());
            if self.answers.is_empty() {
                return Err(ChessError::Oracle("script exhausted".to_owned()));
            }
            let suggestion = self.answers.remove(0)?;
            Ok(OracleOutput {
                suggestion,
                info_lines: vec!["info string scripted answer".to_owned()],
            })
        }
    }
}
