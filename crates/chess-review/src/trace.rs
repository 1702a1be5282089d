//! The analyzed game as delivered by the analysis backend.

use serde::{Deserialize, Serialize};

/// Analysis of a single ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedMove {
    /// The move as notated by the backend.
    #[serde(rename = "move")]
    pub move_notation: String,
    /// Position after this move, in FEN. Passed through unvalidated.
    pub fen: String,
    /// Engine score in centipawns; `None` if the position was not evaluated.
    #[serde(default)]
    pub score: Option<i32>,
    /// The engine's recommended move from this position, if computed.
    #[serde(default)]
    pub best_move: Option<String>,
}

impl AnalyzedMove {
    /// Creates an unevaluated ply.
    pub fn new(move_notation: impl Into<String>, fen: impl Into<String>) -> Self {
        Self {
            move_notation: move_notation.into(),
            fen: fen.into(),
            score: None,
            best_move: None,
        }
    }

    /// Sets the centipawn score.
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    /// Sets the engine's best move.
    pub fn with_best_move(mut self, best_move: impl Into<String>) -> Self {
        self.best_move = Some(best_move.into());
        self
    }
}

/// Ordered per-ply analysis of one game; index 0 is the first ply.
///
/// A trace is never edited once received. A new analysis replaces it
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisTrace {
    moves: Vec<AnalyzedMove>,
}

impl AnalysisTrace {
    /// Number of plies in the trace.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the game had no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The ply at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&AnalyzedMove> {
        self.moves.get(index)
    }

    /// All plies in order.
    pub fn moves(&self) -> &[AnalyzedMove] {
        &self.moves
    }

    /// Iterates over the plies in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AnalyzedMove> {
        self.moves.iter()
    }
}

impl From<Vec<AnalyzedMove>> for AnalysisTrace {
    fn from(moves: Vec<AnalyzedMove>) -> Self {
        Self { moves }
    }
}

impl FromIterator<AnalyzedMove> for AnalysisTrace {
    fn from_iter<I: IntoIterator<Item = AnalyzedMove>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnalysisTrace {
    type Item = &'a AnalyzedMove;
    type IntoIter = std::slice::Iter<'a, AnalyzedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Success body of the analysis backend.
///
/// ```json
/// {"message": "Analysis done", "url": "...", "analysis": [{"move": "e2e4", ...}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Status text from the backend.
    #[serde(default)]
    pub message: Option<String>,
    /// The game URL the backend analyzed.
    #[serde(default)]
    pub url: Option<String>,
    /// The per-ply analysis.
    pub analysis: AnalysisTrace,
}
