//! The analyzed game and the user's position within it.
//!
//! [`AnalysisStore`] is the single source of truth for what the review screen
//! shows. Everything the presentation needs (position, readouts, bar fill,
//! move list) is derived on demand from the trace and the cursor; nothing is
//! cached or mutated independently.

use serde::Serialize;
use std::iter::Enumerate;
use std::slice::Chunks;

use crate::board::START_FEN;
use crate::evaluation::{evaluation_percent, Readout};
use crate::trace::{AnalysisTrace, AnalyzedMove};

/// A non-empty trace with a cursor inside it.
///
/// Invariant: `cursor < trace.len()`.
#[derive(Debug, Clone)]
struct Session {
    trace: AnalysisTrace,
    cursor: usize,
}

/// Holds the analyzed trace and the cursor over it.
///
/// The cursor only moves one ply at a time and saturates at both ends of the
/// trace; loading a trace always resets it. An empty or absent trace has no
/// cursor and every query falls back to its "no data" value.
#[derive(Debug, Clone, Default)]
pub struct AnalysisStore {
    session: Option<Session>,
}

impl AnalysisStore {
    /// Creates a store with no trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `trace`, replacing any previous one, and selects the first ply.
    ///
    /// An empty trace leaves the store without a cursor.
    pub fn load_trace(&mut self, trace: AnalysisTrace) {
        tracing::debug!(plies = trace.len(), "Loading analysis trace");
        self.session = if trace.is_empty() {
            None
        } else {
            Some(Session { trace, cursor: 0 })
        };
    }

    /// Drops the current trace, if any.
    pub fn clear(&mut self) {
        self.session = None;
    }

    /// Moves to the next ply. Returns false (and does nothing) at the last ply
    /// or without a trace.
    pub fn step_forward(&mut self) -> bool {
        match &mut self.session {
            Some(session) if session.cursor + 1 < session.trace.len() => {
                session.cursor += 1;
                tracing::trace!(cursor = session.cursor, "Stepped forward");
                true
            }
            _ => false,
        }
    }

    /// Moves to the previous ply. Returns false (and does nothing) at the
    /// first ply or without a trace.
    pub fn step_backward(&mut self) -> bool {
        match &mut self.session {
            Some(session) if session.cursor > 0 => {
                session.cursor -= 1;
                tracing::trace!(cursor = session.cursor, "Stepped backward");
                true
            }
            _ => false,
        }
    }

    /// Whether a "next" control should be enabled.
    pub fn can_step_forward(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.cursor + 1 < s.trace.len())
    }

    /// Whether a "previous" control should be enabled.
    pub fn can_step_backward(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.cursor > 0)
    }

    /// Index of the selected ply, or `None` without a trace.
    pub fn cursor(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.cursor)
    }

    /// Number of plies in the loaded trace (0 without one).
    pub fn len(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.trace.len())
    }

    /// Returns true if there is nothing to navigate.
    pub fn is_empty(&self) -> bool {
        self.session.is_none()
    }

    /// The loaded trace, if any.
    pub fn trace(&self) -> Option<&AnalysisTrace> {
        self.session.as_ref().map(|s| &s.trace)
    }

    /// The selected ply.
    pub fn current_move(&self) -> Option<&AnalyzedMove> {
        self.session.as_ref().and_then(|s| s.trace.get(s.cursor))
    }

    /// Board position to display: the selected ply's FEN, or [`START_FEN`].
    pub fn current_fen(&self) -> &str {
        self.current_move().map_or(START_FEN, |m| m.fen.as_str())
    }

    /// Score of the selected ply.
    pub fn current_score(&self) -> Readout<i32> {
        self.current_move().and_then(|m| m.score).into()
    }

    /// Engine best move from the selected ply. Empty strings count as missing.
    pub fn current_best_move(&self) -> Readout<&str> {
        self.current_move()
            .and_then(|m| m.best_move.as_deref())
            .filter(|best| !best.is_empty())
            .into()
    }

    /// Evaluation bar fill for the selected ply, in `[0, 100]`.
    pub fn evaluation_percent(&self) -> f64 {
        evaluation_percent(self.current_score())
    }

    /// Pairs the trace into numbered move-list rows.
    ///
    /// The iterator borrows the trace and can be recreated at any time; it
    /// yields `ceil(len / 2)` rows.
    pub fn move_list_entries(&self) -> MoveList<'_> {
        let plies = match &self.session {
            Some(session) => session.trace.moves(),
            None => &[],
        };
        MoveList {
            pairs: plies.chunks(2).enumerate(),
            cursor: self.cursor(),
        }
    }

    /// Snapshot of every derived readout for the selected ply.
    pub fn view(&self) -> DerivedView {
        DerivedView {
            fen: self.current_fen().to_string(),
            score: self.current_score(),
            best_move: self.current_best_move().map(str::to_string),
            evaluation_percent: self.evaluation_percent(),
        }
    }
}

/// What the review screen shows for the selected ply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    /// Position for the board renderer.
    pub fen: String,
    /// Evaluation readout.
    pub score: Readout<i32>,
    /// Best move readout.
    pub best_move: Readout<String>,
    /// Evaluation bar fill.
    pub evaluation_percent: f64,
}

/// One numbered row of the move list: a white ply and, usually, the black
/// reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveListEntry<'a> {
    /// Full-move number, starting at 1.
    pub move_number: usize,
    /// White's move.
    pub white_move: &'a str,
    /// Black's reply; absent on a trailing white ply.
    pub black_move: Option<&'a str>,
    /// The selected ply is White's move in this row.
    pub is_white_current: bool,
    /// The selected ply is Black's move in this row.
    pub is_black_current: bool,
}

/// Iterator over [`MoveListEntry`] rows, see [`AnalysisStore::move_list_entries`].
#[derive(Debug, Clone)]
pub struct MoveList<'a> {
    pairs: Enumerate<Chunks<'a, AnalyzedMove>>,
    cursor: Option<usize>,
}

impl<'a> Iterator for MoveList<'a> {
    type Item = MoveListEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (pair, plies) = self.pairs.next()?;
        let white_ply = pair * 2;
        let black = plies.get(1);

        Some(MoveListEntry {
            move_number: pair + 1,
            white_move: &plies[0].move_notation,
            black_move: black.map(|m| m.move_notation.as_str()),
            is_white_current: self.cursor == Some(white_ply),
            is_black_current: black.is_some() && self.cursor == Some(white_ply + 1),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for MoveList<'_> {}
