//! Values exchanged with the board renderer.

/// Position sentinel understood by board renderers as the initial position.
///
/// Shown whenever no analyzed ply is selected.
pub const START_FEN: &str = "start";

/// A piece drag reported by the board widget.
///
/// The board is display-only: attempts are logged but never change the
/// reviewed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAttempt {
    /// Square the piece was picked up from (e.g. "e2").
    pub source_square: String,
    /// Square the piece was dropped on (e.g. "e4").
    pub target_square: String,
}

impl MoveAttempt {
    /// Creates a move attempt from the two squares reported by the board.
    pub fn new(source_square: impl Into<String>, target_square: impl Into<String>) -> Self {
        Self {
            source_square: source_square.into(),
            target_square: target_square.into(),
        }
    }
}
