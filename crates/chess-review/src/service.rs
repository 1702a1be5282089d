//! The capability that turns a game URL into an analysis trace.

use crate::error::AnalysisRequestFailure;
use crate::trace::AnalysisTrace;

/// A remote analysis backend.
///
/// Each call is one logical request with exactly one outcome. On success the
/// trace is in ply order. Implementations decide on transport, encoding and
/// timeouts; the returned future does not need to be `Send`, since the
/// review state lives on a single event loop.
#[allow(async_fn_in_trait)]
pub trait AnalysisService {
    /// Analyzes the game published at `game_url`.
    async fn analyze(&self, game_url: &str) -> Result<AnalysisTrace, AnalysisRequestFailure>;
}
