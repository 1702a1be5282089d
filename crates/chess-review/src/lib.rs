//! Move navigation and evaluation state for reviewing analyzed chess games.
//!
//! A remote analysis service turns a game (identified by a PGN source URL)
//! into a per-ply evaluation trace. This crate owns that trace and the
//! user's position within it, and derives everything a review screen shows:
//! the board position, the evaluation readout and bar, the engine's best move
//! and the paired move list.
//!
//! # Overview
//!
//! - [`AnalysisTrace`] / [`AnalyzedMove`] - The analyzed game, one entry per ply
//! - [`AnalysisStore`] - Cursor over the trace plus derived queries
//! - [`AnalysisController`] - Request lifecycle (idle, loading, succeeded, failed)
//! - [`AnalysisService`] - The capability that turns a game URL into a trace
//! - [`Readout`] - An analyzed value or the "Not yet analyzed" placeholder
//!
//! # Example
//!
//! ```
//! use chess_review::{AnalysisStore, AnalysisTrace, AnalyzedMove};
//!
//! let trace: AnalysisTrace = vec![
//!     AnalyzedMove::new("e2e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
//!         .with_score(30),
//!     AnalyzedMove::new("e7e5", "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
//!         .with_score(-25),
//! ]
//! .into();
//!
//! let mut store = AnalysisStore::new();
//! store.load_trace(trace);
//! assert!((store.evaluation_percent() - 51.5).abs() < 1e-9);
//!
//! store.step_forward();
//! assert_eq!(store.current_score().to_string(), "-25");
//! assert!(!store.can_step_forward());
//! ```

pub mod board;
pub mod controller;
pub mod error;
pub mod evaluation;
pub mod service;
pub mod store;
pub mod trace;

pub use board::{MoveAttempt, START_FEN};
pub use controller::{AnalysisController, RequestState, RequestTicket};
pub use error::AnalysisRequestFailure;
pub use evaluation::{evaluation_percent, Readout, NOT_ANALYZED};
pub use service::AnalysisService;
pub use store::{AnalysisStore, DerivedView, MoveList, MoveListEntry};
pub use trace::{AnalysisResponse, AnalysisTrace, AnalyzedMove};
