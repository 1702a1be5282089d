//! WebAssembly bindings for the chess game reviewer.
//!
//! This crate exposes a review session to a browser UI. The page performs
//! the HTTP call to the analysis backend itself and hands the outcome to the
//! session; everything shown on screen is then read back from it.
//!
//! # Usage
//!
//! ```javascript
//! import init, { ReviewSession } from 'chess-review-wasm';
//!
//! await init();
//!
//! const session = new ReviewSession();
//! const ticket = session.beginAnalysis(gameUrl);
//! try {
//!     const response = await fetch('/analyze', {
//!         method: 'POST',
//!         headers: { 'Content-Type': 'application/json' },
//!         body: JSON.stringify({ gameUrl }),
//!     });
//!     const body = await response.json();
//!     if (response.ok) {
//!         session.completeAnalysis(ticket, body);
//!     } else {
//!         session.failAnalysis(ticket, body.message ?? body.error);
//!     }
//! } catch (e) {
//!     session.failAnalysis(ticket, e.message);
//! }
//!
//! board.position(session.fen());
//! bar.style.width = `${session.evaluationPercent()}%`;
//! ```

use chess_review::{
    AnalysisController, AnalysisRequestFailure, AnalysisResponse, AnalysisTrace, MoveAttempt,
    MoveListEntry, RequestTicket,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Which controls the page should enable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Controls {
    loading: bool,
    error: Option<String>,
    can_go_previous: bool,
    can_go_next: bool,
}

/// A game under review, driven from JavaScript.
#[wasm_bindgen]
#[derive(Default)]
pub struct ReviewSession {
    controller: AnalysisController,
}

#[wasm_bindgen]
impl ReviewSession {
    /// Creates an idle session with nothing to review.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts analyzing `game_url`: clears the current game and error and
    /// enters the loading state.
    ///
    /// Returns the ticket to pass to `completeAnalysis` or `failAnalysis`.
    #[wasm_bindgen(js_name = beginAnalysis)]
    pub fn begin_analysis(&mut self, game_url: &str) -> u32 {
        let ticket = self.controller.begin(game_url);
        tracing::debug!(ticket = %ticket, "Browser request started");
        ticket.id()
    }

    /// Installs the backend's success body (`{ analysis: [...] }`).
    ///
    /// A body that does not decode is treated as a failed request.
    #[wasm_bindgen(js_name = completeAnalysis)]
    pub fn complete_analysis(&mut self, ticket: u32, response: JsValue) {
        let decoded = serde_wasm_bindgen::from_value::<AnalysisResponse>(response)
            .map_err(|e| e.to_string());
        self.complete(ticket, decoded);
    }

    /// Records a failed request. Without a message a generic one is shown.
    #[wasm_bindgen(js_name = failAnalysis)]
    pub fn fail_analysis(&mut self, ticket: u32, message: Option<String>) {
        let failure = message.map_or_else(AnalysisRequestFailure::unexplained, |m| {
            AnalysisRequestFailure::new(m)
        });
        tracing::debug!(ticket, error = %failure, "Browser request failed");
        self.finish(ticket, Err(failure));
    }

    /// Returns true while a request is in flight.
    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    /// Returns the error text of the latest request, or null.
    pub fn error(&self) -> Option<String> {
        self.controller.error().map(str::to_string)
    }

    /// Steps to the next move. Returns false at the last move.
    pub fn next(&mut self) -> bool {
        self.controller.store_mut().step_forward()
    }

    /// Steps to the previous move. Returns false at the first move.
    pub fn previous(&mut self) -> bool {
        self.controller.store_mut().step_backward()
    }

    /// Returns true if the "next" button should be enabled.
    #[wasm_bindgen(js_name = canGoNext)]
    pub fn can_go_next(&self) -> bool {
        self.controller.store().can_step_forward()
    }

    /// Returns true if the "previous" button should be enabled.
    #[wasm_bindgen(js_name = canGoPrevious)]
    pub fn can_go_previous(&self) -> bool {
        self.controller.store().can_step_backward()
    }

    /// Returns the position to display, as FEN or "start".
    pub fn fen(&self) -> String {
        self.controller.store().current_fen().to_string()
    }

    /// Returns the evaluation text ("35", "-120" or "Not yet analyzed").
    pub fn evaluation(&self) -> String {
        self.controller.store().current_score().to_string()
    }

    /// Returns the engine's best move, or "Not yet analyzed".
    #[wasm_bindgen(js_name = bestMove)]
    pub fn best_move(&self) -> String {
        self.controller.store().current_best_move().to_string()
    }

    /// Returns the evaluation bar fill, 0 to 100.
    #[wasm_bindgen(js_name = evaluationPercent)]
    pub fn evaluation_percent(&self) -> f64 {
        self.controller.store().evaluation_percent()
    }

    /// Returns the index of the selected ply, or null.
    pub fn cursor(&self) -> Option<u32> {
        self.controller
            .store()
            .cursor()
            .and_then(|c| u32::try_from(c).ok())
    }

    /// Returns the move list rows:
    /// `[{ moveNumber, whiteMove, blackMove, isWhiteCurrent, isBlackCurrent }]`.
    #[wasm_bindgen(js_name = moveList)]
    pub fn move_list(&self) -> Result<JsValue, JsError> {
        let rows: Vec<MoveListEntry<'_>> = self.controller.store().move_list_entries().collect();
        to_js(&rows)
    }

    /// Returns `{ fen, score, bestMove, evaluationPercent }` for the selected ply.
    pub fn view(&self) -> Result<JsValue, JsError> {
        to_js(&self.controller.store().view())
    }

    /// Returns `{ loading, error, canGoPrevious, canGoNext }`.
    pub fn controls(&self) -> Result<JsValue, JsError> {
        to_js(&self.controls_state())
    }

    /// Board drop callback. Logged only; the position does not change.
    #[wasm_bindgen(js_name = onPieceDrop)]
    pub fn on_piece_drop(&self, source_square: &str, target_square: &str) {
        self.controller
            .handle_move_attempt(&MoveAttempt::new(source_square, target_square));
    }
}

impl ReviewSession {
    fn complete(&mut self, ticket: u32, decoded: Result<AnalysisResponse, String>) {
        let outcome = match decoded {
            Ok(response) => Ok(response.analysis),
            Err(e) => {
                tracing::warn!(ticket, error = %e, "Backend body did not decode");
                Err(AnalysisRequestFailure::new(format!(
                    "Invalid analysis response: {e}"
                )))
            }
        };
        self.finish(ticket, outcome);
    }

    fn finish(&mut self, ticket: u32, outcome: Result<AnalysisTrace, AnalysisRequestFailure>) {
        self.controller
            .finish(RequestTicket::from_id(ticket), outcome);
    }

    fn controls_state(&self) -> Controls {
        let store = self.controller.store();
        Controls {
            loading: self.controller.is_loading(),
            error: self.error(),
            can_go_previous: store.can_step_backward(),
            can_go_next: store.can_step_forward(),
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_review::AnalyzedMove;

    fn loaded_session(plies: usize) -> ReviewSession {
        let mut session = ReviewSession::new();
        let ticket = session.begin_analysis("https://example.org/g.pgn");
        let trace: AnalysisTrace = (0..plies)
            .map(|i| {
                AnalyzedMove::new(format!("m{i}"), format!("fen-{i}"))
                    .with_score(100 * i as i32)
                    .with_best_move(format!("b{i}"))
            })
            .collect();
        session.finish(ticket, Ok(trace));
        session
    }

    #[test]
    fn new_session_shows_start_position() {
        let session = ReviewSession::new();
        assert_eq!(session.fen(), "start");
        assert_eq!(session.evaluation(), "Not yet analyzed");
        assert_eq!(session.best_move(), "Not yet analyzed");
        assert_eq!(session.evaluation_percent(), 50.0);
        assert_eq!(session.cursor(), None);
        assert!(!session.can_go_next());
        assert!(!session.can_go_previous());
    }

    #[test]
    fn begin_enters_loading() {
        let mut session = loaded_session(3);
        session.begin_analysis("https://example.org/other.pgn");
        assert!(session.is_loading());
        assert_eq!(session.fen(), "start");
        assert!(!session.controls_state().can_go_next);
    }

    #[test]
    fn navigation_follows_store() {
        let mut session = loaded_session(3);
        assert!(!session.is_loading());
        assert_eq!(session.cursor(), Some(0));
        assert!(session.can_go_next());

        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.fen(), "fen-2");
        assert_eq!(session.evaluation(), "200");
        assert_eq!(session.best_move(), "b2");
        assert!((session.evaluation_percent() - 60.0).abs() < 1e-9);

        assert!(session.previous());
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn failure_reports_message_or_fallback() {
        let mut session = loaded_session(2);
        let ticket = session.begin_analysis("bad");
        session.fail_analysis(ticket, Some("network unreachable".to_string()));
        assert_eq!(session.error().as_deref(), Some("network unreachable"));
        assert_eq!(session.fen(), "start");

        let ticket = session.begin_analysis("bad again");
        session.fail_analysis(ticket, None);
        assert_eq!(
            session.error().as_deref(),
            Some("An error occurred during analysis.")
        );
        assert!(!session.is_loading());
    }

    #[test]
    fn undecodable_body_fails_request() {
        let mut session = loaded_session(2);
        let ticket = session.begin_analysis("https://example.org/g.pgn");
        session.complete(ticket, Err("invalid type: string, expected struct".to_string()));
        assert!(!session.is_loading());
        assert_eq!(session.fen(), "start");
        assert!(session
            .error()
            .is_some_and(|e| e.starts_with("Invalid analysis response: invalid type")));
    }

    #[test]
    fn decoded_body_loads_trace() {
        let mut session = ReviewSession::new();
        let ticket = session.begin_analysis("https://example.org/g.pgn");
        let response = AnalysisResponse {
            message: Some("Analysis done".to_string()),
            url: None,
            analysis: vec![AnalyzedMove::new("e2e4", "fen-0").with_best_move("c7c5")].into(),
        };
        session.complete(ticket, Ok(response));
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.best_move(), "c7c5");
    }

    #[test]
    fn controls_track_bounds() {
        let mut session = loaded_session(2);
        let controls = session.controls_state();
        assert!(!controls.can_go_previous);
        assert!(controls.can_go_next);

        session.next();
        let controls = session.controls_state();
        assert!(controls.can_go_previous);
        assert!(!controls.can_go_next);
        assert_eq!(controls.error, None);
    }

    #[test]
    fn piece_drop_keeps_position() {
        let session = loaded_session(2);
        session.on_piece_drop("e2", "e4");
        assert_eq!(session.fen(), "fen-0");
    }
}
