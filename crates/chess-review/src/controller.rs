//! Request lifecycle for analyzing a game.
//!
//! The controller drives [`RequestState`] from submission to its outcome and
//! installs the resulting trace in its [`AnalysisStore`]. A request can be
//! run end to end with [`AnalysisController::submit`], or split into
//! [`begin`](AnalysisController::begin) and
//! [`finish`](AnalysisController::finish) for event loops that deliver the
//! outcome later (e.g. a browser callback).

use std::fmt;

use crate::board::MoveAttempt;
use crate::error::AnalysisRequestFailure;
use crate::service::AnalysisService;
use crate::store::AnalysisStore;
use crate::trace::AnalysisTrace;

/// Where the latest analysis request stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// A trace with `plies` entries was installed in the store.
    Succeeded {
        /// Length of the installed trace.
        plies: usize,
    },
    /// The request failed; the message is meant for the user.
    Failed(String),
}

impl RequestState {
    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The failure message, if the latest request failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u32);

impl RequestTicket {
    /// Rebuilds a ticket from its [`id`](Self::id), e.g. after a round trip
    /// through JavaScript.
    pub fn from_id(id: u32) -> Self {
        Self(id)
    }

    /// Numeric identifier of the ticket.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Drives analysis requests and owns the reviewed game.
#[derive(Debug, Default)]
pub struct AnalysisController {
    store: AnalysisStore,
    state: RequestState,
    latest: Option<RequestTicket>,
    game_url: Option<String>,
}

impl AnalysisController {
    /// Creates an idle controller with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes `game_url` with `service` and applies the outcome.
    ///
    /// The store is cleared before the request goes out. Failures are not
    /// returned; they end up in [`RequestState::Failed`].
    pub async fn submit<S: AnalysisService>(
        &mut self,
        service: &S,
        game_url: &str,
    ) -> &RequestState {
        let ticket = self.begin(game_url);
        let outcome = service.analyze(game_url).await;
        self.finish(ticket, outcome);
        &self.state
    }

    /// Marks a request for `game_url` as in flight.
    ///
    /// Clears the previous trace and error. The returned ticket must be
    /// passed to [`finish`](Self::finish) with the request's outcome.
    /// Tickets count up from 1 and restart at 1 after `u32::MAX`; 0 is never
    /// issued.
    pub fn begin(&mut self, game_url: &str) -> RequestTicket {
        let ticket = RequestTicket(self.latest.map_or(1, |t| t.0.checked_add(1).unwrap_or(1)));
        tracing::info!(ticket = %ticket, url = game_url, "Submitting game for analysis");

        self.latest = Some(ticket);
        self.game_url = Some(game_url.to_string());
        self.store.clear();
        self.state = RequestState::Loading;
        ticket
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Whatever completes last wins: an older request finishing after a newer
    /// one still replaces the store contents. Loading ends either way.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisTrace, AnalysisRequestFailure>,
    ) {
        if self.latest != Some(ticket) {
            tracing::debug!(
                ticket = %ticket,
                latest = ?self.latest.map(RequestTicket::id),
                "Out-of-order completion replaces newer request state"
            );
        }

        match outcome {
            Ok(trace) => {
                let plies = trace.len();
                tracing::info!(ticket = %ticket, plies, "Analysis received");
                self.store.load_trace(trace);
                self.state = RequestState::Succeeded { plies };
            }
            Err(failure) => {
                tracing::warn!(ticket = %ticket, error = %failure, "Analysis failed");
                self.store.clear();
                self.state = RequestState::Failed(failure.message().to_string());
            }
        }
    }

    /// Logs a piece drag from the board. The reviewed position is unaffected.
    pub fn handle_move_attempt(&self, attempt: &MoveAttempt) {
        tracing::info!(
            source = %attempt.source_square,
            target = %attempt.target_square,
            cursor = ?self.store.cursor(),
            "Move made on board"
        );
    }

    /// Current request state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Message of the latest failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// URL of the latest submitted game.
    pub fn game_url(&self) -> Option<&str> {
        self.game_url.as_deref()
    }

    /// The reviewed game.
    pub fn store(&self) -> &AnalysisStore {
        &self.store
    }

    /// The reviewed game, for navigation.
    pub fn store_mut(&mut self) -> &mut AnalysisStore {
        &mut self.store
    }
}
