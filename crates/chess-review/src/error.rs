//! The single failure the review core knows about.

use thiserror::Error;

/// Message used when the analysis service fails without saying why.
pub const FALLBACK_FAILURE_MESSAGE: &str = "An error occurred during analysis.";

/// The analysis request did not produce a trace.
///
/// Carries a human-readable reason meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AnalysisRequestFailure {
    message: String,
}

impl AnalysisRequestFailure {
    /// Creates a failure with the collaborator's reason.
    ///
    /// A blank reason is replaced by [`FALLBACK_FAILURE_MESSAGE`].
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::unexplained()
        } else {
            Self { message }
        }
    }

    /// Creates a failure for which no reason is available.
    pub fn unexplained() -> Self {
        Self {
            message: FALLBACK_FAILURE_MESSAGE.to_string(),
        }
    }

    /// The reason to surface to the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}
