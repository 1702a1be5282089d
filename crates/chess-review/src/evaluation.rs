//! Evaluation readouts and the evaluation bar scale.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text shown in place of a score or best move the engine did not provide.
pub const NOT_ANALYZED: &str = "Not yet analyzed";

/// Half-width of the centipawn window mapped onto the evaluation bar.
///
/// Scores at or beyond `±EVAL_WINDOW_CP` saturate the bar.
pub const EVAL_WINDOW_CP: i32 = 1000;

/// Bar fill used when there is no score to show.
pub const NEUTRAL_PERCENT: f64 = 50.0;

/// A value derived from the analyzed trace, or the placeholder shown when
/// the engine did not provide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout<T> {
    /// The engine supplied a value.
    Analyzed(T),
    /// Nothing to show; displayed as [`NOT_ANALYZED`].
    NotAnalyzed,
}

impl<T> Readout<T> {
    /// Returns the analyzed value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Readout::Analyzed(value) => Some(value),
            Readout::NotAnalyzed => None,
        }
    }

    /// Returns true if the engine supplied a value.
    pub fn is_analyzed(&self) -> bool {
        matches!(self, Readout::Analyzed(_))
    }

    /// Maps the analyzed value, keeping the placeholder as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Readout<U> {
        match self {
            Readout::Analyzed(value) => Readout::Analyzed(f(value)),
            Readout::NotAnalyzed => Readout::NotAnalyzed,
        }
    }
}

impl<T> From<Option<T>> for Readout<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Readout::NotAnalyzed, Readout::Analyzed)
    }
}

impl<T: fmt::Display> fmt::Display for Readout<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readout::Analyzed(value) => value.fmt(f),
            Readout::NotAnalyzed => f.write_str(NOT_ANALYZED),
        }
    }
}

impl<T: Serialize> Serialize for Readout<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Readout::Analyzed(value) => value.serialize(serializer),
            Readout::NotAnalyzed => serializer.serialize_str(NOT_ANALYZED),
        }
    }
}

/// Maps a score onto the 0-100 evaluation bar.
///
/// The `±EVAL_WINDOW_CP` window is spread linearly over the bar and clamped
/// outside it, so the fill never leaves `[0, 100]`. A missing score sits at
/// the neutral midpoint.
pub fn evaluation_percent(score: Readout<i32>) -> f64 {
    match score {
        Readout::Analyzed(cp) => {
            let window = f64::from(EVAL_WINDOW_CP);
            let fraction = (f64::from(cp) + window) / (2.0 * window);
            fraction.clamp(0.0, 1.0) * 100.0
        }
        Readout::NotAnalyzed => NEUTRAL_PERCENT,
    }
}
