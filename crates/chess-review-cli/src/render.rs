//! Plain-text rendering of the review screen.

use chess_review::{AnalysisStore, RequestState};

/// Draws the evaluation bar, e.g. `[#####.....]  50.0%`.
///
/// `width` is the number of cells inside the brackets.
pub fn eval_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:5.1}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        percent
    )
}

/// Renders the selected ply: bar, evaluation, best move and position.
pub fn render_view(store: &AnalysisStore, bar_width: usize) -> String {
    let view = store.view();
    let mut lines = vec![
        eval_bar(view.evaluation_percent, bar_width),
        format!("EVALUATION  {}", view.score),
        format!("BEST MOVE   {}", view.best_move),
        format!("POSITION    {}", view.fen),
    ];

    if let Some(cursor) = store.cursor() {
        lines.push(format!("PLY         {}/{}", cursor + 1, store.len()));
    }
    lines.join("\n")
}

/// Renders the move list with the selected ply wrapped in `*`.
pub fn render_move_list(store: &AnalysisStore) -> String {
    let mut out = String::from("PLAYER MOVES\n");
    for entry in store.move_list_entries() {
        let white = highlight(entry.white_move, entry.is_white_current);
        let black = entry
            .black_move
            .map(|m| highlight(m, entry.is_black_current))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>3}. {:<10} {}\n",
            entry.move_number, white, black
        ));
    }
    out
}

fn highlight(notation: &str, current: bool) -> String {
    if current {
        format!("*{notation}*")
    } else {
        notation.to_string()
    }
}

/// One-line status for the request lifecycle.
pub fn render_state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => "Enter a PGN URL to analyze".to_string(),
        RequestState::Loading => "Analyzing...".to_string(),
        RequestState::Succeeded { plies } => format!("Analysis done: {plies} plies"),
        RequestState::Failed(message) => format!("Error: {message}"),
    }
}

/// Text shown once a request settles: the status line, followed by the
/// selected ply on success or a resubmit hint on failure.
pub fn render_outcome(state: &RequestState, store: &AnalysisStore, bar_width: usize) -> String {
    let status = render_state(state);
    match state {
        RequestState::Succeeded { .. } => {
            format!("{status}\n{}", render_view(store, bar_width))
        }
        RequestState::Failed(_) => format!("{status}\nType 'a <url>' to try again"),
        RequestState::Idle | RequestState::Loading => status,
    }
}
