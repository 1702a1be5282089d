//! Interactive commands typed at the review prompt.

use thiserror::Error;

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Step to the next ply.
    Next,
    /// Step to the previous ply.
    Previous,
    /// Analyze another game, discarding the current one.
    Analyze(String),
    /// Print the full move list.
    List,
    /// Print the command summary.
    Help,
    /// Leave the reviewer.
    Quit,
}

/// Errors from parsing a prompt line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The line did not start with a known command.
    #[error("Unknown command: {0} (type 'h' for help)")]
    Unknown(String),
    /// `analyze` was given without a URL.
    #[error("Missing game URL: a <url>")]
    MissingUrl,
}

/// Summary printed by [`Command::Help`].
pub const HELP: &str = "\
n, next        next move
p, prev        previous move
a, analyze URL analyze another game
l, list        show the move list
h, help        show this help
q, quit        exit";

impl Command {
    /// Parses one line of input. An empty line means "next".
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Ok(Command::Next),
            "p" | "prev" | "previous" => Ok(Command::Previous),
            "a" | "analyze" if rest.is_empty() => Err(CommandError::MissingUrl),
            "a" | "analyze" => Ok(Command::Analyze(rest.to_string())),
            "l" | "list" => Ok(Command::List),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
