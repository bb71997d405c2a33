//! Game setup error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error building a game from an invalid pair of players.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", message, file, line)]
pub struct GameError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
