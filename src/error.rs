use thiserror::Error;

/// Failures surfaced by the puzzle library.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The tiles are not a permutation of 0..=8.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// The open set ran dry before the goal was reached.
    #[error("search exhausted after expanding {expanded} nodes without reaching the goal")]
    SearchExhausted { expanded: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
