/// Error taxonomy for a single fetch or copy attempt
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("Not a valid YouTube video URL")]
    InvalidUrl,

    /// Covers both "not found" and the inconclusive "button found" outcome.
    #[error("Transcript not available for this video")]
    Unavailable,

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Host(String),

    #[error("Unsupported page probe version {0}")]
    UnsupportedProbe(u32),

    #[error("Failed to copy: {0}")]
    Clipboard(String),
}

impl TranscriptError {
    /// Status line shown in the popup for this failure.
    pub fn status_message(&self) -> String {
        match self {
            TranscriptError::InvalidUrl | TranscriptError::Clipboard(_) => self.to_string(),
            other => format!("Failed to fetch transcript: {}", other),
        }
    }
}
