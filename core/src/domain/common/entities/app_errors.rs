use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The backend could not be reached, answered with an unexpected status,
    /// or sent a body that does not parse.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Terminal failure of an analysis; no partial result is produced.
    #[error("Failed to analyze food image: {0}")]
    AnalysisFailure(String),

    #[error("Internal server error")]
    InternalServerError,
}
