use thiserror::Error;

/// Errors produced when turning user-facing text into model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unknown swar: {0}")]
    Swar(String),
    #[error("unknown octave: {0}")]
    Octave(String),
    #[error("unknown base scale: {0}")]
    Scale(String),
    #[error("unknown difficulty: {0}")]
    Difficulty(String),
    #[error("unknown game mode: {0}")]
    GameMode(String),
}
