//! Shared error types for the services crate.

use thiserror::Error;

use swar_core::model::GameMode;

/// Errors emitted while opening the audio output.
///
/// Raised once at startup; there is no recovery inside a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    #[error("no audio output device available")]
    NoDevice,
    #[error("failed to query output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("unsupported sample format: {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),
    #[error("failed to build audio stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("failed to start audio stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
    #[error("audio thread exited before the stream was ready")]
    ThreadExited,
}

/// Errors emitted by `TrainerService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrainerError {
    #[error("{answer} answers are not accepted in {mode}")]
    AnswerNotAccepted { mode: GameMode, answer: &'static str },
    #[error("interval distance out of range: {0}")]
    IntervalOutOfRange(u8),
}
