#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod generator;
pub mod synth;
pub mod trainer;

pub use audio::{CpalOutput, SilentSink, ToneSink};
pub use error::{AudioError, TrainerError};
pub use generator::QuizGenerator;
pub use synth::{ToneRecipe, render};
pub use trainer::{TrainerService, TrainerSettings};
