mod game;
mod scale;
mod swar;

pub use game::{Difficulty, GameMode};
pub use scale::BaseScale;
pub use swar::{Note, Octave, Swar, SwarKind};
