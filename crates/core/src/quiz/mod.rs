//! Quiz engine: session state and the pure transition function driving it.

mod feedback;
mod reducer;
mod state;
mod target;

pub use feedback::Feedback;
pub use reducer::{
    COUNTDOWN_TICK, Effect, MISS_FEEDBACK_DELAY, QuizEvent, TIMEOUT_ADVANCE_DELAY, Transition,
    reduce,
};
pub use state::{Phase, SPEED_TIME_LIMIT, SessionState};
pub use target::{Answer, Cue, NOTE_DURATION, PHRASE_NOTE_DURATION, PHRASE_SPACING, QuizTarget};
