use crate::model::{Note, Swar};

/// Transient result of the last evaluated answer. Cleared before the next target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct { points: u32 },
    WrongNote { expected: Note, selected: Note },
    WrongSequence { expected: Vec<Note>, picked: Vec<Swar> },
    WrongInterval { expected: u8, selected: u8 },
    Timeout { expected: Note },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }

    #[must_use]
    pub fn points(&self) -> Option<u32> {
        match self {
            Feedback::Correct { points } => Some(*points),
            _ => None,
        }
    }
}
