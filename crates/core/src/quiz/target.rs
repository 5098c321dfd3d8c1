use std::time::Duration;

use crate::model::{Note, Swar};

/// Length of a single prompted note and of practice key presses.
pub const NOTE_DURATION: Duration = Duration::from_millis(800);
/// Length of each note inside a sequence or interval prompt.
pub const PHRASE_NOTE_DURATION: Duration = Duration::from_millis(600);
/// Onset-to-onset spacing of notes inside a sequence or interval prompt.
pub const PHRASE_SPACING: Duration = Duration::from_millis(700);

/// What the player has to identify in the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizTarget {
    Single(Note),
    Sequence(Vec<Note>),
    Interval { first: Note, second: Note },
}

impl QuizTarget {
    /// Notes to play for this target, with their onsets relative to the prompt.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        match self {
            QuizTarget::Single(note) => vec![Cue::new(*note, Duration::ZERO, NOTE_DURATION)],
            QuizTarget::Sequence(notes) => phrase(notes.iter().copied()),
            QuizTarget::Interval { first, second } => phrase([*first, *second]),
        }
    }

    /// Steps between the two interval notes; `None` for other targets.
    #[must_use]
    pub fn interval_distance(&self) -> Option<u8> {
        match self {
            QuizTarget::Interval { first, second } => Some(first.swar.distance(second.swar)),
            QuizTarget::Single(_) | QuizTarget::Sequence(_) => None,
        }
    }

    /// The note to reveal on a miss or timeout in single-note modes.
    #[must_use]
    pub fn single_note(&self) -> Option<Note> {
        match self {
            QuizTarget::Single(note) => Some(*note),
            QuizTarget::Sequence(_) | QuizTarget::Interval { .. } => None,
        }
    }

    #[must_use]
    pub fn sequence_len(&self) -> usize {
        match self {
            QuizTarget::Sequence(notes) => notes.len(),
            QuizTarget::Single(_) | QuizTarget::Interval { .. } => 0,
        }
    }
}

fn phrase(notes: impl IntoIterator<Item = Note>) -> Vec<Cue> {
    notes
        .into_iter()
        .zip(0_u32..)
        .map(|(note, idx)| Cue::new(note, PHRASE_SPACING * idx, PHRASE_NOTE_DURATION))
        .collect()
}

/// A note scheduled for playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub note: Note,
    pub offset: Duration,
    pub duration: Duration,
}

impl Cue {
    #[must_use]
    pub fn new(note: Note, offset: Duration, duration: Duration) -> Self {
        Self {
            note,
            offset,
            duration,
        }
    }
}

/// A player submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Classic and speed modes. The octave only matters under hard difficulty.
    Note(Note),
    /// One pick in sequence mode; evaluated once the sequence is complete.
    SequencePick(Swar),
    /// Interval mode distance, 0..=11.
    Interval(u8),
}
