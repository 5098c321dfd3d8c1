use swar_core::model::{Difficulty, GameMode, Note, Swar};
use swar_core::quiz::{Feedback, QuizTarget, SPEED_TIME_LIMIT, SessionState};

//
// ─── SETUP ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeCardVm {
    pub mode: GameMode,
    pub title: &'static str,
    pub blurb: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn mode_cards(selected: GameMode) -> Vec<ModeCardVm> {
    GameMode::ALL
        .into_iter()
        .map(|mode| ModeCardVm {
            mode,
            title: mode.title(),
            blurb: mode.blurb(),
            selected: mode == selected,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyOptionVm {
    pub difficulty: Difficulty,
    pub label: &'static str,
    pub caption: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn difficulty_options(selected: Difficulty) -> Vec<DifficultyOptionVm> {
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| DifficultyOptionVm {
            difficulty,
            label: difficulty.label(),
            caption: difficulty.caption(),
            selected: difficulty == selected,
        })
        .collect()
}

//
// ─── ACTIVE GAME ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatVm {
    pub label: &'static str,
    pub value: String,
}

#[must_use]
pub fn stats(state: &SessionState) -> Vec<StatVm> {
    vec![
        StatVm {
            label: "Score",
            value: state.score().to_string(),
        },
        StatVm {
            label: "Attempts",
            value: state.attempts().to_string(),
        },
        StatVm {
            label: "Streak",
            value: state.streak().to_string(),
        },
        StatVm {
            label: "Best",
            value: state.best_streak().to_string(),
        },
        StatVm {
            label: "Combo",
            value: format!("×{}", state.combo()),
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeTone {
    Plenty,
    Low,
    Critical,
}

impl TimeTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            TimeTone::Plenty => "time-bar-fill time-bar-fill--plenty",
            TimeTone::Low => "time-bar-fill time-bar-fill--low",
            TimeTone::Critical => "time-bar-fill time-bar-fill--critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeBarVm {
    pub percent: u32,
    pub tone: TimeTone,
    pub label: String,
}

/// Countdown bar; `None` outside speed mode.
#[must_use]
pub fn time_bar(state: &SessionState) -> Option<TimeBarVm> {
    if !state.mode().is_timed() {
        return None;
    }
    let seconds = state.time_left();
    let tone = if seconds > 5 {
        TimeTone::Plenty
    } else if seconds > 3 {
        TimeTone::Low
    } else {
        TimeTone::Critical
    };
    Some(TimeBarVm {
        percent: seconds.min(SPEED_TIME_LIMIT) * 100 / SPEED_TIME_LIMIT,
        tone,
        label: format!("{seconds}s"),
    })
}

#[must_use]
pub fn replay_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Sequence => "Replay Sequence",
        GameMode::Classic | GameMode::Speed | GameMode::Interval => "Replay",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: String,
    pub points: Option<String>,
    pub combo: Option<String>,
}

#[must_use]
pub fn feedback_banner(state: &SessionState) -> Option<FeedbackVm> {
    let feedback = state.feedback()?;
    let vm = match feedback {
        Feedback::Correct { points } => FeedbackVm {
            correct: true,
            headline: match state.mode() {
                GameMode::Sequence => "Perfect Sequence!",
                GameMode::Interval => "Correct Interval!",
                GameMode::Classic | GameMode::Speed => "Excellent!",
            }
            .to_string(),
            points: Some(format!("+{points} points!")),
            combo: (state.combo() > 1).then(|| format!("Combo ×{}!", state.combo())),
        },
        Feedback::Timeout { .. } => miss("Time's up!".to_string()),
        Feedback::WrongSequence { .. } => miss("Wrong sequence! Try again.".to_string()),
        Feedback::WrongInterval { expected, .. } => {
            miss(format!("Wrong! Distance was {expected} steps"))
        }
        Feedback::WrongNote { expected, .. } => {
            miss(format!("Wrong! It was {}", expected.swar.label()))
        }
    };
    Some(vm)
}

fn miss(headline: String) -> FeedbackVm {
    FeedbackVm {
        correct: false,
        headline,
        points: None,
        combo: None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceProgressVm {
    pub caption: String,
    pub slots: Vec<String>,
    pub filled: usize,
}

/// Picked swars so far, with `?` for the remaining slots.
#[must_use]
pub fn sequence_progress(state: &SessionState) -> Option<SequenceProgressVm> {
    let len = state.target().map_or(0, QuizTarget::sequence_len);
    if state.mode() != GameMode::Sequence || len == 0 {
        return None;
    }
    let picks = state.picks();
    let slots = (0..len)
        .map(|idx| {
            picks
                .get(idx)
                .map_or_else(|| "?".to_string(), |swar| swar.label().to_string())
        })
        .collect();
    Some(SequenceProgressVm {
        caption: format!("Your Answer: {} / {len}", picks.len()),
        slots,
        filled: picks.len().min(len),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerAction {
    Note(Note),
    Pick(Swar),
    Interval(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerHighlight {
    Plain,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub id: String,
    pub label: String,
    pub action: AnswerAction,
    pub highlight: AnswerHighlight,
    pub disabled: bool,
}

impl AnswerButtonVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.highlight {
            AnswerHighlight::Plain => "answer-btn",
            AnswerHighlight::Correct => "answer-btn answer-btn--correct",
            AnswerHighlight::Wrong => "answer-btn answer-btn--wrong",
        }
    }
}

/// Answer buttons for the current mode. All are disabled while feedback is shown.
#[must_use]
pub fn answer_grid(state: &SessionState) -> Vec<AnswerButtonVm> {
    let disabled = !state.accepts_answers();
    let difficulty = state.difficulty();
    match state.mode() {
        GameMode::Interval => (0..=11_u8)
            .map(|distance| AnswerButtonVm {
                id: format!("interval-{distance}"),
                label: distance.to_string(),
                action: AnswerAction::Interval(distance),
                highlight: AnswerHighlight::Plain,
                disabled,
            })
            .collect(),
        GameMode::Sequence => difficulty
            .eligible_swars()
            .iter()
            .map(|swar| AnswerButtonVm {
                id: format!("pick-{}", swar.code()),
                label: swar.label().to_string(),
                action: AnswerAction::Pick(*swar),
                highlight: AnswerHighlight::Plain,
                disabled,
            })
            .collect(),
        GameMode::Classic | GameMode::Speed => {
            let octaves = difficulty.eligible_octaves();
            octaves
                .iter()
                .flat_map(|octave| {
                    difficulty
                        .eligible_swars()
                        .iter()
                        .map(move |swar| Note::new(*swar, *octave))
                })
                .map(|note| AnswerButtonVm {
                    id: format!("answer-{}", note.key()),
                    label: if difficulty.octave_aware() {
                        note.label()
                    } else {
                        note.swar.label().to_string()
                    },
                    action: AnswerAction::Note(note),
                    highlight: note_highlight(state, note),
                    disabled,
                })
                .collect()
        }
    }
}

fn note_highlight(state: &SessionState, note: Note) -> AnswerHighlight {
    let same = |other: Note| {
        if state.difficulty().octave_aware() {
            other == note
        } else {
            other.swar == note.swar
        }
    };
    match state.feedback() {
        Some(Feedback::Correct { .. })
            if state
                .target()
                .and_then(QuizTarget::single_note)
                .is_some_and(same) =>
        {
            AnswerHighlight::Correct
        }
        Some(Feedback::WrongNote { selected, .. }) if same(*selected) => AnswerHighlight::Wrong,
        _ => AnswerHighlight::Plain,
    }
}
