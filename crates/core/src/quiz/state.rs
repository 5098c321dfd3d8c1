use crate::model::{Difficulty, GameMode, Swar};
use crate::quiz::{Feedback, QuizTarget};

/// Seconds on the speed-mode clock at the start of every round.
pub const SPEED_TIME_LIMIT: u32 = 10;

/// Where the game loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingAnswer,
    ShowingFeedback,
}

/// Everything the quiz engine knows about the running game.
///
/// Mutated only through [`crate::quiz::reduce`]; the getters are the public surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) mode: GameMode,
    pub(crate) difficulty: Difficulty,
    pub(crate) active: bool,
    pub(crate) score: u32,
    pub(crate) attempts: u32,
    pub(crate) streak: u32,
    pub(crate) best_streak: u32,
    pub(crate) combo: u32,
    pub(crate) time_left: u32,
    pub(crate) target: Option<QuizTarget>,
    pub(crate) picks: Vec<Swar>,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) round: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

impl SessionState {
    #[must_use]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            active: false,
            score: 0,
            attempts: 0,
            streak: 0,
            best_streak: 0,
            combo: 1,
            time_left: SPEED_TIME_LIMIT,
            target: None,
            picks: Vec::new(),
            feedback: None,
            round: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.active {
            Phase::Idle
        } else if self.feedback.is_some() {
            Phase::ShowingFeedback
        } else {
            Phase::AwaitingAnswer
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Seconds left on the speed-mode clock.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn target(&self) -> Option<&QuizTarget> {
        self.target.as_ref()
    }

    /// Swars picked so far for the current sequence.
    #[must_use]
    pub fn picks(&self) -> &[Swar] {
        &self.picks
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Identifies the current target. Scheduled callbacks carry it so stale ones are dropped.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.phase() == Phase::AwaitingAnswer
    }
}
