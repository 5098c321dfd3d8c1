use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ParseError;
use crate::model::{Octave, Swar};

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Difficulty tier. Gates the eligible swars, octaves and sequence length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Swars that may be asked (and offered as answers) at this tier.
    #[must_use]
    pub fn eligible_swars(self) -> &'static [Swar] {
        match self {
            Difficulty::Easy => &Swar::SHUDDHA,
            Difficulty::Medium | Difficulty::Hard => &Swar::ALL,
        }
    }

    /// Octaves a single-note target may be drawn from.
    #[must_use]
    pub fn eligible_octaves(self) -> &'static [Octave] {
        match self {
            Difficulty::Hard => &Octave::ALL,
            Difficulty::Easy | Difficulty::Medium => &[Octave::Madhya],
        }
    }

    /// Single-note answers must name the octave too.
    #[must_use]
    pub fn octave_aware(self) -> bool {
        self == Difficulty::Hard
    }

    #[must_use]
    pub fn sequence_len(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Difficulty::Easy => "7 Shuddha",
            Difficulty::Medium => "12 Swars",
            Difficulty::Hard => "3 Octaves",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::Difficulty(s.to_string())),
        }
    }
}

//
// ─── GAME MODE ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    Speed,
    Sequence,
    Interval,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Classic,
        GameMode::Speed,
        GameMode::Sequence,
        GameMode::Interval,
    ];

    /// Consecutive correct answers needed per combo step.
    #[must_use]
    pub fn combo_step(self) -> u32 {
        match self {
            GameMode::Sequence => 3,
            GameMode::Classic | GameMode::Speed | GameMode::Interval => 5,
        }
    }

    /// Pause between a correct answer and the next target.
    #[must_use]
    pub fn advance_delay(self) -> Duration {
        match self {
            GameMode::Classic | GameMode::Speed => Duration::from_millis(1000),
            GameMode::Interval => Duration::from_millis(1200),
            GameMode::Sequence => Duration::from_millis(1500),
        }
    }

    #[must_use]
    pub fn is_timed(self) -> bool {
        self == GameMode::Speed
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic Mode",
            GameMode::Speed => "Speed Challenge",
            GameMode::Sequence => "Sequence Memory",
            GameMode::Interval => "Interval Training",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            GameMode::Classic => "Identify single notes accurately",
            GameMode::Speed => "Race against time (10 seconds!)",
            GameMode::Sequence => "Remember & repeat note patterns",
            GameMode::Interval => "Identify distance between two notes",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(GameMode::Classic),
            "speed" => Ok(GameMode::Speed),
            "sequence" => Ok(GameMode::Sequence),
            "interval" => Ok(GameMode::Interval),
            _ => Err(ParseError::GameMode(s.to_string())),
        }
    }
}
