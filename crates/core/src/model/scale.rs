use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Western key that Sa is tuned to. Frequencies are the fourth-octave pitches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseScale {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl BaseScale {
    pub const ALL: [BaseScale; 12] = [
        BaseScale::C,
        BaseScale::CSharp,
        BaseScale::D,
        BaseScale::DSharp,
        BaseScale::E,
        BaseScale::F,
        BaseScale::FSharp,
        BaseScale::G,
        BaseScale::GSharp,
        BaseScale::A,
        BaseScale::ASharp,
        BaseScale::B,
    ];

    /// Frequency of madhya Sa in Hz.
    #[must_use]
    pub fn sa_frequency(self) -> f64 {
        match self {
            BaseScale::C => 261.63,
            BaseScale::CSharp => 277.18,
            BaseScale::D => 293.66,
            BaseScale::DSharp => 311.13,
            BaseScale::E => 329.63,
            BaseScale::F => 349.23,
            BaseScale::FSharp => 369.99,
            BaseScale::G => 392.00,
            BaseScale::GSharp => 415.30,
            BaseScale::A => 440.00,
            BaseScale::ASharp => 466.16,
            BaseScale::B => 493.88,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BaseScale::C => "C",
            BaseScale::CSharp => "C#",
            BaseScale::D => "D",
            BaseScale::DSharp => "D#",
            BaseScale::E => "E",
            BaseScale::F => "F",
            BaseScale::FSharp => "F#",
            BaseScale::G => "G",
            BaseScale::GSharp => "G#",
            BaseScale::A => "A",
            BaseScale::ASharp => "A#",
            BaseScale::B => "B",
        }
    }
}

impl fmt::Display for BaseScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BaseScale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        BaseScale::ALL
            .into_iter()
            .find(|scale| scale.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::Scale(s.to_string()))
    }
}
