use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

//
// ─── SWAR ─────────────────────────────────────────────────────────────────────
//

/// One of the twelve scale degrees, in ascending order from Sa.
///
/// The discriminant is the semitone offset from Sa, so the declaration order
/// is also the fixed ordering used for interval distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Swar {
    Sa,
    ReKomal,
    Re,
    GaKomal,
    Ga,
    Ma,
    MaTeevra,
    Pa,
    DhaKomal,
    Dha,
    NiKomal,
    Ni,
}

/// Whether a swar is natural, flattened or sharpened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwarKind {
    Shuddha,
    Komal,
    Teevra,
}

impl Swar {
    /// All twelve swars in ascending order.
    pub const ALL: [Swar; 12] = [
        Swar::Sa,
        Swar::ReKomal,
        Swar::Re,
        Swar::GaKomal,
        Swar::Ga,
        Swar::Ma,
        Swar::MaTeevra,
        Swar::Pa,
        Swar::DhaKomal,
        Swar::Dha,
        Swar::NiKomal,
        Swar::Ni,
    ];

    /// The seven natural swars.
    pub const SHUDDHA: [Swar; 7] = [
        Swar::Sa,
        Swar::Re,
        Swar::Ga,
        Swar::Ma,
        Swar::Pa,
        Swar::Dha,
        Swar::Ni,
    ];

    /// Semitones above Sa (0..=11). Doubles as the index in [`Swar::ALL`].
    #[must_use]
    pub fn semitone_offset(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn kind(self) -> SwarKind {
        match self {
            Swar::ReKomal | Swar::GaKomal | Swar::DhaKomal | Swar::NiKomal => SwarKind::Komal,
            Swar::MaTeevra => SwarKind::Teevra,
            _ => SwarKind::Shuddha,
        }
    }

    #[must_use]
    pub fn is_shuddha(self) -> bool {
        self.kind() == SwarKind::Shuddha
    }

    /// Short code used on the command line and in keys (`Rek`, `Mat`, ...).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Swar::Sa => "Sa",
            Swar::ReKomal => "Rek",
            Swar::Re => "Re",
            Swar::GaKomal => "Gak",
            Swar::Ga => "Ga",
            Swar::Ma => "Ma",
            Swar::MaTeevra => "Mat",
            Swar::Pa => "Pa",
            Swar::DhaKomal => "Dhak",
            Swar::Dha => "Dha",
            Swar::NiKomal => "Nik",
            Swar::Ni => "Ni",
        }
    }

    /// Label shown on keys and answer buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Swar::Sa => "Sa",
            Swar::ReKomal => "Re(k)",
            Swar::Re => "Re",
            Swar::GaKomal => "Ga(k)",
            Swar::Ga => "Ga",
            Swar::Ma => "Ma",
            Swar::MaTeevra => "Ma(t)",
            Swar::Pa => "Pa",
            Swar::DhaKomal => "Dha(k)",
            Swar::Dha => "Dha",
            Swar::NiKomal => "Ni(k)",
            Swar::Ni => "Ni",
        }
    }

    /// Number of steps between two swars in the fixed ordering.
    #[must_use]
    pub fn distance(self, other: Swar) -> u8 {
        self.semitone_offset().abs_diff(other.semitone_offset())
    }
}

impl fmt::Display for Swar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Swar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Swar::ALL
            .into_iter()
            .find(|swar| {
                swar.code().eq_ignore_ascii_case(trimmed) || swar.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseError::Swar(s.to_string()))
    }
}

//
// ─── OCTAVE ───────────────────────────────────────────────────────────────────
//

/// Register of a note: mandra (low), madhya (middle) or taar (high).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Octave {
    Mandra,
    #[default]
    Madhya,
    Taar,
}

impl Octave {
    pub const ALL: [Octave; 3] = [Octave::Mandra, Octave::Madhya, Octave::Taar];

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Octave::Mandra => 0.5,
            Octave::Madhya => 1.0,
            Octave::Taar => 2.0,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Octave::Mandra => "mandra",
            Octave::Madhya => "madhya",
            Octave::Taar => "taar",
        }
    }

    /// Marker appended to a swar label: a dot below for mandra, a tick for taar.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Octave::Mandra => ".",
            Octave::Madhya => "",
            Octave::Taar => "'",
        }
    }
}

impl FromStr for Octave {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mandra" | "low" => Ok(Octave::Mandra),
            "madhya" | "middle" => Ok(Octave::Madhya),
            "taar" | "high" => Ok(Octave::Taar),
            _ => Err(ParseError::Octave(s.to_string())),
        }
    }
}

//
// ─── NOTE ─────────────────────────────────────────────────────────────────────
//

/// A swar in a specific octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub swar: Swar,
    pub octave: Octave,
}

impl Note {
    #[must_use]
    pub fn new(swar: Swar, octave: Octave) -> Self {
        Self { swar, octave }
    }

    #[must_use]
    pub fn madhya(swar: Swar) -> Self {
        Self::new(swar, Octave::Madhya)
    }

    /// Label with the octave marker, e.g. `Pa'`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.swar.label(), self.octave.suffix())
    }

    /// Stable key such as `Pa-taar`, used for element ids.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.swar.code(), self.octave.name())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.swar.label(), self.octave.suffix())
    }
}
