use swar_core::model::{Difficulty, GameMode};

pub const APP_TITLE: &str = "स्वर साधना";
pub const APP_TAGLINE: &str = "Master Indian Classical Music - Complete Harmonium Training";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuideSectionVm {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// Static "How to Use" panel, derived from the mode and difficulty tables
/// where the text depends on them.
#[must_use]
pub fn usage_guide() -> Vec<GuideSectionVm> {
    vec![
        GuideSectionVm {
            title: "Practice Mode",
            items: vec![
                "Complete 3-octave harmonium with all 36 notes".to_string(),
                "White keys = Shuddha swars (natural notes)".to_string(),
                "Black keys = Komal (flat) & Teevra (sharp) swars".to_string(),
                "Practice at your own pace, build muscle memory".to_string(),
            ],
        },
        GuideSectionVm {
            title: "Game Modes",
            items: GameMode::ALL
                .into_iter()
                .map(|mode| format!("{}: {}", mode_name(mode), mode_hint(mode)))
                .collect(),
        },
        GuideSectionVm {
            title: "Difficulty Levels",
            items: Difficulty::ALL
                .into_iter()
                .map(|level| format!("{}: {}", level.label(), difficulty_hint(level)))
                .collect(),
        },
        GuideSectionVm {
            title: "Scoring System",
            items: vec![
                "Build streaks for combo multipliers".to_string(),
                "Speed mode: Faster answers = more points".to_string(),
                format!(
                    "Every {} correct = combo increases ({} in Sequence)",
                    GameMode::Classic.combo_step(),
                    GameMode::Sequence.combo_step()
                ),
                "Track your best streak and improve!".to_string(),
            ],
        },
    ]
}

fn mode_name(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Classic => "Classic",
        GameMode::Speed => "Speed",
        GameMode::Sequence => "Sequence",
        GameMode::Interval => "Interval",
    }
}

fn mode_hint(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Classic => "Identify single notes accurately",
        GameMode::Speed => "Race against time (10 seconds!)",
        GameMode::Sequence => "Remember & repeat note patterns",
        GameMode::Interval => "Identify distance between notes",
    }
}

fn difficulty_hint(level: Difficulty) -> &'static str {
    match level {
        Difficulty::Easy => "7 shuddha swars only",
        Difficulty::Medium => "All 12 swars (includes komal/teevra)",
        Difficulty::Hard => "All swars across 3 octaves!",
    }
}
