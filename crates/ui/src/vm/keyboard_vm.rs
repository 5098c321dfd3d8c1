use swar_core::model::{BaseScale, Note, Octave, Swar};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarmoniumKeyVm {
    pub note: Note,
    pub id: String,
    pub label: &'static str,
    pub is_black: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OctaveRowVm {
    pub octave: Octave,
    pub title: &'static str,
    pub keys: Vec<HarmoniumKeyVm>,
}

/// Rows top to bottom: taar, madhya, mandra.
#[must_use]
pub fn harmonium_rows() -> Vec<OctaveRowVm> {
    [Octave::Taar, Octave::Madhya, Octave::Mandra]
        .into_iter()
        .map(|octave| OctaveRowVm {
            octave,
            title: octave_title(octave),
            keys: Swar::ALL
                .into_iter()
                .map(|swar| harmonium_key(Note::new(swar, octave)))
                .collect(),
        })
        .collect()
}

fn harmonium_key(note: Note) -> HarmoniumKeyVm {
    HarmoniumKeyVm {
        note,
        id: format!("key-{}", note.key()),
        label: note.swar.label(),
        is_black: !note.swar.is_shuddha(),
    }
}

fn octave_title(octave: Octave) -> &'static str {
    match octave {
        Octave::Taar => "Taar Saptak (Upper Octave)",
        Octave::Madhya => "Madhya Saptak (Middle Octave)",
        Octave::Mandra => "Mandra Saptak (Lower Octave)",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleOptionVm {
    pub scale: BaseScale,
    pub label: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn scale_options(current: BaseScale) -> Vec<ScaleOptionVm> {
    BaseScale::ALL
        .into_iter()
        .map(|scale| ScaleOptionVm {
            scale,
            label: scale.label(),
            selected: scale == current,
        })
        .collect()
}

#[must_use]
pub fn scale_caption(scale: BaseScale) -> String {
    format!("Current: Sa = {} ({:.2} Hz)", scale.label(), scale.sa_frequency())
}
