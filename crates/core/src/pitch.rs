//! Equal-tempered pitch math relative to the selected Sa.

use crate::model::{BaseScale, Note};

/// Frequency in Hz of `note` when Sa is tuned to `scale`.
#[must_use]
pub fn frequency(note: Note, scale: BaseScale) -> f64 {
    let semitones = f64::from(note.swar.semitone_offset());
    scale.sa_frequency() * 2_f64.powf(semitones / 12.0) * note.octave.multiplier()
}
