//! Amplitude envelope of a harmonium tone.

use std::time::Duration;

/// Attack ramp, held level, and an exponential release ending at the note's end.
///
/// The level ramps linearly from 0 to 1 over `attack`, holds at 1, steps to
/// `release_level` at `duration - release`, then decays exponentially to
/// `floor` at `duration`. Silent afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeShape {
    pub attack: Duration,
    pub release: Duration,
    pub release_level: f64,
    pub floor: f64,
}

impl EnvelopeShape {
    #[must_use]
    pub fn harmonium() -> Self {
        Self {
            attack: Duration::from_millis(50),
            release: Duration::from_millis(100),
            release_level: 0.9,
            floor: 0.01,
        }
    }

    /// Gain at `t` seconds into a note lasting `duration`.
    #[must_use]
    pub fn gain_at(&self, t: f64, duration: Duration) -> f64 {
        let end = duration.as_secs_f64();
        let attack = self.attack.as_secs_f64().min(end);
        let release_start = (end - self.release.as_secs_f64()).max(attack);

        if t < 0.0 || t >= end {
            0.0
        } else if t < attack {
            t / attack
        } else if t < release_start {
            1.0
        } else {
            let span = end - release_start;
            let progress = (t - release_start) / span;
            self.release_level * (self.floor / self.release_level).powf(progress)
        }
    }
}
