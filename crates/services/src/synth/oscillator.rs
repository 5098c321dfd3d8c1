//! Band-limited oscillators (PolyBLEP).

use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    phase_inc: f64,
    phase: f64,
}

impl Oscillator {
    #[must_use]
    pub fn new(waveform: Waveform, frequency: f64, sample_rate: f64) -> Self {
        Self {
            waveform,
            phase_inc: frequency / sample_rate,
            phase: 0.0,
        }
    }

    /// Next sample in [-1, 1].
    pub fn next_sample(&mut self) -> f64 {
        let sample = match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin(),
            Waveform::Sawtooth => 2.0 * self.phase - 1.0 - poly_blep(self.phase, self.phase_inc),
        };
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        sample
    }
}

/// Correction subtracted from a naive waveform around its discontinuity.
///
/// `t` is the phase in [0, 1), `dt` the phase increment per sample.
fn poly_blep(t: f64, dt: f64) -> f64 {
    if t < dt {
        let t = t / dt;
        2.0 * t - t * t - 1.0
    } else if t > 1.0 - dt {
        let t = (t - 1.0) / dt;
        t * t + 2.0 * t + 1.0
    } else {
        0.0
    }
}
