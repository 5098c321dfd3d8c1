//! Harmonium tone synthesis.
//!
//! [`ToneRecipe`] describes the audio graph for a note; [`render`] turns it into
//! mono samples. Audio devices only ever see rendered buffers.

mod envelope;
mod filter;
mod oscillator;

use std::time::Duration;

pub use envelope::EnvelopeShape;
pub use filter::LowPassFilter;
pub use oscillator::{Oscillator, Waveform};

/// One reed of the tone: a waveform at a multiple of the fundamental.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    pub waveform: Waveform,
    pub ratio: f64,
    pub gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass {
    pub cutoff_hz: f64,
    pub q: f64,
}

/// Complete description of a tone: partials summed through a low-pass, then enveloped.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneRecipe {
    pub frequency: f64,
    pub duration: Duration,
    pub partials: Vec<Partial>,
    pub filter: LowPass,
    pub envelope: EnvelopeShape,
}

impl ToneRecipe {
    /// Four detuned/harmonic reeds approximating a harmonium.
    #[must_use]
    pub fn harmonium(frequency: f64, duration: Duration) -> Self {
        Self {
            frequency,
            duration,
            partials: vec![
                Partial {
                    waveform: Waveform::Sawtooth,
                    ratio: 1.0,
                    gain: 0.3,
                },
                Partial {
                    waveform: Waveform::Sawtooth,
                    ratio: 2.0,
                    gain: 0.15,
                },
                Partial {
                    waveform: Waveform::Sine,
                    ratio: 3.0,
                    gain: 0.08,
                },
                Partial {
                    waveform: Waveform::Sawtooth,
                    ratio: 1.002,
                    gain: 0.15,
                },
            ],
            filter: LowPass {
                cutoff_hz: 2000.0,
                q: 1.0,
            },
            envelope: EnvelopeShape::harmonium(),
        }
    }

    /// Number of samples this tone occupies at `sample_rate`.
    #[must_use]
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.as_secs_f64() * f64::from(sample_rate)).round() as usize
    }
}

/// Render `recipe` to mono samples at `sample_rate`.
#[must_use]
pub fn render(recipe: &ToneRecipe, sample_rate: u32) -> Vec<f32> {
    let rate = f64::from(sample_rate);
    let mut voices: Vec<(Oscillator, f64)> = recipe
        .partials
        .iter()
        .map(|partial| {
            let osc = Oscillator::new(partial.waveform, recipe.frequency * partial.ratio, rate);
            (osc, partial.gain)
        })
        .collect();
    let mut filter = LowPassFilter::new(recipe.filter.cutoff_hz, recipe.filter.q, rate);

    (0..recipe.sample_count(sample_rate))
        .map(|idx| {
            let mixed: f64 = voices
                .iter_mut()
                .map(|(osc, gain)| osc.next_sample() * *gain)
                .sum();
            let t = idx as f64 / rate;
            let sample = filter.process(mixed) * recipe.envelope.gain_at(t, recipe.duration);
            sample as f32
        })
        .collect()
}
