//! Second-order low-pass (RBJ audio EQ cookbook, transposed direct form II).

use std::f64::consts::PI;

#[derive(Debug, Clone)]
pub struct LowPassFilter {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    z1: f64,
    z2: f64,
}

impl LowPassFilter {
    #[must_use]
    pub fn new(cutoff_hz: f64, q: f64, sample_rate: f64) -> Self {
        // Keep the cutoff below Nyquist for low device rates.
        let cutoff = cutoff_hz.min(sample_rate * 0.49);
        let w0 = 2.0 * PI * cutoff / sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * q);

        let a0 = 1.0 + alpha;
        let b1 = (1.0 - cos_w0) / a0;
        Self {
            b0: b1 / 2.0,
            b1,
            b2: b1 / 2.0,
            a1: (-2.0 * cos_w0) / a0,
            a2: (1.0 - alpha) / a0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.z1;
        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;
        output
    }
}
