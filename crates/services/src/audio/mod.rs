//! Where rendered tones go.

mod output;

use crate::synth::ToneRecipe;

pub use output::CpalOutput;

/// Capability to sound a tone. Fire-and-forget: playback never reports back.
pub trait ToneSink: Send + Sync {
    fn render_tone(&self, recipe: &ToneRecipe);
}

/// Drops every tone. Used when the app runs muted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn render_tone(&self, recipe: &ToneRecipe) {
        tracing::trace!(frequency = recipe.frequency, "muted tone");
    }
}
