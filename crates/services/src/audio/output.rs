//! Audio output using cpal and a ring buffer of rendered tones.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use ringbuf::{
    HeapCons, HeapProd, HeapRb,
    traits::{Consumer, Producer, Split},
};
use tracing::{debug, error, info, warn};

use crate::audio::ToneSink;
use crate::error::AudioError;
use crate::synth::{ToneRecipe, render};

/// Tones that may be queued before the audio thread picks them up.
const TONE_QUEUE_SIZE: usize = 64;

/// Tones mixed at once. Older ones keep playing; extra ones are dropped.
const MAX_VOICES: usize = 32;

type Tone = Arc<[f32]>;

struct Voice {
    samples: Tone,
    position: usize,
}

impl Voice {
    fn finished(&self) -> bool {
        self.position >= self.samples.len()
    }
}

/// Caller side of the two queues: fresh tones go in, spent buffers come back
/// to be freed here rather than on the audio thread.
struct Queues {
    incoming: HeapProd<Tone>,
    spent: HeapCons<Tone>,
}

/// Callback side: owns the playing voices.
struct Mixer {
    incoming: HeapCons<Tone>,
    spent: HeapProd<Tone>,
    voices: Vec<Voice>,
    overflow: Arc<AtomicUsize>,
}

impl Mixer {
    fn admit(&mut self) {
        while let Some(samples) = self.incoming.try_pop() {
            if self.voices.len() < MAX_VOICES {
                self.voices.push(Voice {
                    samples,
                    position: 0,
                });
            } else {
                self.overflow.fetch_add(1, Ordering::Relaxed);
                self.retire(samples);
            }
        }
    }

    fn next_sample(&mut self) -> f32 {
        mix_next(&mut self.voices)
    }

    fn retire_finished(&mut self) {
        let mut idx = 0;
        while idx < self.voices.len() {
            if self.voices[idx].finished() {
                let voice = self.voices.swap_remove(idx);
                self.retire(voice.samples);
            } else {
                idx += 1;
            }
        }
    }

    fn retire(&mut self, samples: Tone) {
        // Capacity covers every buffer in flight between two caller drains.
        let _ = self.spent.try_push(samples);
    }
}

fn tone_queues() -> (Queues, Mixer) {
    let (incoming_prod, incoming_cons) = HeapRb::<Tone>::new(TONE_QUEUE_SIZE).split();
    let (spent_prod, spent_cons) = HeapRb::<Tone>::new(TONE_QUEUE_SIZE + MAX_VOICES).split();
    let queues = Queues {
        incoming: incoming_prod,
        spent: spent_cons,
    };
    let mixer = Mixer {
        incoming: incoming_cons,
        spent: spent_prod,
        voices: Vec::with_capacity(MAX_VOICES),
        overflow: Arc::new(AtomicUsize::new(0)),
    };
    (queues, mixer)
}

/// Mixes overlapping tones into the default output device.
///
/// The cpal stream lives on its own thread for the lifetime of this value and
/// is closed on drop.
pub struct CpalOutput {
    queues: Mutex<Queues>,
    overflow: Arc<AtomicUsize>,
    sample_rate: u32,
    shutdown: Option<mpsc::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl CpalOutput {
    /// Open the default output device.
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if no device is available or the stream cannot be
    /// configured or started.
    pub fn open() -> Result<Self, AudioError> {
        let (queues, mixer) = tone_queues();
        let overflow = Arc::clone(&mixer.overflow);
        let (ready_tx, ready_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name("swar-audio".into())
            .spawn(move || {
                let stream = match build_stream(mixer) {
                    Ok((stream, sample_rate)) => {
                        let _ = ready_tx.send(Ok(sample_rate));
                        stream
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                // Blocks until the sender is dropped or signalled.
                let _ = shutdown_rx.recv();
                drop(stream);
                debug!("Audio stream closed");
            })
            .map_err(|_| AudioError::ThreadExited)?;

        let sample_rate = ready_rx.recv().map_err(|_| AudioError::ThreadExited)??;
        info!(sample_rate, "Audio output ready");

        Ok(Self {
            queues: Mutex::new(queues),
            overflow,
            sample_rate,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl ToneSink for CpalOutput {
    fn render_tone(&self, recipe: &ToneRecipe) {
        let samples: Tone = render(recipe, self.sample_rate).into();
        let Ok(mut queues) = self.queues.lock() else {
            warn!("Audio queue lock poisoned; dropping tone");
            return;
        };
        while queues.spent.try_pop().is_some() {}

        let dropped = self.overflow.swap(0, Ordering::Relaxed);
        if dropped > 0 {
            debug!(dropped, "Voice limit reached: dropped tones");
        }
        if queues.incoming.try_push(samples).is_err() {
            debug!("Tone queue full: dropped tone at {:.2} Hz", recipe.frequency);
        }
    }
}

impl Drop for CpalOutput {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn build_stream(mixer: Mixer) -> Result<(cpal::Stream, u32), AudioError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0;
    let format = config.sample_format();

    let stream = match format {
        cpal::SampleFormat::F32 => build_typed::<f32>(&device, &config.into(), mixer)?,
        cpal::SampleFormat::I16 => build_typed::<i16>(&device, &config.into(), mixer)?,
        cpal::SampleFormat::U16 => build_typed::<u16>(&device, &config.into(), mixer)?,
        other => return Err(AudioError::UnsupportedFormat(other)),
    };
    stream.play()?;
    debug!(
        device = device.name().unwrap_or_else(|_| "Unknown".to_string()),
        sample_rate, "Audio stream started"
    );
    Ok((stream, sample_rate))
}

fn build_typed<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut mixer: Mixer,
) -> Result<cpal::Stream, AudioError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = usize::from(config.channels).max(1);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            mixer.admit();
            for frame in data.chunks_mut(channels) {
                let value = mixer.next_sample().clamp(-1.0, 1.0);
                for out in frame.iter_mut() {
                    *out = T::from_sample(value);
                }
            }
            mixer.retire_finished();
        },
        |err| error!("Audio stream error: {}", err),
        None,
    )?;
    Ok(stream)
}

fn mix_next(voices: &mut [Voice]) -> f32 {
    voices
        .iter_mut()
        .filter_map(|voice| {
            let sample = voice.samples.get(voice.position).copied();
            voice.position += 1;
            sample
        })
        .sum()
}
