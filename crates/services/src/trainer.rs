//! Drives a quiz session: owns the state, runs reducer effects on tokio timers,
//! and routes played notes to the tone sink.

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info};

use swar_core::model::{BaseScale, Difficulty, GameMode, Note, Swar};
use swar_core::pitch::frequency;
use swar_core::quiz::{
    Answer, COUNTDOWN_TICK, Cue, Effect, Feedback, NOTE_DURATION, QuizEvent, QuizTarget,
    SessionState, Transition, reduce,
};

use crate::audio::ToneSink;
use crate::error::TrainerError;
use crate::generator::QuizGenerator;
use crate::synth::ToneRecipe;

/// Largest interval distance a player can pick.
const MAX_INTERVAL: u8 = 11;

/// Initial selections for a new trainer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainerSettings {
    pub scale: BaseScale,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

/// Ear-training session service shared by the views.
///
/// Every transition goes through [`reduce`] under one lock. Scheduled
/// advances, dismissals and the speed countdown are tokio tasks owned by the
/// service and aborted when it is dropped.
#[derive(Clone)]
pub struct TrainerService {
    inner: Arc<Inner>,
}

struct Inner {
    core: Mutex<Core>,
    updates: watch::Sender<SessionState>,
    sink: Arc<dyn ToneSink>,
    runtime: Handle,
}

struct Core {
    session: SessionState,
    scale: BaseScale,
    generator: QuizGenerator,
    scheduled: Option<JoinHandle<()>>,
    countdown: Option<JoinHandle<()>>,
}

impl Core {
    fn next_target(&mut self) -> QuizTarget {
        self.generator
            .target_for(self.session.mode(), self.session.difficulty())
    }
}

#[derive(Debug, Clone, Copy)]
enum Scheduled {
    Advance(u64),
    Dismiss(u64),
}

impl TrainerService {
    /// Create a trainer with an OS-seeded generator.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn new(sink: Arc<dyn ToneSink>, settings: TrainerSettings) -> Self {
        Self::with_generator(sink, settings, QuizGenerator::from_os_rng())
    }

    /// Create a trainer drawing targets from `generator`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn with_generator(
        sink: Arc<dyn ToneSink>,
        settings: TrainerSettings,
        generator: QuizGenerator,
    ) -> Self {
        let session = SessionState::new(settings.mode, settings.difficulty);
        let (updates, _) = watch::channel(session.clone());
        let core = Core {
            session,
            scale: settings.scale,
            generator,
            scheduled: None,
            countdown: None,
        };
        Self {
            inner: Arc::new(Inner {
                core: Mutex::new(core),
                updates,
                sink,
                runtime: Handle::current(),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.lock().session.clone()
    }

    /// Receiver notified after every transition, including timer-driven ones.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.updates.subscribe()
    }

    #[must_use]
    pub fn base_scale(&self) -> BaseScale {
        self.inner.lock().scale
    }

    /// Change the Sa reference. Applies to every note played afterwards.
    pub fn set_base_scale(&self, scale: BaseScale) {
        self.inner.lock().scale = scale;
        info!(%scale, "Base scale changed");
    }

    /// Ignored while a game is running.
    pub fn set_mode(&self, mode: GameMode) -> SessionState {
        self.inner.dispatch(|_| QuizEvent::SetMode(mode))
    }

    /// Ignored while a game is running.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> SessionState {
        self.inner.dispatch(|_| QuizEvent::SetDifficulty(difficulty))
    }

    /// Reset the counters, pick the first target and play it.
    pub fn start_game(&self) -> SessionState {
        let state = self.inner.dispatch(|core| QuizEvent::Start {
            target: core.next_target(),
        });
        info!(
            mode = %state.mode(),
            difficulty = %state.difficulty(),
            "Game started"
        );
        state
    }

    /// Submit a note in classic or speed mode.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::AnswerNotAccepted` in sequence or interval mode.
    pub fn answer_note(&self, note: Note) -> Result<SessionState, TrainerError> {
        self.submit(Answer::Note(note), "note", |mode| {
            matches!(mode, GameMode::Classic | GameMode::Speed)
        })
    }

    /// Add one swar to the sequence being answered.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::AnswerNotAccepted` outside sequence mode.
    pub fn pick_sequence_swar(&self, swar: Swar) -> Result<SessionState, TrainerError> {
        self.submit(Answer::SequencePick(swar), "sequence", |mode| {
            mode == GameMode::Sequence
        })
    }

    /// Submit an interval distance in steps.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::IntervalOutOfRange` above 11 and
    /// `TrainerError::AnswerNotAccepted` outside interval mode.
    pub fn answer_interval(&self, distance: u8) -> Result<SessionState, TrainerError> {
        if distance > MAX_INTERVAL {
            return Err(TrainerError::IntervalOutOfRange(distance));
        }
        self.submit(Answer::Interval(distance), "interval", |mode| {
            mode == GameMode::Interval
        })
    }

    /// Play the current target again.
    pub fn replay(&self) -> SessionState {
        self.inner.dispatch(|_| QuizEvent::Replay)
    }

    /// Leave the game; best streak is kept for the next one.
    pub fn exit_game(&self) -> SessionState {
        let state = self.inner.dispatch(|_| QuizEvent::Exit);
        info!(
            score = state.score(),
            best_streak = state.best_streak(),
            "Game exited"
        );
        state
    }

    /// Sound one key of the practice keyboard.
    pub fn play_key(&self, note: Note) {
        let scale = self.base_scale();
        debug!(note = %note, "Key pressed");
        self.inner
            .play(&[Cue::new(note, Duration::ZERO, NOTE_DURATION)], scale);
    }

    fn submit(
        &self,
        answer: Answer,
        kind: &'static str,
        accepts: impl FnOnce(GameMode) -> bool,
    ) -> Result<SessionState, TrainerError> {
        let mode = self.inner.lock().session.mode();
        if !accepts(mode) {
            return Err(TrainerError::AnswerNotAccepted { mode, answer: kind });
        }
        Ok(self.inner.dispatch(|_| QuizEvent::Answer(answer)))
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Core> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reduce one event and run its effects. `event` sees the state before the transition.
    fn dispatch(self: &Arc<Self>, event: impl FnOnce(&mut Core) -> QuizEvent) -> SessionState {
        let (state, cues, scale) = {
            let mut core = self.lock();
            let event = event(&mut *core);
            let had_feedback = core.session.feedback().is_some();
            let Transition { state, effects } = reduce(mem::take(&mut core.session), event);
            core.session = state;

            let mut cues = Vec::new();
            for effect in effects {
                match effect {
                    Effect::Play(play) => cues.extend(play),
                    Effect::ScheduleAdvance { round, delay } => {
                        self.schedule(&mut core, Scheduled::Advance(round), delay);
                    }
                    Effect::ScheduleDismiss { round, delay } => {
                        self.schedule(&mut core, Scheduled::Dismiss(round), delay);
                    }
                    Effect::StartCountdown => self.start_countdown(&mut core),
                    Effect::StopCountdown => abort(&mut core.countdown),
                    Effect::CancelScheduled => abort(&mut core.scheduled),
                }
            }

            if !had_feedback {
                log_result(&core.session);
            }
            let state = core.session.clone();
            self.updates.send_replace(state.clone());
            (state, cues, core.scale)
        };
        self.play(&cues, scale);
        state
    }

    fn schedule(self: &Arc<Self>, core: &mut Core, job: Scheduled, delay: Duration) {
        abort(&mut core.scheduled);
        let weak = Arc::downgrade(self);
        core.scheduled = Some(self.runtime.spawn(async move {
            sleep(delay).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            match job {
                Scheduled::Advance(round) => {
                    inner.dispatch(|core| QuizEvent::Advance {
                        round,
                        target: core.next_target(),
                    });
                }
                Scheduled::Dismiss(round) => {
                    inner.dispatch(|_| QuizEvent::Dismiss { round });
                }
            }
        }));
    }

    fn start_countdown(self: &Arc<Self>, core: &mut Core) {
        abort(&mut core.countdown);
        let weak: Weak<Self> = Arc::downgrade(self);
        core.countdown = Some(self.runtime.spawn(async move {
            let mut ticks = interval_at(Instant::now() + COUNTDOWN_TICK, COUNTDOWN_TICK);
            loop {
                ticks.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                inner.dispatch(|_| QuizEvent::Tick);
            }
        }));
    }

    fn play(&self, cues: &[Cue], scale: BaseScale) {
        for cue in cues {
            let recipe = ToneRecipe::harmonium(frequency(cue.note, scale), cue.duration);
            if cue.offset.is_zero() {
                self.sink.render_tone(&recipe);
                continue;
            }
            let sink = Arc::clone(&self.sink);
            let offset = cue.offset;
            self.runtime.spawn(async move {
                sleep(offset).await;
                sink.render_tone(&recipe);
            });
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let core = self.core.get_mut().unwrap_or_else(PoisonError::into_inner);
        abort(&mut core.scheduled);
        abort(&mut core.countdown);
    }
}

fn abort(task: &mut Option<JoinHandle<()>>) {
    if let Some(task) = task.take() {
        task.abort();
    }
}

fn log_result(state: &SessionState) {
    match state.feedback() {
        Some(Feedback::Timeout { expected }) => {
            info!(expected = %expected, "Round timed out");
        }
        Some(feedback) => debug!(
            correct = feedback.is_correct(),
            points = feedback.points().unwrap_or_default(),
            score = state.score(),
            streak = state.streak(),
            combo = state.combo(),
            "Answer evaluated"
        ),
        None => {}
    }
}
