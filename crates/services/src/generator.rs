use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use swar_core::model::{Difficulty, GameMode, Note, Octave, Swar};
use swar_core::quiz::QuizTarget;

/// Randomized target selection, restricted to what the difficulty allows.
#[derive(Debug, Clone)]
pub struct QuizGenerator<R = StdRng> {
    rng: R,
}

impl QuizGenerator<StdRng> {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator for tests and demos.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// The first or next target for `mode`.
    pub fn target_for(&mut self, mode: GameMode, difficulty: Difficulty) -> QuizTarget {
        match mode {
            GameMode::Classic | GameMode::Speed => QuizTarget::Single(self.single_note(difficulty)),
            GameMode::Sequence => QuizTarget::Sequence(self.sequence(difficulty)),
            GameMode::Interval => {
                let (first, second) = self.interval(difficulty);
                QuizTarget::Interval { first, second }
            }
        }
    }

    /// One note; only hard difficulty leaves the middle octave.
    pub fn single_note(&mut self, difficulty: Difficulty) -> Note {
        let swar = self.swar(difficulty);
        let octave = difficulty
            .eligible_octaves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        Note::new(swar, octave)
    }

    /// `difficulty.sequence_len()` middle-octave notes; repeats are allowed.
    pub fn sequence(&mut self, difficulty: Difficulty) -> Vec<Note> {
        (0..difficulty.sequence_len())
            .map(|_| Note::madhya(self.swar(difficulty)))
            .collect()
    }

    /// Two independent middle-octave notes.
    pub fn interval(&mut self, difficulty: Difficulty) -> (Note, Note) {
        let first = Note::new(self.swar(difficulty), Octave::Madhya);
        let second = Note::new(self.swar(difficulty), Octave::Madhya);
        (first, second)
    }

    fn swar(&mut self, difficulty: Difficulty) -> Swar {
        difficulty
            .eligible_swars()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Swar::Sa)
    }
}
