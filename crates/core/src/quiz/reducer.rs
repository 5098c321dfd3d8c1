use std::time::Duration;

use crate::model::{Difficulty, GameMode};
use crate::quiz::state::SPEED_TIME_LIMIT;
use crate::quiz::{Answer, Cue, Feedback, Phase, QuizTarget, SessionState};

/// How long a miss stays on screen before the player may try again.
pub const MISS_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);
/// Pause between a speed-mode timeout and the next target.
pub const TIMEOUT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);
/// Period of the speed-mode countdown.
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

//
// ─── EVENTS & EFFECTS ─────────────────────────────────────────────────────────
//

/// Inputs to the quiz state machine. Targets are generated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    SetMode(GameMode),
    SetDifficulty(Difficulty),
    Start { target: QuizTarget },
    Answer(Answer),
    Tick,
    Advance { round: u64, target: QuizTarget },
    Dismiss { round: u64 },
    Replay,
    Exit,
}

/// Side effects requested by a transition, executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Play(Vec<Cue>),
    ScheduleAdvance { round: u64, delay: Duration },
    ScheduleDismiss { round: u64, delay: Duration },
    StartCountdown,
    StopCountdown,
    CancelScheduled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

//
// ─── REDUCER ──────────────────────────────────────────────────────────────────
//

/// Apply `event` to `state`. Events that do not fit the current phase are no-ops.
#[must_use]
pub fn reduce(state: SessionState, event: QuizEvent) -> Transition {
    match event {
        QuizEvent::SetMode(mode) => configure(state, |s| s.mode = mode),
        QuizEvent::SetDifficulty(difficulty) => configure(state, |s| s.difficulty = difficulty),
        QuizEvent::Start { target } => start(state, target),
        QuizEvent::Answer(answer) => answer_current(state, answer),
        QuizEvent::Tick => tick(state),
        QuizEvent::Advance { round, target } => advance(state, round, target),
        QuizEvent::Dismiss { round } => dismiss(state, round),
        QuizEvent::Replay => replay(state),
        QuizEvent::Exit => exit(state),
    }
}

fn configure(mut state: SessionState, apply: impl FnOnce(&mut SessionState)) -> Transition {
    if !state.active {
        apply(&mut state);
    }
    Transition::quiet(state)
}

fn start(mut state: SessionState, target: QuizTarget) -> Transition {
    state.active = true;
    state.score = 0;
    state.attempts = 0;
    state.streak = 0;
    state.combo = 1;
    state.feedback = None;
    state.round += 1;

    let mut effects = vec![Effect::CancelScheduled, Effect::StopCountdown];
    effects.push(install_target(&mut state, target));
    if state.mode.is_timed() {
        effects.push(Effect::StartCountdown);
    }
    Transition { state, effects }
}

fn install_target(state: &mut SessionState, target: QuizTarget) -> Effect {
    let cues = target.cues();
    state.target = Some(target);
    state.picks.clear();
    state.time_left = SPEED_TIME_LIMIT;
    Effect::Play(cues)
}

fn answer_current(mut state: SessionState, answer: Answer) -> Transition {
    if state.phase() != Phase::AwaitingAnswer {
        return Transition::quiet(state);
    }
    let Some(target) = state.target.clone() else {
        return Transition::quiet(state);
    };

    let outcome = match (&target, answer) {
        (QuizTarget::Single(expected), Answer::Note(selected)) => {
            let matches = if state.difficulty.octave_aware() {
                *expected == selected
            } else {
                expected.swar == selected.swar
            };
            if matches {
                Ok(single_note_points(&state))
            } else {
                Err(Feedback::WrongNote {
                    expected: *expected,
                    selected,
                })
            }
        }
        (QuizTarget::Sequence(expected), Answer::SequencePick(swar)) => {
            state.picks.push(swar);
            if state.picks.len() < expected.len() {
                return Transition::quiet(state);
            }
            let matches = expected
                .iter()
                .zip(&state.picks)
                .all(|(note, picked)| note.swar == *picked);
            if matches {
                Ok(points_for_len(expected.len()).saturating_mul(state.combo))
            } else {
                Err(Feedback::WrongSequence {
                    expected: expected.clone(),
                    picked: state.picks.clone(),
                })
            }
        }
        (QuizTarget::Interval { .. }, Answer::Interval(selected)) => {
            let expected = target.interval_distance().unwrap_or_default();
            if expected == selected {
                Ok(state.combo.saturating_mul(2))
            } else {
                Err(Feedback::WrongInterval { expected, selected })
            }
        }
        _ => return Transition::quiet(state),
    };

    state.attempts = state.attempts.saturating_add(1);
    let effect = match outcome {
        Ok(points) => {
            award(&mut state, points);
            Effect::ScheduleAdvance {
                round: state.round,
                delay: state.mode.advance_delay(),
            }
        }
        Err(feedback) => {
            break_streak(&mut state);
            state.feedback = Some(feedback);
            Effect::ScheduleDismiss {
                round: state.round,
                delay: MISS_FEEDBACK_DELAY,
            }
        }
    };
    Transition {
        state,
        effects: vec![effect],
    }
}

/// Classic awards the combo; speed scales it by the whole seconds left,
/// so `ceil(time_left * combo)` is the plain product.
fn single_note_points(state: &SessionState) -> u32 {
    if state.mode.is_timed() {
        state.time_left.saturating_mul(state.combo)
    } else {
        state.combo
    }
}

fn points_for_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn award(state: &mut SessionState, points: u32) {
    state.score = state.score.saturating_add(points);
    state.streak = state.streak.saturating_add(1);
    state.best_streak = state.best_streak.max(state.streak);
    if state.streak % state.mode.combo_step() == 0 {
        state.combo = state.combo.saturating_add(1);
    }
    state.feedback = Some(Feedback::Correct { points });
}

fn break_streak(state: &mut SessionState) {
    state.streak = 0;
    state.combo = 1;
}

fn tick(mut state: SessionState) -> Transition {
    if !state.mode.is_timed() || state.phase() != Phase::AwaitingAnswer {
        return Transition::quiet(state);
    }
    if state.time_left > 1 {
        state.time_left -= 1;
        return Transition::quiet(state);
    }

    let Some(expected) = state.target.as_ref().and_then(QuizTarget::single_note) else {
        return Transition::quiet(state);
    };
    break_streak(&mut state);
    state.time_left = SPEED_TIME_LIMIT;
    state.feedback = Some(Feedback::Timeout { expected });
    let effects = vec![Effect::ScheduleAdvance {
        round: state.round,
        delay: TIMEOUT_ADVANCE_DELAY,
    }];
    Transition { state, effects }
}

fn advance(mut state: SessionState, round: u64, target: QuizTarget) -> Transition {
    if !state.active || round != state.round {
        return Transition::quiet(state);
    }
    state.feedback = None;
    state.round += 1;
    let mut effects = vec![install_target(&mut state, target)];
    // Each target gets a fresh countdown phase.
    if state.mode.is_timed() {
        effects.push(Effect::StartCountdown);
    }
    Transition { state, effects }
}

fn dismiss(mut state: SessionState, round: u64) -> Transition {
    if !state.active || round != state.round {
        return Transition::quiet(state);
    }
    state.feedback = None;
    state.picks.clear();
    Transition::quiet(state)
}

fn replay(state: SessionState) -> Transition {
    let effects = match (state.active, state.target.as_ref()) {
        (true, Some(target)) => vec![Effect::Play(target.cues())],
        _ => Vec::new(),
    };
    Transition { state, effects }
}

fn exit(mut state: SessionState) -> Transition {
    state.active = false;
    state.feedback = None;
    state.target = None;
    state.picks.clear();
    Transition {
        state,
        effects: vec![Effect::StopCountdown, Effect::CancelScheduled],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Octave, Swar};

    fn started(mode: GameMode, difficulty: Difficulty, target: QuizTarget) -> SessionState {
        let state = SessionState::new(mode, difficulty);
        reduce(state, QuizEvent::Start { target }).state
    }

    fn single(swar: Swar) -> QuizTarget {
        QuizTarget::Single(Note::madhya(swar))
    }

    /// Answer correctly and move on to a fresh target with the same swar.
    fn correct_round(state: SessionState, swar: Swar) -> SessionState {
        let answered = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(swar)))).state;
        assert!(answered.feedback().is_some_and(Feedback::is_correct));
        let round = answered.round();
        reduce(
            answered,
            QuizEvent::Advance {
                round,
                target: single(swar),
            },
        )
        .state
    }

    #[test]
    fn start_resets_counters_and_plays_target() {
        let state = SessionState::new(GameMode::Classic, Difficulty::Easy);
        let transition = reduce(
            state,
            QuizEvent::Start {
                target: single(Swar::Pa),
            },
        );
        let state = transition.state;
        assert_eq!(state.phase(), Phase::AwaitingAnswer);
        assert_eq!(state.score(), 0);
        assert_eq!(state.combo(), 1);
        assert_eq!(state.round(), 1);
        assert!(transition
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::Play(cues) if cues.len() == 1)));
        assert!(!transition.effects.contains(&Effect::StartCountdown));
    }

    #[test]
    fn speed_start_requests_countdown() {
        let transition = reduce(
            SessionState::new(GameMode::Speed, Difficulty::Medium),
            QuizEvent::Start {
                target: single(Swar::Sa),
            },
        );
        assert!(transition.effects.contains(&Effect::StartCountdown));
        assert_eq!(transition.state.time_left(), SPEED_TIME_LIMIT);
    }

    #[test]
    fn classic_correct_awards_combo_and_schedules_advance() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Ga));
        let transition = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Ga))));
        let state = transition.state;
        assert_eq!(state.score(), 1);
        assert_eq!(state.streak(), 1);
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.feedback(), Some(&Feedback::Correct { points: 1 }));
        assert_eq!(
            transition.effects,
            vec![Effect::ScheduleAdvance {
                round: 1,
                delay: Duration::from_millis(1000)
            }]
        );
    }

    #[test]
    fn non_hard_ignores_selected_octave() {
        let state = started(GameMode::Classic, Difficulty::Medium, single(Swar::Re));
        let state = reduce(
            state,
            QuizEvent::Answer(Answer::Note(Note::new(Swar::Re, Octave::Taar))),
        )
        .state;
        assert!(state.feedback().is_some_and(Feedback::is_correct));
    }

    #[test]
    fn hard_requires_matching_octave() {
        let target = QuizTarget::Single(Note::new(Swar::Re, Octave::Mandra));
        let state = started(GameMode::Classic, Difficulty::Hard, target);
        let transition = reduce(
            state,
            QuizEvent::Answer(Answer::Note(Note::new(Swar::Re, Octave::Madhya))),
        );
        assert_eq!(
            transition.state.feedback(),
            Some(&Feedback::WrongNote {
                expected: Note::new(Swar::Re, Octave::Mandra),
                selected: Note::new(Swar::Re, Octave::Madhya),
            })
        );
        assert_eq!(
            transition.effects,
            vec![Effect::ScheduleDismiss {
                round: 1,
                delay: MISS_FEEDBACK_DELAY
            }]
        );
    }

    #[test]
    fn answers_are_ignored_while_feedback_is_shown() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Sa));
        let state = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Re)))).state;
        let again = reduce(
            state.clone(),
            QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Sa))),
        );
        assert_eq!(again.state, state);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn miss_resets_streak_and_combo_but_not_best() {
        let mut state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Ma));
        for _ in 0..5 {
            state = correct_round(state, Swar::Ma);
        }
        assert_eq!(state.combo(), 2);
        assert_eq!(state.best_streak(), 5);

        let state = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Pa)))).state;
        assert_eq!(state.streak(), 0);
        assert_eq!(state.combo(), 1);
        assert_eq!(state.best_streak(), 5);
    }

    #[test]
    fn combo_rises_every_fifth_correct_answer() {
        let mut state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Sa));
        let mut combos = Vec::new();
        for _ in 0..10 {
            state = correct_round(state, Swar::Sa);
            combos.push(state.combo());
        }
        assert_eq!(combos, vec![1, 1, 1, 1, 2, 2, 2, 2, 2, 3]);
        // The fifth answer still scores at x1; the combo rises after it.
        assert_eq!(state.score(), 15);
    }

    #[test]
    fn dismiss_keeps_the_same_target() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Dha));
        let state = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Ni)))).state;
        let state = reduce(state, QuizEvent::Dismiss { round: 1 }).state;
        assert_eq!(state.phase(), Phase::AwaitingAnswer);
        assert_eq!(state.target(), Some(&single(Swar::Dha)));
        let state = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Dha)))).state;
        assert_eq!(state.attempts(), 2);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn stale_advance_is_ignored() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Sa));
        let state = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Sa)))).state;
        let restarted = reduce(
            state,
            QuizEvent::Start {
                target: single(Swar::Pa),
            },
        )
        .state;
        let after = reduce(
            restarted.clone(),
            QuizEvent::Advance {
                round: 1,
                target: single(Swar::Ni),
            },
        );
        assert_eq!(after.state, restarted);
        assert!(after.effects.is_empty());
    }

    #[test]
    fn stale_dismiss_keeps_feedback_of_a_new_game() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Re));
        let missed = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Ga)))).state;
        let old_round = missed.round();
        let idle = reduce(missed, QuizEvent::Exit).state;
        let restarted = reduce(
            idle,
            QuizEvent::Start {
                target: single(Swar::Ma),
            },
        )
        .state;
        let missed_again =
            reduce(restarted, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Pa)))).state;
        assert!(missed_again.feedback().is_some());
        assert_ne!(missed_again.round(), old_round);

        let after = reduce(missed_again.clone(), QuizEvent::Dismiss { round: old_round });
        assert_eq!(after.state, missed_again);
        assert!(after.effects.is_empty());
        assert_eq!(
            after.state.feedback(),
            Some(&Feedback::WrongNote {
                expected: Note::madhya(Swar::Ma),
                selected: Note::madhya(Swar::Pa),
            })
        );
    }

    #[test]
    fn speed_advance_restarts_the_countdown() {
        let state = started(GameMode::Speed, Difficulty::Easy, single(Swar::Pa));
        let answered = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Pa)))).state;
        let round = answered.round();
        let transition = reduce(
            answered,
            QuizEvent::Advance {
                round,
                target: single(Swar::Dha),
            },
        );
        assert_eq!(transition.state.time_left(), SPEED_TIME_LIMIT);
        assert_eq!(transition.effects.last(), Some(&Effect::StartCountdown));

        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Pa));
        let answered = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Pa)))).state;
        let round = answered.round();
        let transition = reduce(
            answered,
            QuizEvent::Advance {
                round,
                target: single(Swar::Dha),
            },
        );
        assert!(!transition.effects.contains(&Effect::StartCountdown));
    }

    #[test]
    fn speed_points_scale_with_time_left() {
        let mut state = started(GameMode::Speed, Difficulty::Easy, single(Swar::Pa));
        for _ in 0..5 {
            let answered =
                reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Pa)))).state;
            let round = answered.round();
            state = reduce(
                answered,
                QuizEvent::Advance {
                    round,
                    target: single(Swar::Pa),
                },
            )
            .state;
        }
        assert_eq!(state.combo(), 2);
        let score_before = state.score();
        for _ in 0..3 {
            state = reduce(state, QuizEvent::Tick).state;
        }
        assert_eq!(state.time_left(), 7);
        let state = reduce(state, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Pa)))).state;
        assert_eq!(state.score() - score_before, 14);
        assert_eq!(state.feedback(), Some(&Feedback::Correct { points: 14 }));
    }

    #[test]
    fn countdown_reaching_zero_times_out() {
        let mut state = started(GameMode::Speed, Difficulty::Easy, single(Swar::Ga));
        state = correct_round(state, Swar::Ga);
        assert_eq!(state.streak(), 1);
        for _ in 0..9 {
            state = reduce(state, QuizEvent::Tick).state;
        }
        assert_eq!(state.time_left(), 1);
        let attempts = state.attempts();
        let transition = reduce(state, QuizEvent::Tick);
        let state = transition.state;
        assert_eq!(
            state.feedback(),
            Some(&Feedback::Timeout {
                expected: Note::madhya(Swar::Ga)
            })
        );
        assert_eq!(state.streak(), 0);
        assert_eq!(state.combo(), 1);
        assert_eq!(state.attempts(), attempts);
        assert_eq!(state.time_left(), SPEED_TIME_LIMIT);
        assert_eq!(
            transition.effects,
            vec![Effect::ScheduleAdvance {
                round: state.round(),
                delay: TIMEOUT_ADVANCE_DELAY
            }]
        );
    }

    #[test]
    fn ticks_are_ignored_outside_speed_mode_and_during_feedback() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Ga));
        let ticked = reduce(state.clone(), QuizEvent::Tick).state;
        assert_eq!(ticked, state);

        let speed = started(GameMode::Speed, Difficulty::Easy, single(Swar::Ga));
        let missed = reduce(speed, QuizEvent::Answer(Answer::Note(Note::madhya(Swar::Sa)))).state;
        let ticked = reduce(missed.clone(), QuizEvent::Tick).state;
        assert_eq!(ticked.time_left(), missed.time_left());
    }

    fn sequence(swars: &[Swar]) -> QuizTarget {
        QuizTarget::Sequence(swars.iter().copied().map(Note::madhya).collect())
    }

    #[test]
    fn sequence_evaluates_only_when_complete() {
        let target = sequence(&[Swar::Sa, Swar::Ga, Swar::Pa]);
        let state = started(GameMode::Sequence, Difficulty::Easy, target);
        let state = reduce(state, QuizEvent::Answer(Answer::SequencePick(Swar::Sa))).state;
        let transition = reduce(state, QuizEvent::Answer(Answer::SequencePick(Swar::Ga)));
        assert!(transition.effects.is_empty());
        assert_eq!(transition.state.attempts(), 0);
        assert_eq!(transition.state.picks(), &[Swar::Sa, Swar::Ga]);

        let transition = reduce(
            transition.state,
            QuizEvent::Answer(Answer::SequencePick(Swar::Pa)),
        );
        let state = transition.state;
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.score(), 3);
        assert_eq!(
            transition.effects,
            vec![Effect::ScheduleAdvance {
                round: 1,
                delay: Duration::from_millis(1500)
            }]
        );
    }

    #[test]
    fn one_substitution_fails_the_whole_sequence() {
        let target = sequence(&[Swar::Sa, Swar::Ga, Swar::Pa, Swar::Ni]);
        let mut state = started(GameMode::Sequence, Difficulty::Medium, target);
        for swar in [Swar::Sa, Swar::Ga, Swar::Ma, Swar::Ni] {
            state = reduce(state, QuizEvent::Answer(Answer::SequencePick(swar))).state;
        }
        assert!(matches!(
            state.feedback(),
            Some(Feedback::WrongSequence { .. })
        ));
        assert_eq!(state.score(), 0);

        let round = state.round();
        let state = reduce(state, QuizEvent::Dismiss { round }).state;
        assert!(state.picks().is_empty());
        assert_eq!(state.target().map(QuizTarget::sequence_len), Some(4));
    }

    #[test]
    fn sequence_combo_rises_every_third_success() {
        let target = sequence(&[Swar::Sa, Swar::Re, Swar::Ga]);
        let mut state = started(GameMode::Sequence, Difficulty::Easy, target.clone());
        for _ in 0..3 {
            for swar in [Swar::Sa, Swar::Re, Swar::Ga] {
                state = reduce(state, QuizEvent::Answer(Answer::SequencePick(swar))).state;
            }
            let round = state.round();
            state = reduce(
                state,
                QuizEvent::Advance {
                    round,
                    target: target.clone(),
                },
            )
            .state;
        }
        assert_eq!(state.combo(), 2);
        assert_eq!(state.score(), 9);
    }

    #[test]
    fn interval_checks_absolute_distance() {
        let target = QuizTarget::Interval {
            first: Note::madhya(Swar::Pa),
            second: Note::madhya(Swar::Re),
        };
        let state = started(GameMode::Interval, Difficulty::Medium, target.clone());
        let hit = reduce(state.clone(), QuizEvent::Answer(Answer::Interval(5))).state;
        assert_eq!(hit.score(), 2);
        assert_eq!(hit.feedback(), Some(&Feedback::Correct { points: 2 }));

        for wrong in (0..=11).filter(|d| *d != 5) {
            let miss = reduce(state.clone(), QuizEvent::Answer(Answer::Interval(wrong))).state;
            assert_eq!(
                miss.feedback(),
                Some(&Feedback::WrongInterval {
                    expected: 5,
                    selected: wrong
                })
            );
        }
    }

    #[test]
    fn mismatched_answer_kind_is_a_noop() {
        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Sa));
        let transition = reduce(state.clone(), QuizEvent::Answer(Answer::Interval(0)));
        assert_eq!(transition.state, state);
    }

    #[test]
    fn exit_returns_to_idle_and_cancels_timers() {
        let state = started(GameMode::Speed, Difficulty::Easy, single(Swar::Sa));
        let transition = reduce(state, QuizEvent::Exit);
        assert_eq!(transition.state.phase(), Phase::Idle);
        assert!(transition.state.feedback().is_none());
        assert_eq!(
            transition.effects,
            vec![Effect::StopCountdown, Effect::CancelScheduled]
        );
    }

    #[test]
    fn settings_change_only_while_idle() {
        let state = SessionState::new(GameMode::Classic, Difficulty::Easy);
        let state = reduce(state, QuizEvent::SetMode(GameMode::Interval)).state;
        assert_eq!(state.mode(), GameMode::Interval);

        let target = QuizTarget::Interval {
            first: Note::madhya(Swar::Sa),
            second: Note::madhya(Swar::Sa),
        };
        let state = reduce(state, QuizEvent::Start { target }).state;
        let state = reduce(state, QuizEvent::SetDifficulty(Difficulty::Hard)).state;
        assert_eq!(state.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn best_streak_survives_a_restart() {
        let mut state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Sa));
        for _ in 0..3 {
            state = correct_round(state, Swar::Sa);
        }
        let state = reduce(
            state,
            QuizEvent::Start {
                target: single(Swar::Re),
            },
        )
        .state;
        assert_eq!(state.streak(), 0);
        assert_eq!(state.best_streak(), 3);
    }

    #[test]
    fn replay_only_while_active() {
        let idle = SessionState::default();
        assert!(reduce(idle, QuizEvent::Replay).effects.is_empty());

        let state = started(GameMode::Classic, Difficulty::Easy, single(Swar::Sa));
        let transition = reduce(state, QuizEvent::Replay);
        assert_eq!(transition.effects.len(), 1);
    }
}
