use services::TrainerSettings;
use swar_core::model::{BaseScale, Difficulty, GameMode};

use super::test_harness::{ViewKind, setup_view_harness};

fn settings(mode: GameMode, difficulty: Difficulty) -> TrainerSettings {
    TrainerSettings {
        scale: BaseScale::C,
        mode,
        difficulty,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_renders_three_octaves() {
    let mut harness = setup_view_harness(ViewKind::Practice, TrainerSettings::default());
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("id=\"key-").count(), 36, "{html}");
    assert_eq!(html.matches("harmonium-key--black").count(), 15, "{html}");
    assert!(html.contains("Taar Saptak"), "missing taar row in {html}");
    assert!(html.contains("Mandra Saptak"), "missing mandra row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn scale_selector_shows_current_frequency() {
    let settings = TrainerSettings {
        scale: BaseScale::G,
        ..TrainerSettings::default()
    };
    let mut harness = setup_view_harness(ViewKind::Scale, settings);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Current: Sa = G (392.00 Hz)"), "{html}");
    assert_eq!(html.matches("scale-btn--selected").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn header_and_guide_render_static_help() {
    let mut harness = setup_view_harness(ViewKind::Guide, TrainerSettings::default());
    harness.rebuild();
    let html = harness.render();
    for text in [
        "Master Indian Classical Music - Complete Harmonium Training",
        "How to Use",
        "Practice Mode",
        "Game Modes",
        "Difficulty Levels",
        "Scoring System",
        "Interval: Identify distance between notes",
    ] {
        assert!(html.contains(text), "missing {text} in {html}");
    }
    assert_eq!(html.matches("class=\"guide-section\"").count(), 4, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn games_view_idle_offers_setup() {
    let mut harness = setup_view_harness(
        ViewKind::Games,
        settings(GameMode::Sequence, Difficulty::Easy),
    );
    harness.rebuild();
    let html = harness.render();
    for text in [
        "Classic Mode",
        "Speed Challenge",
        "Sequence Memory",
        "Interval Training",
        "7 Shuddha",
        "12 Swars",
        "3 Octaves",
        "Start Training",
    ] {
        assert!(html.contains(text), "missing {text} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn games_view_active_classic_shows_stats_and_answers() {
    let mut harness = setup_view_harness(
        ViewKind::Games,
        settings(GameMode::Classic, Difficulty::Easy),
    );
    harness.trainer.start_game();
    harness.rebuild();
    let html = harness.render();
    for text in ["Score", "Attempts", "Streak", "Best", "×1", "Replay", "Exit"] {
        assert!(html.contains(text), "missing {text} in {html}");
    }
    assert_eq!(html.matches("id=\"answer-").count(), 7, "{html}");
    assert!(!html.contains("Time Left"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn games_view_active_speed_shows_the_clock() {
    let mut harness = setup_view_harness(
        ViewKind::Games,
        settings(GameMode::Speed, Difficulty::Hard),
    );
    harness.trainer.start_game();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Time Left:"), "{html}");
    assert!(html.contains("10s"), "{html}");
    assert!(html.contains("width: 100%"), "{html}");
    assert_eq!(html.matches("id=\"answer-").count(), 36, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn games_view_sequence_shows_empty_slots() {
    let mut harness = setup_view_harness(
        ViewKind::Games,
        settings(GameMode::Sequence, Difficulty::Medium),
    );
    harness.trainer.start_game();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your Answer: 0 / 4"), "{html}");
    assert!(html.contains("Replay Sequence"), "{html}");
    assert_eq!(html.matches("id=\"pick-").count(), 12, "{html}");
}
