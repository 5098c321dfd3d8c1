use dioxus::prelude::*;
use services::TrainerService;
use swar_core::model::GameMode;
use swar_core::quiz::SessionState;

use crate::context::AppContext;
use crate::views::state::use_session_state;
use crate::vm::{
    AnswerAction, answer_grid, difficulty_options, feedback_banner, mode_cards, replay_label,
    sequence_progress, stats, time_bar,
};

#[component]
pub fn GamesView() -> Element {
    let ctx = use_context::<AppContext>();
    let trainer = ctx.trainer();
    let state = use_session_state(&trainer);
    let snapshot = state.read().clone();

    rsx! {
        div { class: "page games-page",
            if snapshot.is_active() {
                ActiveGame { state: snapshot }
            } else {
                GameSetup { state: snapshot }
            }
        }
    }
}

#[component]
fn GameSetup(state: SessionState) -> Element {
    let trainer = use_context::<AppContext>().trainer();
    let start_trainer = trainer.clone();

    let cards = mode_cards(state.mode()).into_iter().map(|card| {
        let trainer = trainer.clone();
        let class = if card.selected {
            "mode-card mode-card--selected"
        } else {
            "mode-card"
        };
        rsx! {
            button {
                key: "{card.title}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    trainer.set_mode(card.mode);
                },
                div { class: "mode-card-title", "{card.title}" }
                div { class: "mode-card-blurb", "{card.blurb}" }
            }
        }
    });

    let levels = difficulty_options(state.difficulty()).into_iter().map(|option| {
        let trainer = trainer.clone();
        let class = if option.selected {
            "difficulty-btn difficulty-btn--selected"
        } else {
            "difficulty-btn"
        };
        rsx! {
            button {
                key: "{option.label}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    trainer.set_difficulty(option.difficulty);
                },
                span { class: "difficulty-label", "{option.label}" }
                span { class: "difficulty-caption", "{option.caption}" }
            }
        }
    });

    rsx! {
        header { class: "view-header",
            h2 { class: "view-title", "Choose Your Training Game" }
        }
        div { class: "view-divider" }
        div { class: "mode-grid", {cards} }
        p { class: "difficulty-title", "Select Difficulty:" }
        div { class: "difficulty-row", {levels} }
        button {
            class: "btn btn-primary start-btn",
            r#type: "button",
            onclick: move |_| {
                start_trainer.start_game();
            },
            "Start Training"
        }
    }
}

#[component]
fn ActiveGame(state: SessionState) -> Element {
    let trainer = use_context::<AppContext>().trainer();
    let replay_trainer = trainer.clone();
    let exit_trainer = trainer.clone();

    let stat_cards = stats(&state).into_iter().map(|stat| {
        rsx! {
            div { key: "{stat.label}", class: "stat-card",
                div { class: "stat-value", "{stat.value}" }
                div { class: "stat-label", "{stat.label}" }
            }
        }
    });

    let buttons = answer_grid(&state).into_iter().map(|button| {
        let trainer = trainer.clone();
        let action = button.action;
        let class = button.class();
        rsx! {
            button {
                key: "{button.id}",
                id: "{button.id}",
                class: "{class}",
                r#type: "button",
                disabled: button.disabled,
                onclick: move |_| submit_answer(&trainer, action),
                "{button.label}"
            }
        }
    });

    let replay = replay_label(state.mode());
    let grid_class = match state.mode() {
        GameMode::Interval => "answer-grid answer-grid--interval",
        _ => "answer-grid",
    };

    rsx! {
        div { class: "stats-row", {stat_cards} }

        if let Some(bar) = time_bar(&state) {
            div { class: "time-bar",
                span { class: "time-bar-title", "Time Left:" }
                div { class: "time-bar-track",
                    div { class: "{bar.tone.class()}", style: "width: {bar.percent}%" }
                }
                div { class: "time-bar-label", "{bar.label}" }
            }
        }

        div { class: "game-actions",
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    replay_trainer.replay();
                },
                "{replay}"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    exit_trainer.exit_game();
                },
                "Exit"
            }
        }

        if let Some(banner) = feedback_banner(&state) {
            div {
                class: if banner.correct { "feedback feedback--correct" } else { "feedback feedback--wrong" },
                div { class: "feedback-headline",
                    "{banner.headline}"
                    if let Some(points) = banner.points {
                        span { class: "feedback-points", " {points}" }
                    }
                }
                if let Some(combo) = banner.combo {
                    div { class: "feedback-combo", "{combo}" }
                }
            }
        }

        if let Some(progress) = sequence_progress(&state) {
            div { class: "sequence-progress",
                div { class: "sequence-caption", "{progress.caption}" }
                div { class: "sequence-slots",
                    for (idx, slot) in progress.slots.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: if idx < progress.filled { "sequence-slot sequence-slot--filled" } else { "sequence-slot" },
                            "{slot}"
                        }
                    }
                }
            }
        }

        div { class: "{grid_class}", {buttons} }
    }
}

fn submit_answer(trainer: &TrainerService, action: AnswerAction) {
    let result = match action {
        AnswerAction::Note(note) => trainer.answer_note(note),
        AnswerAction::Pick(swar) => trainer.pick_sequence_swar(swar),
        AnswerAction::Interval(distance) => trainer.answer_interval(distance),
    };
    if let Err(err) = result {
        tracing::warn!("Answer rejected: {err}");
    }
}
