use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuizGenerator, SilentSink, TrainerService, TrainerSettings};

use crate::context::build_app_context;
use crate::views::{AppHeader, GamesView, PracticeView, ScaleSelector, UsageGuide};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Practice,
    Games,
    Scale,
    Guide,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    trainer: Arc<TrainerService>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let trainer = Arc::clone(&props.trainer);
    use_context_provider(|| build_app_context(trainer));
    match props.view {
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Games => rsx! { GamesView {} },
        ViewKind::Scale => rsx! { ScaleSelector {} },
        ViewKind::Guide => rsx! {
            AppHeader {}
            UsageGuide {}
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub trainer: Arc<TrainerService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Must be called inside a Tokio runtime; the trainer schedules its timers there.
pub fn setup_view_harness(view: ViewKind, settings: TrainerSettings) -> ViewHarness {
    let trainer = Arc::new(TrainerService::with_generator(
        Arc::new(SilentSink),
        settings,
        QuizGenerator::seeded(1),
    ));
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            trainer: Arc::clone(&trainer),
            view,
        },
    );
    ViewHarness { dom, trainer }
}
