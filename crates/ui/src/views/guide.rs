use dioxus::prelude::*;

use crate::vm::{APP_TAGLINE, APP_TITLE, usage_guide};

#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "{APP_TITLE}" }
            p { class: "app-tagline", "{APP_TAGLINE}" }
        }
    }
}

#[component]
pub fn UsageGuide() -> Element {
    let sections = usage_guide().into_iter().map(|section| {
        rsx! {
            div { key: "{section.title}", class: "guide-section",
                h4 { class: "guide-section-title", "{section.title}:" }
                ul {
                    for item in section.items.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }
            }
        }
    });

    rsx! {
        section { class: "usage-guide",
            h3 { class: "usage-guide-title", "How to Use:" }
            div { class: "guide-grid", {sections} }
        }
    }
}
