use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::harmonium_rows;

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let trainer = ctx.trainer();

    let rows = harmonium_rows().into_iter().map(|row| {
        let title = row.title;
        let keys = row.keys.into_iter().map(|key| {
            let trainer = trainer.clone();
            let note = key.note;
            let class = if key.is_black {
                "harmonium-key harmonium-key--black"
            } else {
                "harmonium-key"
            };
            rsx! {
                button {
                    key: "{key.id}",
                    id: "{key.id}",
                    class: "{class}",
                    r#type: "button",
                    onclick: move |_| trainer.play_key(note),
                    "{key.label}"
                }
            }
        });
        rsx! {
            div { key: "{title}", class: "harmonium-row",
                div { class: "harmonium-row-title", "{title}" }
                div { class: "harmonium-keys", {keys} }
            }
        }
    });

    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Complete 3-Octave Harmonium" }
                p { class: "view-subtitle", "Click any key to hear the note." }
            }
            div { class: "view-divider" }
            div { class: "harmonium", {rows} }
            p { class: "harmonium-legend",
                "White keys = Shuddha swars | Black keys = Komal (k) & Teevra (t) swars"
            }
        }
    }
}
