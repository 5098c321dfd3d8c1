use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{scale_caption, scale_options};

#[component]
pub fn ScaleSelector() -> Element {
    let ctx = use_context::<AppContext>();
    let trainer = ctx.trainer();
    let scale = use_signal(|| trainer.base_scale());

    let current = scale();
    let caption = scale_caption(current);
    let buttons = scale_options(current).into_iter().map(|option| {
        let trainer = trainer.clone();
        let mut scale = scale;
        let class = if option.selected {
            "scale-btn scale-btn--selected"
        } else {
            "scale-btn"
        };
        rsx! {
            button {
                key: "{option.label}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    trainer.set_base_scale(option.scale);
                    scale.set(option.scale);
                },
                "{option.label}"
            }
        }
    });

    rsx! {
        section { class: "scale-selector",
            span { class: "scale-selector-title", "Set Sa (Base Scale):" }
            div { class: "scale-options", {buttons} }
            p { class: "scale-caption", "{caption}" }
        }
    }
}
