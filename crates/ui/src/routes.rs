use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AppHeader, GamesView, PracticeView, ScaleSelector, UsageGuide};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PracticeView)] Practice {},
        #[route("/games", GamesView)] Games {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                AppHeader {}
                ScaleSelector {}
                Outlet::<Route> {}
                UsageGuide {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Swar" }
            p { class: "sidebar-subtitle", "Harmonium ear trainer" }
            ul {
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Games {}, "Games" } }
            }
        }
    }
}
