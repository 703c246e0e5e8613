use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ModeCardVm, map_mode_cards};

#[component]
pub fn HomeView() -> Element {
    let cards = map_mode_cards();

    rsx! {
        div { class: "page home",
            h2 { "Choose a game" }
            ul { class: "mode-list",
                for card in cards {
                    li { key: "{card.id}",
                        ModeCard { card }
                    }
                }
            }
        }
    }
}

#[component]
fn ModeCard(card: ModeCardVm) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let id = card.id;

    rsx! {
        button {
            class: "mode-card",
            id: "mode-{id}",
            onclick: move |_| {
                ctx.click();
                navigator.push(Route::Play { mode: id.to_string() });
            },
            h3 { "{card.title}" }
            p { "{card.description}" }
            span { class: "meta", "{card.meta}" }
        }
    }
}
