use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::views::{GameView, HomeView, SettingsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play/:mode", GameView)] Play { mode: String },
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let home_ctx = ctx.clone();

    rsx! {
        header { class: "topbar",
            button {
                class: "brand",
                onclick: move |_| {
                    home_ctx.click();
                    navigator.push(Route::Home {});
                },
                "Math Trainer"
            }
            button {
                class: "nav-settings",
                onclick: move |_| {
                    ctx.click();
                    navigator.push(Route::Settings {});
                },
                "Settings"
            }
        }
    }
}
