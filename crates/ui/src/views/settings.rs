use dioxus::prelude::*;
use quiz_core::Difficulty;

use crate::context::AppContext;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut difficulty = use_signal(|| ctx.settings().difficulty());
    let mut sound = use_signal(|| ctx.settings().sound_enabled());
    let mut save_error = use_signal(|| None::<String>);

    let pick_ctx = ctx.clone();
    let pick = use_callback(move |level: Difficulty| {
        pick_ctx.click();
        pick_ctx.settings().set_difficulty(level);
        difficulty.set(level);
    });

    rsx! {
        div { class: "page settings",
            h2 { "Settings" }

            section { class: "settings-section",
                h3 { "Difficulty" }
                div { class: "difficulty-options",
                    for level in Difficulty::ALL {
                        DifficultyButton {
                            key: "{level.as_str()}",
                            level,
                            selected: difficulty() == level,
                            on_pick: pick,
                        }
                    }
                }
                p { class: "muted", "Applies to the current and future rounds." }
            }

            section { class: "settings-section",
                h3 { "Sound" }
                label {
                    input {
                        r#type: "checkbox",
                        id: "sound-enabled",
                        checked: sound(),
                        onchange: move |evt: FormEvent| {
                            let enabled = evt.checked();
                            let services = ctx.services().clone();
                            spawn(async move {
                                match services.toggle_sound(enabled).await {
                                    Ok(()) => {
                                        sound.set(enabled);
                                        save_error.set(None);
                                    }
                                    Err(err) => save_error.set(Some(err.to_string())),
                                }
                            });
                        },
                    }
                    " Sound effects"
                }
                if let Some(err) = save_error() {
                    p { class: "status incorrect", "Could not save: {err}" }
                }
            }

            section { class: "settings-section about",
                h3 { "About This App" }
                p { "Short timed games for mental calculation speed, accuracy and memory." }
                p { class: "muted", "Version: {APP_VERSION}" }
            }
        }
    }
}

#[component]
fn DifficultyButton(level: Difficulty, selected: bool, on_pick: Callback<Difficulty>) -> Element {
    rsx! {
        button {
            class: if selected { "selected" } else { "" },
            onclick: move |_| on_pick.call(level),
            "{level.label()}"
        }
    }
}
