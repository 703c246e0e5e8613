use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::GameMode;
use quiz_core::model::Candidate;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CandidateVm, QuestionBody, map_round};

#[component]
pub fn GameView(mode: String) -> Element {
    match mode.parse::<GameMode>() {
        // Keyed so switching modes tears down the previous round loop.
        Ok(mode) => rsx! { RoundBoard { key: "{mode.id()}", mode } },
        Err(_) => rsx! {
            div { class: "page",
                h2 { "Unknown game" }
                p { class: "muted", "There is no game called \"{mode}\"." }
                BackButton {}
            }
        },
    }
}

/// Owns the round loop for one visit; dropping the component drops the
/// handle, which stops the loop.
#[component]
fn RoundBoard(mode: GameMode) -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_hook(|| Rc::new(ctx.rounds().start(mode)));
    let mut snapshot = use_signal(|| handle.snapshot());

    let updates = Rc::clone(&handle);
    use_hook(move || {
        let mut rx = updates.subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                snapshot.set(next);
            }
        });
    });

    let vm = map_round(&snapshot.read());
    let time_percent = vm.time_percent();
    let submit = use_callback(move |candidate: Candidate| {
        // Only fails once the loop is gone, i.e. while leaving the page.
        let _ = handle.submit(candidate);
    });

    rsx! {
        div { class: "page game",
            div { class: "round-header",
                BackButton {}
                h2 { "{vm.title}" }
                span { class: "muted", "{vm.difficulty}" }
            }
            div { class: "round-header",
                span { class: "score", "Score: {vm.score}" }
                span { class: vm.timer_class(), "{vm.time_left}s" }
            }
            div { class: "countdown",
                div { class: "countdown-fill", style: "width: {time_percent}%" }
            }
            if let Some(prompt) = vm.prompt {
                p { class: "prompt", "{prompt}" }
            }
            QuestionPanel { body: vm.body.clone() }
            div { class: "candidates",
                for (idx, candidate) in vm.candidates.iter().cloned().enumerate() {
                    CandidateButton {
                        key: "{idx}",
                        candidate,
                        enabled: vm.accepting_input,
                        on_pick: submit,
                    }
                }
            }
            p { class: vm.status_class(),
                if let Some(status) = vm.status.as_ref() {
                    "{status}"
                }
            }
        }
    }
}

#[component]
fn QuestionPanel(body: QuestionBody) -> Element {
    match body {
        QuestionBody::Loading => rsx! {
            div { class: "question muted", "Loading…" }
        },
        QuestionBody::Text(text) => rsx! {
            div { class: "question", "{text}" }
        },
        QuestionBody::Grid(rows) => rsx! {
            div { class: "grid",
                for row in rows {
                    for cell in row {
                        match cell {
                            Some(value) => rsx! { div { class: "cell", "{value}" } },
                            None => rsx! { div { class: "cell hidden", "?" } },
                        }
                    }
                }
            }
        },
        QuestionBody::Sequence(terms) => {
            let shown = terms
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            rsx! {
                div { class: "question sequence", "{shown}, ?" }
            }
        }
    }
}

#[component]
fn CandidateButton(candidate: CandidateVm, enabled: bool, on_pick: Callback<Candidate>) -> Element {
    let picked = candidate.candidate.clone();

    rsx! {
        button {
            class: candidate.class(),
            disabled: !enabled,
            onclick: move |_| on_pick.call(picked.clone()),
            "{candidate.label}"
        }
    }
}

#[component]
fn BackButton() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    rsx! {
        button {
            class: "back",
            onclick: move |_| {
                ctx.click();
                navigator.push(Route::Home {});
            },
            "← Menu"
        }
    }
}
