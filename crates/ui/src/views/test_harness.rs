use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::{Difficulty, GameMode};
use services::{AppServices, SilentPlayer};

use crate::context::{AppContext, build_app_context};
use crate::views::{GameView, HomeView, SettingsView};

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Settings,
    Game(String),
}

impl ViewKind {
    pub fn game(mode: GameMode) -> Self {
        Self::Game(mode.id().to_string())
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
        ViewKind::Game(mode) => rsx! { GameView { mode } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub async fn setup_view_harness(view: ViewKind, difficulty: Difficulty) -> ViewHarness {
    let services = AppServices::in_memory(difficulty, Arc::new(SilentPlayer))
        .await
        .expect("in-memory services");
    setup_view_harness_with_services(view, services)
}

pub fn setup_view_harness_with_services(view: ViewKind, services: AppServices) -> ViewHarness {
    let ctx = build_app_context(services.clone());
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { ctx, view });
    ViewHarness { dom, services }
}
