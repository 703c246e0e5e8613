use quiz_core::{Difficulty, GameMode};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_every_mode() {
    let mut harness = setup_view_harness(ViewKind::Home, Difficulty::Easy).await;
    harness.rebuild();
    let html = harness.render();
    for mode in GameMode::ALL {
        assert!(html.contains(mode.title()), "missing {} in {html}", mode.title());
        let id = format!("mode-{}", mode.id());
        assert!(html.contains(&id), "missing {id} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_marks_current_difficulty() {
    let mut harness = setup_view_harness(ViewKind::Settings, Difficulty::Medium).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Difficulty"), "missing heading in {html}");
    assert!(html.contains("class=\"selected\""), "no selected level in {html}");
    assert!(html.contains("Sound effects"), "missing sound toggle in {html}");
    let version = format!("Version: {}", env!("CARGO_PKG_VERSION"));
    assert!(html.contains(&version), "missing {version} in {html}");
    assert_eq!(harness.services.settings().difficulty(), Difficulty::Medium);
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_renders_question_and_four_candidates() {
    let mut harness =
        setup_view_harness(ViewKind::game(GameMode::Arithmetic), Difficulty::Easy).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Basic Calculation"), "missing title in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("width: 100%"), "countdown bar not full in {html}");
    assert_eq!(html.matches("candidate neutral").count(), 4, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn comparison_view_offers_three_relations() {
    let mut harness =
        setup_view_harness(ViewKind::game(GameMode::Comparison), Difficulty::Hard).await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("candidate neutral").count(), 3, "{html}");
    assert!(html.contains("Hard"), "missing difficulty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pattern_view_renders_grid_with_hidden_cell() {
    let mut harness = setup_view_harness(ViewKind::game(GameMode::Pattern), Difficulty::Easy).await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("class=\"cell").count(), 9, "{html}");
    assert_eq!(html.matches("cell hidden").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_mode_shows_message() {
    let mut harness = setup_view_harness(ViewKind::Game("chess".into()), Difficulty::Easy).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Unknown game"), "missing message in {html}");
}
