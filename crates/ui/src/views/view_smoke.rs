use workshop_core::{NavAction, Screen};
use workshop_core::model::SectionId;

use super::test_harness::setup_view_harness;

fn section(id: &str) -> Screen {
    Screen::Section(SectionId::new(id))
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_reflects_persisted_progress() {
    let mut harness = setup_view_harness(Screen::Dashboard, Some(r#"{"a1":true}"#)).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Test Workshop",
        "Start Workshop",
        "Section 1",
        "Section A",
        "Intro to A",
        "1 of 1 steps completed",
        "100%",
        "0 of 1 steps completed",
        "0%",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Course Completed!"), "unexpected banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_banner_when_course_is_done() {
    let mut harness =
        setup_view_harness(Screen::Dashboard, Some(r#"{"a1":true,"b1":true}"#)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Course Completed!"), "missing banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_progress_renders_as_empty() {
    let mut harness = setup_view_harness(Screen::Dashboard, Some("{ definitely not json")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("100%"), "unexpected progress in {html}");
    assert!(html.contains("0 of 1 steps completed"));
}

#[tokio::test(flavor = "current_thread")]
async fn first_section_offers_next() {
    let mut harness = setup_view_harness(section("a"), None).await;
    harness.rebuild();
    let html = harness.render();

    for expected in ["Section 1", "1 of 2", "First step", "<em>first</em>", "Previous", "Next"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Complete Course"), "unexpected button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn last_section_offers_complete_course() {
    let mut harness = setup_view_harness(section("b"), None).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("2 of 2"), "missing position in {html}");
    assert!(html.contains("Complete Course"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_section_renders_not_found() {
    let mut harness = setup_view_harness(section("ghost"), None).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Section Not Found"), "missing fallback in {html}");
    assert!(html.contains("Back to Dashboard"));
}

#[tokio::test(flavor = "current_thread")]
async fn completed_screen_links_archive() {
    let mut harness = setup_view_harness(Screen::Completed, Some(r#"{"a1":true}"#)).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Congratulations!",
        "Review Course",
        "Download Workshop Code",
        "/workshop-code.zip",
        "1 / 2",
        "50%",
        "Rust",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn last_section_renders_completion_once_course_is_done() {
    let mut harness = setup_view_harness(section("b"), Some(r#"{"a1":true,"b1":true}"#)).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Congratulations!"), "missing completion in {html}");
    assert!(!html.contains("Complete Course"));
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_a_step_rerenders_and_persists() {
    let mut harness = setup_view_harness(section("a"), None).await;
    harness.rebuild();
    assert!(harness.render().contains("0 of 1 steps completed"));

    harness.toggle("a1").await;
    let html = harness.render();
    assert!(html.contains("1 of 1 steps completed"), "missing update in {html}");
    assert_eq!(harness.persisted().await.as_deref(), Some(r#"{"a1":true}"#));

    harness.toggle("a1").await;
    assert!(harness.render().contains("0 of 1 steps completed"));
    assert_eq!(harness.persisted().await.as_deref(), Some(r#"{"a1":false}"#));
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_intents_walk_and_clamp_sections() {
    let mut harness = setup_view_harness(section("a"), None).await;
    harness.rebuild();

    harness.navigate(NavAction::Prev);
    assert!(harness.render().contains("1 of 2"), "prev left the first section");

    harness.navigate(NavAction::Next);
    let html = harness.render();
    assert!(html.contains("2 of 2"), "missing second section in {html}");
    assert!(html.contains("Complete Course"));

    // b1 is still open, so the last section holds
    harness.navigate(NavAction::Next);
    assert!(harness.render().contains("2 of 2"));

    harness.navigate(NavAction::Prev);
    assert!(harness.render().contains("1 of 2"));

    harness.navigate(NavAction::Back);
    assert!(harness.render().contains("Start Workshop"));

    harness.navigate(NavAction::Select(SectionId::new("ghost")));
    assert!(harness.render().contains("Section Not Found"));
}

#[tokio::test(flavor = "current_thread")]
async fn next_after_finishing_last_section_shows_completion() {
    let mut harness = setup_view_harness(section("b"), None).await;
    harness.rebuild();

    harness.toggle("b1").await;
    assert!(harness.render().contains("1 of 1 steps completed"));

    harness.navigate(NavAction::Next);
    let html = harness.render();
    assert!(html.contains("Congratulations!"), "missing completion in {html}");
    assert!(html.contains("1 / 2"));

    harness.navigate(NavAction::Back);
    assert!(harness.render().contains("Start Workshop"));
}
