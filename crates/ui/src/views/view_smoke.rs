use std::time::Duration;

use prep_core::model::{LanguageId, ReportTab};
use services::Selection;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_auto_end};
use crate::vm::{StepStatus, WizardIntent};

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_links_both_assessments() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Language assessment"), "missing language card in {html}");
    assert!(html.contains("Personality assessment"), "missing personality card in {html}");
    assert!(html.contains("4 languages"), "missing language count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing heading in {html}");
    assert!(html.contains("login-email"), "missing email field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn language_view_smoke_starts_on_first_step() {
    let mut harness = setup_view_harness(ViewKind::LanguageAssessment);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("English"), "missing default language in {html}");
    assert!(html.contains("Target level"), "missing level picker in {html}");
    assert!(html.contains("choice--selected"), "missing selected choice in {html}");

    let snapshot = harness.snapshot();
    assert!(!snapshot.can_previous);
    assert!(snapshot.can_next);
}

#[tokio::test(flavor = "current_thread")]
async fn language_view_smoke_filters_interviewers_by_language() {
    let mut harness = setup_view_harness(ViewKind::LanguageAssessment);
    harness.rebuild();
    harness.dispatch(WizardIntent::Select(Selection::Language(LanguageId::new(2))));
    harness.dispatch(WizardIntent::GoTo(3));

    let html = harness.render();
    assert!(html.contains("María García"), "missing Spanish interviewer in {html}");
    assert!(!html.contains("Sarah Mitchell"), "English interviewer leaked into {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn language_view_smoke_runs_a_call_to_the_report() {
    let mut harness = setup_view_harness(ViewKind::LanguageAssessment);
    harness.rebuild();
    harness.dispatch(WizardIntent::GoTo(4));
    harness.dispatch(WizardIntent::StartCall);

    let html = harness.render();
    assert!(html.contains("Call in progress"), "missing live panel in {html}");
    assert!(harness.snapshot().locked);

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("0:03"), "timer did not advance in {html}");

    harness.dispatch(WizardIntent::GoTo(1));
    assert_eq!(harness.snapshot().steps[3].status, StepStatus::Current);
    assert!(harness.snapshot().locked);

    harness.dispatch(WizardIntent::EndCall);
    let html = harness.render();
    assert!(html.contains("English speaking assessment"), "missing report in {html}");
    assert!(html.contains("Skills"), "missing breakdown tab in {html}");

    let snapshot = harness.snapshot();
    assert!(!snapshot.locked);
    assert_eq!(snapshot.steps.last().map(|s| s.number), Some(5));
    assert!(snapshot.report.is_some());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn personality_view_smoke_ends_call_by_itself() {
    let mut harness = setup_view_harness_with_auto_end(
        ViewKind::PersonalityAssessment,
        Some(Duration::from_secs(2)),
    );
    harness.rebuild();
    harness.dispatch(WizardIntent::GoTo(4));
    harness.dispatch(WizardIntent::StartCall);

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Big Five personality profile"), "missing report in {html}");

    harness.dispatch(WizardIntent::SelectTab(ReportTab::Relationships));
    let html = harness.render();
    assert!(html.contains("Builds trust through reliability"), "missing tab body in {html}");
    assert_eq!(
        harness.snapshot().interview.map(|i| i.panel),
        None,
        "interview panel should give way to the report"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn leaving_the_assessment_view_stops_call_timers() {
    let metrics = tokio::runtime::Handle::current().metrics();
    let mut harness = setup_view_harness(ViewKind::PersonalityAssessment);
    harness.rebuild();
    harness.dispatch(WizardIntent::GoTo(4));
    harness.dispatch(WizardIntent::StartCall);
    assert!(harness.snapshot().locked);
    // Tick timer plus the auto-end timer.
    assert_eq!(metrics.num_alive_tasks(), 2);

    drop(harness);
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(metrics.num_alive_tasks(), 0);
}
