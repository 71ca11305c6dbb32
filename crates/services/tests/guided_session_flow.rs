use std::sync::Arc;
use std::time::Duration;

use fixtures::{EmbeddedFixtures, FixtureSource};
use prep_core::model::{CallState, ReportSection, ReportTab, WizardVariant};
use services::{GuidedSession, InterviewPanel, SessionSettings, TimerEvents, TimerOutcome};

fn session(variant: WizardVariant) -> (GuidedSession, TimerEvents) {
    let fixtures = Arc::new(EmbeddedFixtures.load().unwrap());
    GuidedSession::new(variant, fixtures, SessionSettings::for_variant(variant)).unwrap()
}

fn pump(session: &mut GuidedSession, events: &mut TimerEvents) -> Vec<TimerOutcome> {
    let mut outcomes = Vec::new();
    while let Some(event) = events.try_recv() {
        outcomes.push(session.handle_timer_event(event));
    }
    outcomes
}

#[tokio::test(start_paused = true)]
async fn language_session_end_to_end() {
    let (mut session, mut events) = session(WizardVariant::Language);
    assert_eq!(session.current_step().value(), 1);

    for _ in 0..3 {
        assert!(session.next());
    }
    assert_eq!(session.current_step().value(), 4);
    assert_eq!(session.interview_panel(), Some(InterviewPanel::Ready));

    assert!(session.start_call());
    assert_eq!(session.interview_panel(), Some(InterviewPanel::Live));
    assert!(session.is_navigation_locked());

    tokio::time::sleep(Duration::from_millis(65_500)).await;
    pump(&mut session, &mut events);
    assert_eq!(session.elapsed_label(), "1:05");

    assert!(session.end_call());
    assert_eq!(session.call_state(), CallState::Ended);
    assert_eq!(session.current_step().value(), 5);
    assert!(session.is_report_visible());
    assert!(!session.call().has_live_timers());
}

#[tokio::test(start_paused = true)]
async fn navigation_is_frozen_during_call() {
    let (mut session, mut events) = session(WizardVariant::Language);
    session.go_to_step(4);
    session.start_call();

    for requested in [0, 1, 2, 3, 5, 200] {
        assert!(!session.go_to_step(requested));
        assert_eq!(session.current_step().value(), 4);
    }
    assert!(!session.previous());
    assert!(!session.next());

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    pump(&mut session, &mut events);
    assert_eq!(session.current_step().value(), 4);
    assert_eq!(session.elapsed_secs(), 1);
}

#[tokio::test(start_paused = true)]
async fn no_ticks_after_end_call() {
    let (mut session, mut events) = session(WizardVariant::Language);
    session.go_to_step(4);
    session.start_call();
    session.end_call();

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(pump(&mut session, &mut events).is_empty());
    assert_eq!(session.elapsed_secs(), 0);
}

#[tokio::test(start_paused = true)]
async fn personality_call_ends_by_itself() {
    let (mut session, mut events) = session(WizardVariant::Personality);
    session.go_to_step(4);
    session.start_call();

    tokio::time::sleep(Duration::from_millis(10_500)).await;
    let outcomes = pump(&mut session, &mut events);

    assert!(outcomes.contains(&TimerOutcome::Stopped));
    assert_eq!(session.call_state(), CallState::Ended);
    assert_eq!(session.current_step().value(), 4);
    assert!(session.is_report_visible());
    assert!(session.select_tab(ReportTab::Relationships));
    assert!(matches!(
        session.report().current_section(),
        Some(ReportSection::Relationships(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn auto_end_delay_is_configurable() {
    let fixtures = Arc::new(EmbeddedFixtures.load().unwrap());
    let settings = SessionSettings::for_variant(WizardVariant::Personality)
        .with_auto_end_after(Some(Duration::from_secs(3)))
        .unwrap();
    let (mut session, mut events) =
        GuidedSession::new(WizardVariant::Personality, fixtures, settings).unwrap();
    session.go_to_step(4);
    session.start_call();

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    pump(&mut session, &mut events);
    assert_eq!(session.call_state(), CallState::Ended);
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_ticking() {
    let (mut session, mut events) = session(WizardVariant::Language);
    session.go_to_step(4);
    session.start_call();
    session.teardown();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(pump(&mut session, &mut events).is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_closes_the_timer_channel() {
    let (mut session, mut events) = session(WizardVariant::Language);
    session.go_to_step(4);
    session.start_call();
    drop(session);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(events.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn reset_returns_to_a_fresh_idle_session() {
    let (mut session, mut events) = session(WizardVariant::Language);
    session.go_to_step(4);
    session.start_call();
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    pump(&mut session, &mut events);
    session.end_call();

    session.reset();
    assert_eq!(session.call_state(), CallState::Idle);
    assert_eq!(session.current_step().value(), 1);
    assert!(!session.is_report_visible());
    assert_eq!(session.elapsed_label(), "0:00");

    session.go_to_step(4);
    assert!(session.start_call());
}

#[tokio::test(start_paused = true)]
async fn ending_a_personality_call_cancels_auto_end() {
    let (mut session, mut events) = session(WizardVariant::Personality);
    session.go_to_step(4);
    session.start_call();
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    pump(&mut session, &mut events);
    assert!(session.end_call());

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(events.try_recv(), None);
    assert_eq!(session.call_state(), CallState::Ended);
    assert_eq!(session.elapsed_label(), "0:02");
}

#[test]
fn start_call_outside_a_runtime_keeps_navigation_open() {
    let (mut session, _events) = session(WizardVariant::Language);
    session.go_to_step(4);

    assert!(!session.start_call());
    assert_eq!(session.call_state(), CallState::Idle);
    assert!(!session.is_navigation_locked());
    assert!(!session.call().has_live_timers());
    assert!(session.previous());
}
