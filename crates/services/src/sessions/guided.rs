use std::sync::Arc;

use fixtures::FixtureSet;
use prep_core::format::format_elapsed_time;
use prep_core::model::{CallState, ReportTab, Step, WizardVariant};
use tracing::info;

use super::call::{CallSimulator, TimerEvent, TimerEvents, TimerOutcome, timer_channel};
use super::progress::WizardProgress;
use super::report::ReportPresenter;
use super::selection::{Selection, SelectionState};
use super::steps::{InterviewPanel, StepController};
use crate::error::{SelectionError, SessionError};
use crate::settings::SessionSettings;

/// One guided assessment, from the first step to the report.
///
/// Owned by the page that shows it. Every change goes through a named
/// method; timer events arrive through the `TimerEvents` handed out by
/// [`GuidedSession::new`] and must be fed back via
/// [`GuidedSession::handle_timer_event`]. Dropping the session releases
/// its timers.
#[derive(Debug)]
pub struct GuidedSession {
    variant: WizardVariant,
    fixtures: Arc<FixtureSet>,
    steps: StepController,
    call: CallSimulator,
    selection: SelectionState,
    report: ReportPresenter,
}

impl GuidedSession {
    /// # Errors
    ///
    /// Returns `SessionError::MissingReport` if the fixtures carry no report
    /// for `variant`.
    pub fn new(
        variant: WizardVariant,
        fixtures: Arc<FixtureSet>,
        settings: SessionSettings,
    ) -> Result<(Self, TimerEvents), SessionError> {
        let report = fixtures
            .report_for(variant)
            .cloned()
            .ok_or(SessionError::MissingReport(variant))?;
        let (tx, events) = timer_channel();
        let session = Self {
            variant,
            steps: StepController::new(variant),
            call: CallSimulator::new(settings, tx),
            selection: SelectionState::new(variant, Arc::clone(&fixtures)),
            fixtures,
            report: ReportPresenter::new(variant, report),
        };
        info!(?variant, "guided session created");
        Ok((session, events))
    }

    #[must_use]
    pub fn variant(&self) -> WizardVariant {
        self.variant
    }

    // ── steps ──────────────────────────────────────────────────────────────

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.steps.current()
    }

    #[must_use]
    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    #[must_use]
    pub fn is_navigation_locked(&self) -> bool {
        StepController::is_locked(self.call.state())
    }

    pub fn go_to_step(&mut self, step: u8) -> bool {
        self.steps.go_to(step, self.call.state())
    }

    pub fn next(&mut self) -> bool {
        self.steps.next(self.call.state())
    }

    pub fn previous(&mut self) -> bool {
        self.steps.previous(self.call.state())
    }

    #[must_use]
    pub fn interview_panel(&self) -> Option<InterviewPanel> {
        self.steps.interview_panel(self.call.state())
    }

    // ── call ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn call_state(&self) -> CallState {
        self.call.state()
    }

    #[must_use]
    pub fn call(&self) -> &CallSimulator {
        &self.call
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.call.elapsed_secs()
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_elapsed_time(self.call.elapsed_secs())
    }

    /// Start the simulated call. No-op unless idle.
    pub fn start_call(&mut self) -> bool {
        self.call.start()
    }

    /// End the call, move to the report step and reveal the report. No-op
    /// unless active.
    pub fn end_call(&mut self) -> bool {
        if !self.call.stop() {
            return false;
        }
        self.finish();
        true
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) -> TimerOutcome {
        let outcome = self.call.handle_timer_event(event);
        if outcome == TimerOutcome::Stopped {
            self.finish();
        }
        outcome
    }

    /// Release timers ahead of the view going away. The session stays
    /// readable but a live call will no longer tick.
    pub fn teardown(&mut self) {
        self.call.release_timers();
    }

    /// Throw the current run away and start over at step one with default
    /// selections.
    pub fn reset(&mut self) {
        self.call.reset();
        self.steps.reset();
        self.report.hide();
        self.selection = SelectionState::new(self.variant, Arc::clone(&self.fixtures));
        info!(variant = ?self.variant, "guided session reset");
    }

    fn finish(&mut self) {
        self.steps.advance_to_report();
        self.report.reveal();
    }

    // ── selections ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// # Errors
    ///
    /// See [`SelectionState::select`].
    pub fn select(&mut self, selection: Selection) -> Result<(), SelectionError> {
        self.selection.select(selection)
    }

    // ── report ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn report(&self) -> &ReportPresenter {
        &self.report
    }

    #[must_use]
    pub fn is_report_visible(&self) -> bool {
        self.report.is_visible()
    }

    pub fn select_tab(&mut self, tab: ReportTab) -> bool {
        self.report.select_tab(tab)
    }

    #[must_use]
    pub fn progress(&self) -> WizardProgress {
        WizardProgress::new(self.variant, self.steps.current(), self.call.state())
    }
}
