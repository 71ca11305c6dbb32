use prep_core::model::{CallState, Step, WizardVariant};
use tracing::{debug, warn};

/// What the interview step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewPanel {
    /// Call not started yet: tips and a start button.
    Ready,
    /// Call running: timer and end button.
    Live,
    /// Call over.
    Finished,
}

/// Current step pointer of a guided wizard.
///
/// Navigation is locked while a call is active; the only way out of a live
/// call is ending it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    variant: WizardVariant,
    current: Step,
}

impl StepController {
    #[must_use]
    pub fn new(variant: WizardVariant) -> Self {
        Self {
            variant,
            current: Step::FIRST,
        }
    }

    #[must_use]
    pub fn current(&self) -> Step {
        self.current
    }

    #[must_use]
    pub fn max(&self) -> Step {
        self.variant.max_step()
    }

    #[must_use]
    pub fn is_locked(call: CallState) -> bool {
        call.is_active()
    }

    /// Move to `requested`, clamped to the wizard's bounds.
    ///
    /// Returns whether the step changed. A no-op while `call` is active.
    pub fn go_to(&mut self, requested: u8, call: CallState) -> bool {
        if Self::is_locked(call) {
            warn!(requested, "step navigation ignored during active call");
            return false;
        }
        let target = Step::clamped(requested, self.max());
        self.set(target)
    }

    pub fn next(&mut self, call: CallState) -> bool {
        if Self::is_locked(call) {
            return false;
        }
        let target = self.current.next_within(self.max());
        self.set(target)
    }

    pub fn previous(&mut self, call: CallState) -> bool {
        if Self::is_locked(call) {
            return false;
        }
        let target = self.current.previous_within(self.max());
        self.set(target)
    }

    #[must_use]
    pub fn can_go_next(&self, call: CallState) -> bool {
        !Self::is_locked(call) && self.current < self.max()
    }

    #[must_use]
    pub fn can_go_previous(&self, call: CallState) -> bool {
        !Self::is_locked(call) && self.current > Step::FIRST
    }

    /// Jump to the report step once a call has ended. Bypasses the lock.
    pub(crate) fn advance_to_report(&mut self) {
        if let Some(report) = self.variant.report_step() {
            self.set(report);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.current = Step::FIRST;
    }

    #[must_use]
    pub fn interview_panel(&self, call: CallState) -> Option<InterviewPanel> {
        if self.current != self.variant.interview_step() {
            return None;
        }
        Some(match call {
            CallState::Idle => InterviewPanel::Ready,
            CallState::Active => InterviewPanel::Live,
            CallState::Ended => InterviewPanel::Finished,
        })
    }

    fn set(&mut self, target: Step) -> bool {
        if target == self.current {
            return false;
        }
        debug!(from = %self.current, to = %target, "step changed");
        self.current = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_step() {
        let steps = StepController::new(WizardVariant::Language);
        assert_eq!(steps.current(), Step::FIRST);
    }

    #[test]
    fn go_to_clamps() {
        let mut steps = StepController::new(WizardVariant::Language);
        assert!(steps.go_to(42, CallState::Idle));
        assert_eq!(steps.current().value(), 5);
        assert!(steps.go_to(0, CallState::Idle));
        assert_eq!(steps.current().value(), 1);
    }

    #[test]
    fn active_call_locks_every_navigation() {
        let mut steps = StepController::new(WizardVariant::Language);
        steps.go_to(4, CallState::Idle);
        for requested in 0..=10 {
            assert!(!steps.go_to(requested, CallState::Active));
            assert_eq!(steps.current().value(), 4);
        }
        assert!(!steps.next(CallState::Active));
        assert!(!steps.previous(CallState::Active));
        assert!(!steps.can_go_next(CallState::Active));
        assert_eq!(steps.current().value(), 4);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut steps = StepController::new(WizardVariant::Personality);
        assert!(!steps.previous(CallState::Idle));
        steps.go_to(4, CallState::Idle);
        assert!(!steps.next(CallState::Idle));
        assert!(!steps.can_go_next(CallState::Idle));
        assert!(steps.can_go_previous(CallState::Idle));
    }

    #[test]
    fn interview_panel_follows_call_state() {
        let mut steps = StepController::new(WizardVariant::Language);
        assert_eq!(steps.interview_panel(CallState::Idle), None);
        steps.go_to(4, CallState::Idle);
        assert_eq!(
            steps.interview_panel(CallState::Idle),
            Some(InterviewPanel::Ready)
        );
        assert_eq!(
            steps.interview_panel(CallState::Active),
            Some(InterviewPanel::Live)
        );
    }
}
