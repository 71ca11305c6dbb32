use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── VARIANT ───────────────────────────────────────────────────────────────────
//

/// Which guided assessment a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardVariant {
    /// Language, skill focus, schedule, interview, report.
    Language,
    /// Framework, assessment type, interviewer, schedule (the call runs on the last step).
    Personality,
}

impl WizardVariant {
    #[must_use]
    pub const fn max_step(self) -> Step {
        match self {
            Self::Language => Step(5),
            Self::Personality => Step(4),
        }
    }

    /// The step on which the interview call is started.
    #[must_use]
    pub const fn interview_step(self) -> Step {
        Step(4)
    }

    /// The step the session jumps to once the call ends, if the variant has one.
    #[must_use]
    pub const fn report_step(self) -> Option<Step> {
        match self {
            Self::Language => Some(Step(5)),
            Self::Personality => None,
        }
    }

    #[must_use]
    pub fn step_title(self, step: Step) -> &'static str {
        match (self, step.value()) {
            (Self::Language, 1) => "Choose a language",
            (Self::Language, 2) => "Pick a skill focus",
            (Self::Language, 3) => "Schedule",
            (Self::Language, 4) => "Interview",
            (Self::Language, _) => "Report",
            (Self::Personality, 1) => "Choose a framework",
            (Self::Personality, 2) => "Assessment type",
            (Self::Personality, 3) => "Interviewer",
            (Self::Personality, _) => "Schedule",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Language => "Language assessment",
            Self::Personality => "Personality assessment",
        }
    }

    /// Every step of the variant in order.
    pub fn steps(self) -> impl Iterator<Item = Step> {
        (1..=self.max_step().value()).map(Step)
    }
}

//
// ─── STEP ──────────────────────────────────────────────────────────────────────
//

/// One-based position in a guided wizard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);

    /// Clamp an arbitrary requested step into `[1, max]`.
    #[must_use]
    pub fn clamped(requested: u8, max: Step) -> Self {
        Self(requested.clamp(1, max.0.max(1)))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn next_within(self, max: Step) -> Self {
        Self::clamped(self.0.saturating_add(1), max)
    }

    #[must_use]
    pub fn previous_within(self, max: Step) -> Self {
        Self::clamped(self.0.saturating_sub(1), max)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({})", self.0)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_stays_in_bounds() {
        let max = WizardVariant::Language.max_step();
        assert_eq!(Step::clamped(0, max).value(), 1);
        assert_eq!(Step::clamped(3, max).value(), 3);
        assert_eq!(Step::clamped(9, max).value(), 5);
    }

    #[test]
    fn next_and_previous_saturate_at_bounds() {
        let max = WizardVariant::Personality.max_step();
        assert_eq!(Step::FIRST.previous_within(max), Step::FIRST);
        assert_eq!(max.next_within(max), max);
        assert_eq!(Step::FIRST.next_within(max).value(), 2);
    }

    #[test]
    fn personality_reports_on_interview_step() {
        let variant = WizardVariant::Personality;
        assert_eq!(variant.report_step(), None);
        assert_eq!(variant.interview_step(), variant.max_step());
        assert_eq!(variant.steps().count(), 4);
        assert_eq!(WizardVariant::Language.report_step(), Some(Step(5)));
    }
}
