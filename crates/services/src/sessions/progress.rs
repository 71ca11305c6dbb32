use prep_core::model::{CallState, Step, WizardVariant};

/// Aggregated view of wizard progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardProgress {
    pub current: Step,
    pub total: u8,
    pub locked: bool,
    pub title: &'static str,
}

impl WizardProgress {
    #[must_use]
    pub fn new(variant: WizardVariant, current: Step, call: CallState) -> Self {
        Self {
            current,
            total: variant.max_step().value(),
            locked: call.is_active(),
            title: variant.step_title(current),
        }
    }

    /// Whether `step` is already behind the current pointer.
    #[must_use]
    pub fn is_done(&self, step: Step) -> bool {
        step < self.current
    }
}
