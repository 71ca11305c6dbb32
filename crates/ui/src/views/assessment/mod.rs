mod components;
mod wizard;

use dioxus::prelude::*;
use prep_core::model::WizardVariant;

use wizard::WizardPage;

#[cfg(test)]
pub(crate) use wizard::WizardTestHandles;

#[component]
pub fn LanguageAssessmentView() -> Element {
    rsx! {
        WizardPage { variant: WizardVariant::Language }
    }
}

#[component]
pub fn PersonalityAssessmentView() -> Element {
    rsx! {
        WizardPage { variant: WizardVariant::Personality }
    }
}
