use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::model::WizardVariant;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let fixtures = ctx.fixtures();
    let languages = fixtures.languages().len();
    let frameworks = fixtures.frameworks().len();

    rsx! {
        div { class: "page dashboard",
            h2 { "Dashboard" }
            div { class: "card-grid",
                AssessmentCard {
                    variant: WizardVariant::Language,
                    detail: format!("{languages} languages with native interviewers"),
                    to: Route::LanguageAssessment {},
                }
                AssessmentCard {
                    variant: WizardVariant::Personality,
                    detail: format!("{frameworks} frameworks to choose from"),
                    to: Route::PersonalityAssessment {},
                }
            }
        }
    }
}

#[component]
fn AssessmentCard(variant: WizardVariant, detail: String, to: Route) -> Element {
    let steps = variant.max_step().value();

    rsx! {
        div { class: "card",
            h3 { "{variant.label()}" }
            p { "{detail}" }
            p { class: "muted", "{steps} steps" }
            Link { class: "btn btn-primary", to, "Start" }
        }
    }
}
