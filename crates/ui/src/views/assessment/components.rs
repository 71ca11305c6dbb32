use dioxus::prelude::*;
use services::InterviewPanel;

use crate::vm::{
    ChoiceSectionVm, InterviewVm, ReportBodyVm, ReportVm, StepItemVm, StepStatus, WizardIntent,
};

#[component]
pub(super) fn StepIndicator(
    steps: Vec<StepItemVm>,
    locked: bool,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    rsx! {
        ol { class: "steps",
            for step in steps {
                li {
                    key: "{step.number}",
                    class: match step.status {
                        StepStatus::Done => "step step--done",
                        StepStatus::Current => "step step--current",
                        StepStatus::Upcoming => "step step--upcoming",
                    },
                    button {
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| on_intent.call(WizardIntent::GoTo(step.number)),
                        span { class: "step-number", "{step.number}" }
                        span { class: "step-title", "{step.title}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn ChoiceSection(
    section: ChoiceSectionVm,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    rsx! {
        section { class: "choices",
            h3 { "{section.heading}" }
            if section.choices.is_empty() {
                p { class: "muted", "{section.empty_label}" }
            } else {
                div { class: "choice-grid",
                    for choice in section.choices {
                        button {
                            key: "{choice.key}",
                            r#type: "button",
                            class: if choice.selected {
                                "choice choice--selected"
                            } else {
                                "choice"
                            },
                            "aria-pressed": "{choice.selected}",
                            onclick: move |_| on_intent.call(choice.intent),
                            if let Some(icon) = choice.icon {
                                span { class: "choice-icon", "{icon}" }
                            }
                            span { class: "choice-title", "{choice.title}" }
                            if !choice.detail.is_empty() {
                                span { class: "choice-detail", "{choice.detail}" }
                            }
                            if let Some(badge) = choice.badge {
                                span { class: "badge {badge.class}", "{badge.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn InterviewCard(
    interview: InterviewVm,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    rsx! {
        section { class: "interview",
            dl { class: "interview-meta",
                dt { "Interviewer" }
                dd { "{interview.interviewer}" }
                dt { "Slot" }
                dd { "{interview.slot}" }
                dt { "Call" }
                dd { "{interview.medium}" }
            }
            match interview.panel {
                InterviewPanel::Ready => rsx! {
                    if let Some(secs) = interview.auto_end_secs {
                        p { class: "muted", "The call ends by itself after {secs} seconds." }
                    }
                    ul { class: "tips",
                        for tip in interview.tips {
                            li {
                                strong { "{tip.title}" }
                                " {tip.body}"
                            }
                        }
                    }
                    button {
                        id: "call-start",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(WizardIntent::StartCall),
                        "Start call"
                    }
                },
                InterviewPanel::Live => rsx! {
                    p { class: "call-live", "Call in progress" }
                    p { id: "call-timer", class: "call-timer", "{interview.elapsed}" }
                    button {
                        id: "call-end",
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_intent.call(WizardIntent::EndCall),
                        "End call"
                    }
                },
                InterviewPanel::Finished => rsx! {
                    p { class: "muted", "Call finished after {interview.elapsed}." }
                },
            }
        }
    }
}

#[component]
pub(super) fn ReportPanel(report: ReportVm, on_intent: EventHandler<WizardIntent>) -> Element {
    rsx! {
        section { class: "report",
            h3 { "{report.title}" }
            nav { class: "tabs",
                for tab in report.tabs {
                    button {
                        key: "{tab.tab}",
                        r#type: "button",
                        class: if tab.active { "tab tab--active" } else { "tab" },
                        onclick: move |_| on_intent.call(WizardIntent::SelectTab(tab.tab)),
                        "{tab.label}"
                    }
                }
            }
            match report.body {
                ReportBodyVm::Overview { summary, overall_score, tone } => rsx! {
                    div { class: "overview",
                        span { class: "score {tone}", "{overall_score}" }
                        p { "{summary}" }
                    }
                },
                ReportBodyVm::Scores(scores) => rsx! {
                    ul { class: "scores",
                        for item in scores {
                            li { key: "{item.name}",
                                span { class: "score-name", "{item.name}" }
                                span { class: "score {item.tone}", "{item.score}" }
                                p { class: "muted", "{item.description}" }
                            }
                        }
                    }
                },
                ReportBodyVm::Bullets(lines) => rsx! {
                    ul {
                        for line in lines {
                            li { "{line}" }
                        }
                    }
                },
                ReportBodyVm::Plan(items) => rsx! {
                    div { class: "plan",
                        for (area, actions) in items {
                            h4 { "{area}" }
                            ul {
                                for action in actions {
                                    li { "{action}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub(super) fn WizardNav(
    can_previous: bool,
    can_next: bool,
    locked: bool,
    finished: bool,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    rsx! {
        footer { class: "wizard-nav",
            button {
                id: "wizard-previous",
                class: "btn",
                r#type: "button",
                disabled: !can_previous,
                onclick: move |_| on_intent.call(WizardIntent::Previous),
                "Back"
            }
            if locked {
                span { class: "muted", "Navigation is paused during the call." }
            }
            if finished {
                button {
                    id: "wizard-restart",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(WizardIntent::Restart),
                    "Start over"
                }
            }
            button {
                id: "wizard-next",
                class: "btn btn-primary",
                r#type: "button",
                disabled: !can_next,
                onclick: move |_| on_intent.call(WizardIntent::Next),
                "Next"
            }
        }
    }
}
