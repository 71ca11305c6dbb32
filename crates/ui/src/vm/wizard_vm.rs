use std::sync::Arc;

use fixtures::FixtureSet;
use prep_core::format::{difficulty_color, level_color};
use prep_core::icon::IconKind;
use prep_core::model::{CallMedium, CallState, CefrLevel, ReportTab, Step, WizardVariant};
use services::{
    GuidedSession, InterviewPanel, Selection, SessionError, SessionSettings, TimerEvent,
    TimerEvents, TimerOutcome,
};

use super::report_vm::{ReportVm, map_report};
use super::time_fmt::{format_minutes, format_rating};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardIntent {
    Next,
    Previous,
    GoTo(u8),
    StartCall,
    EndCall,
    Select(Selection),
    SelectTab(ReportTab),
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepItemVm {
    pub number: u8,
    pub title: &'static str,
    pub status: StepStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub label: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub key: String,
    pub title: String,
    pub detail: String,
    pub icon: Option<&'static str>,
    pub badge: Option<BadgeVm>,
    pub selected: bool,
    pub intent: WizardIntent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceSectionVm {
    pub heading: &'static str,
    pub empty_label: &'static str,
    pub choices: Vec<ChoiceVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipVm {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewVm {
    pub panel: InterviewPanel,
    pub elapsed: String,
    pub interviewer: String,
    pub slot: String,
    pub medium: &'static str,
    pub auto_end_secs: Option<u64>,
    pub tips: Vec<TipVm>,
}

/// Everything one render of a wizard page needs, detached from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardSnapshot {
    pub variant: WizardVariant,
    pub title: &'static str,
    pub step_title: &'static str,
    pub steps: Vec<StepItemVm>,
    pub locked: bool,
    pub can_next: bool,
    pub can_previous: bool,
    pub sections: Vec<ChoiceSectionVm>,
    pub interview: Option<InterviewVm>,
    pub report: Option<ReportVm>,
    pub report_pending: bool,
}

/// Page-level wrapper around a `GuidedSession`.
pub struct WizardVm {
    session: GuidedSession,
}

impl WizardVm {
    /// # Errors
    ///
    /// Propagates `SessionError` from session construction.
    pub fn start(
        variant: WizardVariant,
        fixtures: Arc<FixtureSet>,
        settings: SessionSettings,
    ) -> Result<(Self, TimerEvents), SessionError> {
        let (session, events) = GuidedSession::new(variant, fixtures, settings)?;
        Ok((Self { session }, events))
    }

    #[must_use]
    pub fn session(&self) -> &GuidedSession {
        &self.session
    }

    /// Apply a user intent. Returns whether anything changed.
    pub fn apply(&mut self, intent: WizardIntent) -> bool {
        match intent {
            WizardIntent::Next => self.session.next(),
            WizardIntent::Previous => self.session.previous(),
            WizardIntent::GoTo(step) => self.session.go_to_step(step),
            WizardIntent::StartCall => self.session.start_call(),
            WizardIntent::EndCall => self.session.end_call(),
            WizardIntent::Select(selection) => match self.session.select(selection) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(%err, "selection rejected");
                    false
                }
            },
            WizardIntent::SelectTab(tab) => self.session.select_tab(tab),
            WizardIntent::Restart => {
                self.session.reset();
                true
            }
        }
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) -> TimerOutcome {
        self.session.handle_timer_event(event)
    }

    /// Stop any live timers before the page goes away.
    pub fn teardown(&mut self) {
        self.session.teardown();
    }

    #[must_use]
    pub fn snapshot(&self) -> WizardSnapshot {
        let session = &self.session;
        let variant = session.variant();
        let progress = session.progress();
        let call = session.call_state();

        let steps = variant
            .steps()
            .map(|step| StepItemVm {
                number: step.value(),
                title: variant.step_title(step),
                status: if step == progress.current {
                    StepStatus::Current
                } else if progress.is_done(step) {
                    StepStatus::Done
                } else {
                    StepStatus::Upcoming
                },
            })
            .collect();

        let on_report_step = match variant.report_step() {
            Some(report_step) => progress.current == report_step,
            None => progress.current == variant.interview_step() && call == CallState::Ended,
        };
        let report = on_report_step
            .then(|| map_report(session.report()))
            .flatten();

        WizardSnapshot {
            variant,
            title: variant.label(),
            step_title: progress.title,
            steps,
            locked: progress.locked,
            can_next: session.steps().can_go_next(call),
            can_previous: session.steps().can_go_previous(call),
            sections: self.sections(progress.current, call),
            interview: if report.is_some() { None } else { self.interview() },
            report_pending: on_report_step && report.is_none(),
            report,
        }
    }

    fn sections(&self, step: Step, call: CallState) -> Vec<ChoiceSectionVm> {
        match (self.session.variant(), step.value()) {
            (WizardVariant::Language, 1) => vec![self.language_choices(), self.level_choices()],
            (WizardVariant::Language, 2) => vec![self.focus_choices()],
            (WizardVariant::Language, 3) => vec![
                self.interviewer_choices(),
                self.slot_choices(),
                self.medium_choices(),
            ],
            (WizardVariant::Personality, 1) => vec![self.framework_choices()],
            (WizardVariant::Personality, 2) => vec![self.assessment_choices()],
            (WizardVariant::Personality, 3) => vec![self.interviewer_choices()],
            (WizardVariant::Personality, 4) if call == CallState::Idle => {
                vec![self.slot_choices(), self.medium_choices()]
            }
            _ => Vec::new(),
        }
    }

    fn language_choices(&self) -> ChoiceSectionVm {
        let selection = self.session.selection();
        let current = selection.language().id;
        let choices = selection
            .fixtures()
            .languages()
            .iter()
            .map(|language| ChoiceVm {
                key: format!("language-{}", language.id),
                title: language.name.clone(),
                detail: language.native_name.clone(),
                icon: None,
                badge: Some(BadgeVm {
                    label: language.flag.clone(),
                    class: "badge-flag",
                }),
                selected: language.id == current,
                intent: WizardIntent::Select(Selection::Language(language.id)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Language",
            empty_label: "No languages available.",
            choices,
        }
    }

    fn level_choices(&self) -> ChoiceSectionVm {
        let current = self.session.selection().level();
        let choices = CefrLevel::ALL
            .into_iter()
            .map(|level| ChoiceVm {
                key: format!("level-{level}"),
                title: level.as_str().to_string(),
                detail: String::new(),
                icon: None,
                badge: Some(BadgeVm {
                    label: level.as_str().to_string(),
                    class: level_color(level).class(),
                }),
                selected: level == current,
                intent: WizardIntent::Select(Selection::Level(level)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Target level",
            empty_label: "",
            choices,
        }
    }

    fn focus_choices(&self) -> ChoiceSectionVm {
        let selection = self.session.selection();
        let current = selection.focus_area().id;
        let choices = selection
            .fixtures()
            .focus_areas()
            .iter()
            .map(|area| ChoiceVm {
                key: format!("focus-{}", area.id),
                title: area.name.clone(),
                detail: area.description.clone(),
                icon: None,
                badge: Some(BadgeVm {
                    label: area.difficulty.clone(),
                    class: difficulty_color(&area.difficulty).class(),
                }),
                selected: area.id == current,
                intent: WizardIntent::Select(Selection::FocusArea(area.id)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Skill focus",
            empty_label: "No focus areas available.",
            choices,
        }
    }

    fn interviewer_choices(&self) -> ChoiceSectionVm {
        let selection = self.session.selection();
        let current = selection.interviewer().map(|i| i.id);
        let choices = selection
            .available_interviewers()
            .into_iter()
            .map(|interviewer| ChoiceVm {
                key: format!("interviewer-{}", interviewer.id),
                title: interviewer.name.clone(),
                detail: interviewer.specialty.clone(),
                icon: None,
                badge: Some(BadgeVm {
                    label: format_rating(interviewer.rating),
                    class: "badge-rating",
                }),
                selected: Some(interviewer.id) == current,
                intent: WizardIntent::Select(Selection::Interviewer(interviewer.id)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Interviewer",
            empty_label: "No interviewers speak this language yet.",
            choices,
        }
    }

    fn slot_choices(&self) -> ChoiceSectionVm {
        let selection = self.session.selection();
        let current = selection.slot().map(|s| s.id);
        let choices = selection
            .available_slots()
            .into_iter()
            .map(|slot| ChoiceVm {
                key: format!("slot-{}", slot.id),
                title: slot.label(),
                detail: slot.language.clone(),
                icon: None,
                badge: None,
                selected: Some(slot.id) == current,
                intent: WizardIntent::Select(Selection::Slot(slot.id)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Time slot",
            empty_label: "No open slots for this language.",
            choices,
        }
    }

    fn medium_choices(&self) -> ChoiceSectionVm {
        let current = self.session.selection().medium();
        let choices = [CallMedium::Web, CallMedium::Phone]
            .into_iter()
            .map(|medium| ChoiceVm {
                key: format!("medium-{}", medium.label()),
                title: medium.label().to_string(),
                detail: String::new(),
                icon: None,
                badge: None,
                selected: medium == current,
                intent: WizardIntent::Select(Selection::Medium(medium)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Call type",
            empty_label: "",
            choices,
        }
    }

    fn framework_choices(&self) -> ChoiceSectionVm {
        let selection = self.session.selection();
        let current = selection.framework().map(|f| f.id);
        let choices = selection
            .fixtures()
            .frameworks()
            .iter()
            .map(|framework| ChoiceVm {
                key: format!("framework-{}", framework.id),
                title: framework.name.clone(),
                detail: framework.description.clone(),
                icon: Some(IconKind::from_key(&framework.icon).glyph()),
                badge: (!framework.traits.is_empty()).then(|| BadgeVm {
                    label: format!("{} traits", framework.traits.len()),
                    class: "badge-count",
                }),
                selected: Some(framework.id) == current,
                intent: WizardIntent::Select(Selection::Framework(framework.id)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Framework",
            empty_label: "No frameworks available.",
            choices,
        }
    }

    fn assessment_choices(&self) -> ChoiceSectionVm {
        let selection = self.session.selection();
        let current = selection.assessment_type().map(|a| a.id);
        let choices = selection
            .fixtures()
            .assessment_types()
            .iter()
            .map(|kind| ChoiceVm {
                key: format!("assessment-{}", kind.id),
                title: kind.name.clone(),
                detail: kind.description.clone(),
                icon: None,
                badge: Some(BadgeVm {
                    label: format_minutes(kind.duration_minutes),
                    class: "badge-duration",
                }),
                selected: Some(kind.id) == current,
                intent: WizardIntent::Select(Selection::AssessmentType(kind.id)),
            })
            .collect();
        ChoiceSectionVm {
            heading: "Assessment type",
            empty_label: "No assessment types available.",
            choices,
        }
    }

    fn interview(&self) -> Option<InterviewVm> {
        let session = &self.session;
        let panel = session.interview_panel()?;
        let selection = session.selection();
        let tips = selection
            .fixtures()
            .tips()
            .iter()
            .map(|tip| TipVm {
                title: tip.title.clone(),
                body: tip.body.clone(),
            })
            .collect();
        Some(InterviewVm {
            panel,
            elapsed: session.elapsed_label(),
            interviewer: selection
                .interviewer()
                .map_or_else(|| "Any available interviewer".to_string(), |i| i.name.clone()),
            slot: selection
                .slot()
                .map_or_else(|| "No slot selected".to_string(), |s| s.label()),
            medium: selection.medium().label(),
            auto_end_secs: session
                .call()
                .settings()
                .auto_end_after()
                .map(|delay| delay.as_secs()),
            tips,
        })
    }
}
