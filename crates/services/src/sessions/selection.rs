use std::sync::Arc;

use fixtures::FixtureSet;
use prep_core::model::{
    AssessmentType, AssessmentTypeId, CallMedium, CatalogItem, CefrLevel, FocusArea, FocusAreaId,
    Framework, FrameworkId, Interviewer, InterviewerId, Language, LanguageId, SlotId, TimeSlot,
    WizardVariant,
};
use tracing::debug;

use crate::error::SelectionError;

/// A single user choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Language(LanguageId),
    FocusArea(FocusAreaId),
    Level(CefrLevel),
    Interviewer(InterviewerId),
    Slot(SlotId),
    Medium(CallMedium),
    Framework(FrameworkId),
    AssessmentType(AssessmentTypeId),
}

/// The user's current pick in every catalog.
///
/// Interviewer and slot lists are filtered by the selected language. When the
/// language changes, a dependent pick that falls outside the new list is
/// replaced by the first entry of that list (or cleared when it is empty).
#[derive(Debug, Clone)]
pub struct SelectionState {
    variant: WizardVariant,
    fixtures: Arc<FixtureSet>,
    language: LanguageId,
    focus_area: FocusAreaId,
    level: CefrLevel,
    interviewer: Option<InterviewerId>,
    slot: Option<SlotId>,
    medium: CallMedium,
    framework: Option<FrameworkId>,
    assessment_type: Option<AssessmentTypeId>,
}

impl SelectionState {
    #[must_use]
    pub fn new(variant: WizardVariant, fixtures: Arc<FixtureSet>) -> Self {
        let personality = matches!(variant, WizardVariant::Personality);
        let mut state = Self {
            variant,
            language: fixtures.languages().first().id,
            focus_area: fixtures.focus_areas().first().id,
            level: CefrLevel::default(),
            interviewer: None,
            slot: None,
            medium: CallMedium::default(),
            framework: personality.then(|| fixtures.frameworks().first().id),
            assessment_type: personality.then(|| fixtures.assessment_types().first().id),
            fixtures,
        };
        state.interviewer = state.available_interviewers().first().map(|i| i.id);
        state.slot = state.available_slots().first().map(|s| s.id);
        state
    }

    #[must_use]
    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    /// Replace the current pick for one catalog.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Unknown` for ids missing from the catalog and
    /// `SelectionError::NotOffered` for personality-only choices on the
    /// language variant.
    pub fn select(&mut self, selection: Selection) -> Result<(), SelectionError> {
        match selection {
            Selection::Language(id) => {
                ensure_known(self.fixtures.languages().contains(id), Language::CATALOG, id)?;
                if self.language != id {
                    self.language = id;
                    self.revalidate_dependents();
                }
            }
            Selection::FocusArea(id) => {
                ensure_known(self.fixtures.focus_areas().contains(id), FocusArea::CATALOG, id)?;
                self.focus_area = id;
            }
            Selection::Level(level) => self.level = level,
            Selection::Interviewer(id) => {
                ensure_known(
                    self.fixtures.interviewers().contains(id),
                    Interviewer::CATALOG,
                    id,
                )?;
                self.interviewer = Some(id);
            }
            Selection::Slot(id) => {
                ensure_known(self.fixtures.slots().contains(id), TimeSlot::CATALOG, id)?;
                self.slot = Some(id);
            }
            Selection::Medium(medium) => self.medium = medium,
            Selection::Framework(id) => {
                self.ensure_personality("framework")?;
                ensure_known(self.fixtures.frameworks().contains(id), Framework::CATALOG, id)?;
                self.framework = Some(id);
            }
            Selection::AssessmentType(id) => {
                self.ensure_personality("assessment type")?;
                ensure_known(
                    self.fixtures.assessment_types().contains(id),
                    AssessmentType::CATALOG,
                    id,
                )?;
                self.assessment_type = Some(id);
            }
        }
        debug!(?selection, "selection changed");
        Ok(())
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        let languages = self.fixtures.languages();
        languages.get(self.language).unwrap_or(languages.first())
    }

    #[must_use]
    pub fn focus_area(&self) -> &FocusArea {
        let areas = self.fixtures.focus_areas();
        areas.get(self.focus_area).unwrap_or(areas.first())
    }

    #[must_use]
    pub fn level(&self) -> CefrLevel {
        self.level
    }

    #[must_use]
    pub fn interviewer(&self) -> Option<&Interviewer> {
        self.interviewer
            .and_then(|id| self.fixtures.interviewers().get(id))
    }

    #[must_use]
    pub fn slot(&self) -> Option<&TimeSlot> {
        self.slot.and_then(|id| self.fixtures.slots().get(id))
    }

    #[must_use]
    pub fn medium(&self) -> CallMedium {
        self.medium
    }

    #[must_use]
    pub fn framework(&self) -> Option<&Framework> {
        self.framework.and_then(|id| self.fixtures.frameworks().get(id))
    }

    #[must_use]
    pub fn assessment_type(&self) -> Option<&AssessmentType> {
        self.assessment_type
            .and_then(|id| self.fixtures.assessment_types().get(id))
    }

    /// Interviewers whose native language is the selected language.
    #[must_use]
    pub fn available_interviewers(&self) -> Vec<&Interviewer> {
        let native = self.language().native_name.as_str();
        self.fixtures
            .interviewers()
            .iter()
            .filter(|interviewer| interviewer.native_language == native)
            .collect()
    }

    /// Open slots in the selected language.
    #[must_use]
    pub fn available_slots(&self) -> Vec<&TimeSlot> {
        let native = self.language().native_name.as_str();
        self.fixtures
            .slots()
            .iter()
            .filter(|slot| slot.available && slot.language == native)
            .collect()
    }

    fn revalidate_dependents(&mut self) {
        let interviewers: Vec<InterviewerId> =
            self.available_interviewers().iter().map(|i| i.id).collect();
        if !self.interviewer.is_some_and(|id| interviewers.contains(&id)) {
            self.interviewer = interviewers.first().copied();
        }

        let slots: Vec<SlotId> = self.available_slots().iter().map(|s| s.id).collect();
        if !self.slot.is_some_and(|id| slots.contains(&id)) {
            self.slot = slots.first().copied();
        }
    }

    fn ensure_personality(&self, choice: &'static str) -> Result<(), SelectionError> {
        if matches!(self.variant, WizardVariant::Personality) {
            Ok(())
        } else {
            Err(SelectionError::NotOffered {
                choice,
                variant: self.variant,
            })
        }
    }
}

fn ensure_known(
    known: bool,
    catalog: &'static str,
    id: impl std::fmt::Display,
) -> Result<(), SelectionError> {
    if known {
        Ok(())
    } else {
        Err(SelectionError::Unknown {
            catalog,
            id: id.to_string(),
        })
    }
}
