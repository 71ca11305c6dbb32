use prep_core::model::{
    AssessmentType, Catalog, FocusArea, Framework, Interviewer, Language, Report, Tip, TimeSlot,
    WizardVariant,
};
use serde::Deserialize;

use crate::error::FixtureError;
use crate::set::FixtureSet;

/// On-disk shape of the fixture document.
///
/// Records are kept as plain vectors here; `into_set` turns them into
/// validated catalogs.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FixtureDocument {
    languages: Vec<Language>,
    focus_areas: Vec<FocusArea>,
    interviewers: Vec<Interviewer>,
    slots: Vec<TimeSlot>,
    frameworks: Vec<Framework>,
    assessment_types: Vec<AssessmentType>,
    tips: Vec<Tip>,
    reports: Vec<Report>,
}

impl FixtureDocument {
    pub(crate) fn parse(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub(crate) fn into_set(self) -> Result<FixtureSet, FixtureError> {
        let languages = Catalog::new(self.languages)?;

        for interviewer in &self.interviewers {
            ensure_language(
                &languages,
                "interviewers",
                interviewer.id.to_string(),
                &interviewer.native_language,
            )?;
        }
        for slot in &self.slots {
            ensure_language(&languages, "slots", slot.id.to_string(), &slot.language)?;
        }

        let reports = Catalog::new(self.reports)?;
        for variant in [WizardVariant::Language, WizardVariant::Personality] {
            if !reports.iter().any(|report| report.variant == variant) {
                return Err(FixtureError::MissingReport(variant));
            }
        }

        Ok(FixtureSet::new(
            languages,
            Catalog::new(self.focus_areas)?,
            Catalog::new(self.interviewers)?,
            Catalog::new(self.slots)?,
            Catalog::new(self.frameworks)?,
            Catalog::new(self.assessment_types)?,
            Catalog::new(self.tips)?,
            reports,
        ))
    }
}

fn ensure_language(
    languages: &Catalog<Language>,
    catalog: &'static str,
    id: String,
    language: &str,
) -> Result<(), FixtureError> {
    if languages.iter().any(|l| l.native_name == language) {
        return Ok(());
    }
    Err(FixtureError::UnknownLanguage {
        catalog,
        id,
        language: language.to_string(),
    })
}
