use prep_core::model::{
    AssessmentType, Catalog, FocusArea, Framework, Interviewer, Language, Report, Tip, TimeSlot,
    WizardVariant,
};

/// Every immutable catalog the assessment pages select from.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    languages: Catalog<Language>,
    focus_areas: Catalog<FocusArea>,
    interviewers: Catalog<Interviewer>,
    slots: Catalog<TimeSlot>,
    frameworks: Catalog<Framework>,
    assessment_types: Catalog<AssessmentType>,
    tips: Catalog<Tip>,
    reports: Catalog<Report>,
}

impl FixtureSet {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        languages: Catalog<Language>,
        focus_areas: Catalog<FocusArea>,
        interviewers: Catalog<Interviewer>,
        slots: Catalog<TimeSlot>,
        frameworks: Catalog<Framework>,
        assessment_types: Catalog<AssessmentType>,
        tips: Catalog<Tip>,
        reports: Catalog<Report>,
    ) -> Self {
        Self {
            languages,
            focus_areas,
            interviewers,
            slots,
            frameworks,
            assessment_types,
            tips,
            reports,
        }
    }

    #[must_use]
    pub fn languages(&self) -> &Catalog<Language> {
        &self.languages
    }

    #[must_use]
    pub fn focus_areas(&self) -> &Catalog<FocusArea> {
        &self.focus_areas
    }

    #[must_use]
    pub fn interviewers(&self) -> &Catalog<Interviewer> {
        &self.interviewers
    }

    #[must_use]
    pub fn slots(&self) -> &Catalog<TimeSlot> {
        &self.slots
    }

    #[must_use]
    pub fn frameworks(&self) -> &Catalog<Framework> {
        &self.frameworks
    }

    #[must_use]
    pub fn assessment_types(&self) -> &Catalog<AssessmentType> {
        &self.assessment_types
    }

    #[must_use]
    pub fn tips(&self) -> &Catalog<Tip> {
        &self.tips
    }

    #[must_use]
    pub fn reports(&self) -> &Catalog<Report> {
        &self.reports
    }

    /// The report shown once a call of `variant` ends.
    ///
    /// Loading guarantees one exists for each variant.
    #[must_use]
    pub fn report_for(&self, variant: WizardVariant) -> Option<&Report> {
        self.reports.iter().find(|report| report.variant == variant)
    }
}
