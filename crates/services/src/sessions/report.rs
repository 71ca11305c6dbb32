use prep_core::model::{Report, ReportSection, ReportTab, WizardVariant};
use tracing::debug;

/// Read-only presentation of the canned report shown after a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPresenter {
    variant: WizardVariant,
    report: Report,
    visible: bool,
    tab: ReportTab,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(variant: WizardVariant, report: Report) -> Self {
        Self {
            variant,
            report,
            visible: false,
            tab: ReportTab::default(),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn reveal(&mut self) {
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.tab = ReportTab::default();
    }

    #[must_use]
    pub fn tabs(&self) -> &'static [ReportTab] {
        ReportTab::tabs_for(self.variant)
    }

    #[must_use]
    pub fn current_tab(&self) -> ReportTab {
        self.tab
    }

    /// Switch tabs. Returns `false` for tabs the variant does not offer.
    pub fn select_tab(&mut self, tab: ReportTab) -> bool {
        if !self.tabs().contains(&tab) {
            return false;
        }
        debug!(%tab, "report tab selected");
        self.tab = tab;
        true
    }

    /// The report, once revealed.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        self.visible.then_some(&self.report)
    }

    /// Content of the current tab, once revealed.
    #[must_use]
    pub fn current_section(&self) -> Option<ReportSection<'_>> {
        self.report().map(|report| report.section(self.tab))
    }
}
