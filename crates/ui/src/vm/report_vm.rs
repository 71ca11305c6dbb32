use prep_core::format::score_color;
use prep_core::model::{ReportSection, ReportTab};
use services::ReportPresenter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub tab: ReportTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub name: String,
    pub score: i32,
    pub description: String,
    pub tone: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportBodyVm {
    Overview {
        summary: String,
        overall_score: i32,
        tone: &'static str,
    },
    Scores(Vec<ScoreVm>),
    Bullets(Vec<String>),
    Plan(Vec<(String, Vec<String>)>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub title: String,
    pub tabs: Vec<TabVm>,
    pub body: ReportBodyVm,
}

/// Map the presenter's current tab to display data. `None` until revealed.
#[must_use]
pub fn map_report(presenter: &ReportPresenter) -> Option<ReportVm> {
    let report = presenter.report()?;
    let section = presenter.current_section()?;
    let current = presenter.current_tab();

    let tabs = presenter
        .tabs()
        .iter()
        .map(|&tab| TabVm {
            tab,
            label: tab.label(report.variant),
            active: tab == current,
        })
        .collect();

    let body = match section {
        ReportSection::Overview {
            summary,
            overall_score,
            ..
        } => ReportBodyVm::Overview {
            summary: summary.to_string(),
            overall_score,
            tone: score_color(overall_score).class(),
        },
        ReportSection::Breakdown(items) => ReportBodyVm::Scores(
            items
                .iter()
                .map(|item| ScoreVm {
                    name: item.name.clone(),
                    score: item.score,
                    description: item.description.clone(),
                    tone: score_color(item.score).class(),
                })
                .collect(),
        ),
        ReportSection::Career(lines) | ReportSection::Relationships(lines) => {
            ReportBodyVm::Bullets(lines.to_vec())
        }
        ReportSection::Development(items) => ReportBodyVm::Plan(
            items
                .iter()
                .map(|item| (item.area.clone(), item.actions.clone()))
                .collect(),
        ),
    };

    Some(ReportVm {
        title: report.title.clone(),
        tabs,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::{EmbeddedFixtures, FixtureSource};
    use prep_core::model::WizardVariant;

    #[test]
    fn hidden_report_maps_to_nothing() {
        let fixtures = EmbeddedFixtures.load().unwrap();
        let report = fixtures.report_for(WizardVariant::Language).unwrap().clone();
        let presenter = ReportPresenter::new(WizardVariant::Language, report);
        assert_eq!(map_report(&presenter), None);
    }
}
