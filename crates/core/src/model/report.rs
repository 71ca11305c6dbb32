use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::ReportId;
use crate::model::step::WizardVariant;

/// One scored line of a report breakdown (a skill or a trait).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub name: String,
    pub score: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentItem {
    pub area: String,
    pub actions: Vec<String>,
}

/// A canned assessment report. Nothing in it is derived from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub variant: WizardVariant,
    pub title: String,
    pub summary: String,
    pub overall_score: i32,
    #[serde(default)]
    pub breakdown: Vec<ScoreItem>,
    #[serde(default)]
    pub career: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<String>,
    #[serde(default)]
    pub development: Vec<DevelopmentItem>,
}

/// Named display tab of the report panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportTab {
    #[default]
    Overview,
    Breakdown,
    Career,
    Relationships,
    Development,
}

const LANGUAGE_TABS: &[ReportTab] = &[
    ReportTab::Overview,
    ReportTab::Breakdown,
    ReportTab::Development,
];

const PERSONALITY_TABS: &[ReportTab] = &[
    ReportTab::Overview,
    ReportTab::Breakdown,
    ReportTab::Career,
    ReportTab::Relationships,
    ReportTab::Development,
];

impl ReportTab {
    /// Tabs offered by the report panel of a variant, in display order.
    #[must_use]
    pub fn tabs_for(variant: WizardVariant) -> &'static [ReportTab] {
        match variant {
            WizardVariant::Language => LANGUAGE_TABS,
            WizardVariant::Personality => PERSONALITY_TABS,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Breakdown => "breakdown",
            Self::Career => "career",
            Self::Relationships => "relationships",
            Self::Development => "development",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "overview" => Some(Self::Overview),
            "breakdown" | "traits" | "skills" => Some(Self::Breakdown),
            "career" => Some(Self::Career),
            "relationships" => Some(Self::Relationships),
            "development" => Some(Self::Development),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self, variant: WizardVariant) -> &'static str {
        match (self, variant) {
            (Self::Overview, _) => "Overview",
            (Self::Breakdown, WizardVariant::Language) => "Skills",
            (Self::Breakdown, WizardVariant::Personality) => "Traits",
            (Self::Career, _) => "Career",
            (Self::Relationships, _) => "Relationships",
            (Self::Development, _) => "Development plan",
        }
    }
}

impl fmt::Display for ReportTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Content of one report tab, borrowed from the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSection<'a> {
    Overview {
        title: &'a str,
        summary: &'a str,
        overall_score: i32,
    },
    Breakdown(&'a [ScoreItem]),
    Career(&'a [String]),
    Relationships(&'a [String]),
    Development(&'a [DevelopmentItem]),
}

impl Report {
    #[must_use]
    pub fn section(&self, tab: ReportTab) -> ReportSection<'_> {
        match tab {
            ReportTab::Overview => ReportSection::Overview {
                title: &self.title,
                summary: &self.summary,
                overall_score: self.overall_score,
            },
            ReportTab::Breakdown => ReportSection::Breakdown(&self.breakdown),
            ReportTab::Career => ReportSection::Career(&self.career),
            ReportTab::Relationships => ReportSection::Relationships(&self.relationships),
            ReportTab::Development => ReportSection::Development(&self.development),
        }
    }
}
