use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

use crate::model::ids::{
    AssessmentTypeId, FocusAreaId, FrameworkId, InterviewerId, LanguageId, ReportId, SlotId,
    TipId,
};
use crate::model::report::Report;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog `{catalog}` is empty")]
    Empty { catalog: &'static str },

    #[error("catalog `{catalog}` has duplicate id {id}")]
    DuplicateId { catalog: &'static str, id: String },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// A fixture record that can be looked up by id.
pub trait CatalogItem {
    type Id: Copy + Eq + Hash + fmt::Display;

    /// Name used in errors and logs.
    const CATALOG: &'static str;

    fn id(&self) -> Self::Id;
}

/// Immutable, ordered, non-empty sequence of fixture records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when `items` is empty and
    /// `CatalogError::DuplicateId` when two records share an id.
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty {
                catalog: T::CATALOG,
            });
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId {
                    catalog: T::CATALOG,
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items })
    }

    /// The default selection.
    #[must_use]
    pub fn first(&self) -> &T {
        // `new` rejects empty catalogs.
        &self.items[0]
    }

    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    pub name: String,
    /// Name of the language in itself; interviewers and slots refer to it.
    pub native_name: String,
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub id: FocusAreaId,
    pub name: String,
    pub description: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: InterviewerId,
    pub name: String,
    pub native_language: String,
    pub specialty: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: SlotId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub language: String,
    pub available: bool,
}

impl TimeSlot {
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} {}-{}",
            self.date.format("%a %b %-d"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub id: FrameworkId,
    pub name: String,
    pub description: String,
    /// Icon key, resolved through `IconKind::from_key`.
    pub icon: String,
    #[serde(default)]
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentType {
    pub id: AssessmentTypeId,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: TipId,
    pub title: String,
    pub body: String,
}

macro_rules! impl_catalog_item {
    ($ty:ty, $id:ty, $name:literal) => {
        impl CatalogItem for $ty {
            type Id = $id;
            const CATALOG: &'static str = $name;

            fn id(&self) -> Self::Id {
                self.id
            }
        }
    };
}

impl_catalog_item!(Language, LanguageId, "languages");
impl_catalog_item!(FocusArea, FocusAreaId, "focus_areas");
impl_catalog_item!(Interviewer, InterviewerId, "interviewers");
impl_catalog_item!(TimeSlot, SlotId, "slots");
impl_catalog_item!(Framework, FrameworkId, "frameworks");
impl_catalog_item!(AssessmentType, AssessmentTypeId, "assessment_types");
impl_catalog_item!(Tip, TipId, "tips");
impl_catalog_item!(Report, ReportId, "reports");

//
// ─── FIXED CHOICES ─────────────────────────────────────────────────────────────
//

/// Target proficiency label. Display only, never computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    #[default]
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the simulated call is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallMedium {
    #[default]
    Web,
    Phone,
}

impl CallMedium {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Web => "Web call",
            Self::Phone => "Phone call",
        }
    }
}
