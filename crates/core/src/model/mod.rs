mod call;
mod catalog;
mod ids;
mod report;
mod step;

pub use call::CallState;
pub use catalog::{
    AssessmentType, CallMedium, Catalog, CatalogError, CatalogItem, CefrLevel, FocusArea,
    Framework, Interviewer, Language, Tip, TimeSlot,
};
pub use ids::{
    AssessmentTypeId, FocusAreaId, FrameworkId, InterviewerId, LanguageId, ReportId, SlotId,
    TipId,
};
pub use report::{DevelopmentItem, Report, ReportSection, ReportTab, ScoreItem};
pub use step::{Step, WizardVariant};
