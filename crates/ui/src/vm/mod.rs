mod report_vm;
mod time_fmt;
mod wizard_vm;

pub use report_vm::{ReportBodyVm, ReportVm, ScoreVm, TabVm, map_report};
pub use wizard_vm::{
    BadgeVm, ChoiceSectionVm, ChoiceVm, InterviewVm, StepItemVm, StepStatus, TipVm,
    WizardIntent, WizardSnapshot, WizardVm,
};
