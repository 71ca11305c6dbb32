#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod settings;

pub use error::{SelectionError, SessionError, SettingsError};
pub use settings::SessionSettings;

pub use sessions::{
    GuidedSession, InterviewPanel, ReportPresenter, Selection, SelectionState, StepController,
    TimerEvent, TimerEvents, TimerOutcome, WizardProgress,
};
