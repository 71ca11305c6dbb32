mod call;
mod guided;
mod progress;
mod report;
mod selection;
mod steps;

// Public API of the guided session subsystem.
pub use crate::error::{SelectionError, SessionError};
pub use call::{CallSimulator, TimerEvent, TimerEvents, TimerOutcome};
pub use guided::GuidedSession;
pub use progress::WizardProgress;
pub use report::ReportPresenter;
pub use selection::{Selection, SelectionState};
pub use steps::{InterviewPanel, StepController};
