//! Shared error types for the services crate.

use std::time::Duration;

use prep_core::model::WizardVariant;
use thiserror::Error;

/// Errors emitted by `SelectionState::select`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("no {catalog} entry with id {id}")]
    Unknown { catalog: &'static str, id: String },
    #[error("{choice} is not offered by the {variant:?} assessment")]
    NotOffered {
        choice: &'static str,
        variant: WizardVariant,
    },
}

/// Errors emitted while building `SessionSettings`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("auto end delay must be greater than zero (got {0:?})")]
    ZeroAutoEnd(Duration),
}

/// Errors emitted when starting a guided session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no report is available for {0:?}")]
    MissingReport(WizardVariant),
}
