//! Errors raised while loading fixture catalogs.

use std::path::PathBuf;

use prep_core::model::{CatalogError, WizardVariant};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixtureError {
    #[error("failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{catalog} entry {id} refers to unknown language `{language}`")]
    UnknownLanguage {
        catalog: &'static str,
        id: String,
        language: String,
    },

    #[error("no report available for {0:?}")]
    MissingReport(WizardVariant),
}
