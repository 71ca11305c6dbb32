use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FixtureError;
use crate::records::FixtureDocument;
use crate::set::FixtureSet;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Supplies the immutable catalogs at startup. Read-only.
pub trait FixtureSource: Send + Sync {
    /// Load and validate every catalog.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` when the document cannot be read, parsed, or
    /// fails validation.
    fn load(&self) -> Result<FixtureSet, FixtureError>;
}

/// Catalogs compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFixtures;

impl FixtureSource for EmbeddedFixtures {
    fn load(&self) -> Result<FixtureSet, FixtureError> {
        let set = FixtureDocument::parse(EMBEDDED_CATALOG)?.into_set()?;
        debug!(
            languages = set.languages().len(),
            interviewers = set.interviewers().len(),
            slots = set.slots().len(),
            "loaded embedded fixtures"
        );
        Ok(set)
    }
}

/// Catalogs read from a JSON file with the same shape as the embedded one.
#[derive(Debug, Clone)]
pub struct FileFixtures {
    path: PathBuf,
}

impl FileFixtures {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FixtureSource for FileFixtures {
    fn load(&self) -> Result<FixtureSet, FixtureError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| FixtureError::Io {
            path: self.path.clone(),
            source,
        })?;
        let set = FixtureDocument::parse(&raw)?.into_set()?;
        debug!(path = %self.path.display(), "loaded fixtures from file");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::WizardVariant;

    #[test]
    fn embedded_fixtures_load() {
        let set = EmbeddedFixtures.load().unwrap();
        assert!(!set.languages().is_empty());
        assert!(set.report_for(WizardVariant::Language).is_some());
        assert!(set.report_for(WizardVariant::Personality).is_some());
    }

    #[test]
    fn every_language_has_an_interviewer() {
        let set = EmbeddedFixtures.load().unwrap();
        for language in set.languages() {
            assert!(
                set.interviewers()
                    .iter()
                    .any(|i| i.native_language == language.native_name),
                "no interviewer for {}",
                language.name
            );
        }
    }
}
