//! Startup configuration.
//!
//! Values come from an optional TOML file (`--config` or `JOBPREP_CONFIG`)
//! and are then overridden by command-line flags. An auto-end value of `0`
//! turns auto-end off for that assessment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use prep_core::model::WizardVariant;
use serde::Deserialize;
use services::{SessionSettings, SettingsError};

/// JobPrep desktop assessments
#[derive(Parser, Debug, Default)]
#[command(name = "jobprep", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "JOBPREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Load catalogs from this JSON file instead of the built-in set
    #[arg(long, env = "JOBPREP_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// End language calls automatically after this many seconds (0 disables)
    #[arg(long)]
    pub language_auto_end_secs: Option<u64>,

    /// End personality calls automatically after this many seconds (0 disables)
    #[arg(long)]
    pub personality_auto_end_secs: Option<u64>,

    /// Start with a session already present
    #[arg(long)]
    pub signed_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    #[serde(default)]
    pub language_auto_end_secs: Option<u64>,
    #[serde(default)]
    pub personality_auto_end_secs: Option<u64>,
    #[serde(default)]
    pub signed_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixturesConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

impl AppConfig {
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid TOML for this
    /// layout.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// File values (if any) with CLI flags layered on top.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_file`].
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match cli.config.as_deref() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.fixtures {
            self.fixtures.path = Some(path.clone());
        }
        if let Some(secs) = cli.language_auto_end_secs {
            self.session.language_auto_end_secs = Some(secs);
        }
        if let Some(secs) = cli.personality_auto_end_secs {
            self.session.personality_auto_end_secs = Some(secs);
        }
        if cli.signed_in {
            self.session.signed_in = true;
        }
    }

    #[must_use]
    pub fn fixtures_path(&self) -> Option<&Path> {
        self.fixtures.path.as_deref()
    }

    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.session.signed_in
    }

    /// # Errors
    ///
    /// Returns `SettingsError` for a zero tick interval.
    pub fn session_settings(
        &self,
        variant: WizardVariant,
    ) -> Result<SessionSettings, SettingsError> {
        let defaults = SessionSettings::for_variant(variant);
        let tick = self
            .session
            .tick_interval_ms
            .map_or(defaults.tick_interval(), Duration::from_millis);
        let auto_end = match variant {
            WizardVariant::Language => self.session.language_auto_end_secs,
            WizardVariant::Personality => self.session.personality_auto_end_secs,
        };
        let auto_end = match auto_end {
            None => defaults.auto_end_after(),
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        };
        SessionSettings::new(tick, auto_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn empty_config_keeps_session_defaults() {
        let config = AppConfig::default();
        let personality = config.session_settings(WizardVariant::Personality).unwrap();
        assert_eq!(personality.auto_end_after(), Some(Duration::from_secs(10)));
        let language = config.session_settings(WizardVariant::Language).unwrap();
        assert_eq!(language.auto_end_after(), None);
        assert_eq!(language.tick_interval(), Duration::from_secs(1));
        assert!(!config.signed_in());
    }

    #[test]
    fn loads_tables_from_file() {
        let file = write_config(
            r#"
[session]
tick_interval_ms = 500
language_auto_end_secs = 90
personality_auto_end_secs = 0
signed_in = true

[fixtures]
path = "data/catalog.json"
"#,
        );
        let config = AppConfig::from_file(file.path()).unwrap();

        assert!(config.signed_in());
        assert_eq!(config.fixtures_path(), Some(Path::new("data/catalog.json")));
        let language = config.session_settings(WizardVariant::Language).unwrap();
        assert_eq!(language.tick_interval(), Duration::from_millis(500));
        assert_eq!(language.auto_end_after(), Some(Duration::from_secs(90)));
        let personality = config.session_settings(WizardVariant::Personality).unwrap();
        assert_eq!(personality.auto_end_after(), None);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let file = write_config("[session]\npersonality_auto_end_secs = 30\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            fixtures: Some(PathBuf::from("other.json")),
            personality_auto_end_secs: Some(5),
            signed_in: true,
            ..Cli::default()
        };
        let config = AppConfig::resolve(&cli).unwrap();

        let personality = config.session_settings(WizardVariant::Personality).unwrap();
        assert_eq!(personality.auto_end_after(), Some(Duration::from_secs(5)));
        assert_eq!(config.fixtures_path(), Some(Path::new("other.json")));
        assert!(config.signed_in());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("[session]\nauto_start = true\n");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = AppConfig::from_file(Path::new("/nonexistent/jobprep.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/jobprep.toml"));
    }

    #[test]
    fn zero_tick_interval_is_an_error() {
        let config = AppConfig {
            session: SessionConfig {
                tick_interval_ms: Some(0),
                ..SessionConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(
            config.session_settings(WizardVariant::Language),
            Err(SettingsError::ZeroTickInterval)
        );
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "jobprep",
            "--personality-auto-end-secs",
            "12",
            "--signed-in",
        ]);
        assert_eq!(cli.personality_auto_end_secs, Some(12));
        assert!(cli.signed_in);
    }
}
