mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use fixtures::{EmbeddedFixtures, FileFixtures, FixtureSet, FixtureSource};
use prep_core::model::WizardVariant;
use services::SessionSettings;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{AppConfig, Cli};

struct DesktopApp {
    fixtures: Arc<FixtureSet>,
    language: SessionSettings,
    personality: SessionSettings,
    signed_in: bool,
}

impl UiApp for DesktopApp {
    fn fixtures(&self) -> Arc<FixtureSet> {
        Arc::clone(&self.fixtures)
    }

    fn session_settings(&self, variant: WizardVariant) -> SessionSettings {
        match variant {
            WizardVariant::Language => self.language,
            WizardVariant::Personality => self.personality,
        }
    }

    fn signed_in_on_launch(&self) -> bool {
        self.signed_in
    }
}

fn load_fixtures(config: &AppConfig) -> anyhow::Result<FixtureSet> {
    let source: Box<dyn FixtureSource> = match config.fixtures_path() {
        Some(path) => Box::new(FileFixtures::new(path)),
        None => Box::new(EmbeddedFixtures),
    };
    let fixtures = source.load().with_context(|| match config.fixtures_path() {
        Some(path) => format!("loading fixtures from {}", path.display()),
        None => "loading built-in fixtures".to_string(),
    })?;
    Ok(fixtures)
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    let fixtures = Arc::new(load_fixtures(&config)?);
    let language = config
        .session_settings(WizardVariant::Language)
        .context("language session settings")?;
    let personality = config
        .session_settings(WizardVariant::Personality)
        .context("personality session settings")?;

    info!(
        config_file = ?cli.config,
        fixtures = ?config.fixtures_path(),
        languages = fixtures.languages().len(),
        interviewers = fixtures.interviewers().len(),
        language_auto_end = ?language.auto_end_after(),
        personality_auto_end = ?personality.auto_end_after(),
        signed_in = config.signed_in(),
        "config_loaded"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        fixtures,
        language,
        personality,
        signed_in: config.signed_in(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("JobPrep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(err) = run() {
        tracing::error!(error = %format!("{err:#}"), "startup failed");
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
