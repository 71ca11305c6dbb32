use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use fixtures::FixtureSet;
use prep_core::model::WizardVariant;
use services::SessionSettings;

pub trait UiApp: Send + Sync {
    fn fixtures(&self) -> Arc<FixtureSet>;
    fn session_settings(&self, variant: WizardVariant) -> SessionSettings;
    fn signed_in_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    fixtures: Arc<FixtureSet>,
    language_settings: SessionSettings,
    personality_settings: SessionSettings,
    // Stands in for the session cookie the route guard checks.
    session_cookie: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            fixtures: app.fixtures(),
            language_settings: app.session_settings(WizardVariant::Language),
            personality_settings: app.session_settings(WizardVariant::Personality),
            session_cookie: Arc::new(AtomicBool::new(app.signed_in_on_launch())),
        }
    }

    #[must_use]
    pub fn fixtures(&self) -> Arc<FixtureSet> {
        Arc::clone(&self.fixtures)
    }

    #[must_use]
    pub fn session_settings(&self, variant: WizardVariant) -> SessionSettings {
        match variant {
            WizardVariant::Language => self.language_settings,
            WizardVariant::Personality => self.personality_settings,
        }
    }

    #[must_use]
    pub fn has_session_cookie(&self) -> bool {
        self.session_cookie.load(Ordering::Acquire)
    }

    pub fn sign_in(&self) {
        self.session_cookie.store(true, Ordering::Release);
    }

    pub fn sign_out(&self) {
        self.session_cookie.store(false, Ordering::Release);
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
