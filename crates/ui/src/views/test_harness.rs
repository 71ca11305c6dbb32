use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use fixtures::{EmbeddedFixtures, FixtureSet, FixtureSource};
use prep_core::model::WizardVariant;
use services::SessionSettings;

use crate::context::{UiApp, build_app_context};
use crate::vm::{WizardIntent, WizardSnapshot, WizardVm};
use crate::views::assessment::WizardTestHandles;
use crate::views::{DashboardView, LanguageAssessmentView, LoginView, PersonalityAssessmentView};

struct TestApp {
    fixtures: Arc<FixtureSet>,
    personality_auto_end: Option<Duration>,
}

impl UiApp for TestApp {
    fn fixtures(&self) -> Arc<FixtureSet> {
        Arc::clone(&self.fixtures)
    }

    fn session_settings(&self, variant: WizardVariant) -> SessionSettings {
        let settings = SessionSettings::for_variant(variant);
        match (variant, self.personality_auto_end) {
            (WizardVariant::Personality, Some(delay)) => settings
                .with_auto_end_after(Some(delay))
                .expect("non-zero auto end"),
            _ => settings,
        }
    }

    fn signed_in_on_launch(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
    LanguageAssessment,
    PersonalityAssessment,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: WizardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::LanguageAssessment => rsx! { LanguageAssessmentView {} },
        ViewKind::PersonalityAssessment => rsx! { PersonalityAssessmentView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: WizardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn dispatch(&mut self, intent: WizardIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .as_ref()
                .map(WizardVm::snapshot)
                .expect("wizard started")
        })
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_auto_end(view, None)
}

pub fn setup_view_harness_with_auto_end(
    view: ViewKind,
    personality_auto_end: Option<Duration>,
) -> ViewHarness {
    let fixtures = Arc::new(EmbeddedFixtures.load().expect("embedded fixtures"));
    let app = Arc::new(TestApp {
        fixtures,
        personality_auto_end,
    });
    let handles = WizardTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
