use dioxus::prelude::*;
use prep_core::model::WizardVariant;
use services::TimerEvents;

use super::components::{ChoiceSection, InterviewCard, ReportPanel, StepIndicator, WizardNav};
use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{WizardIntent, WizardVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub(super) fn WizardPage(variant: WizardVariant) -> Element {
    let ctx = use_context::<AppContext>();

    let (vm, events, error) = use_hook(|| {
        match WizardVm::start(variant, ctx.fixtures(), ctx.session_settings(variant)) {
            Ok((vm, events)) => (
                Signal::new(Some(vm)),
                Signal::new(Some(events)),
                Signal::new(None::<ViewError>),
            ),
            Err(err) => {
                tracing::warn!(%err, ?variant, "assessment could not start");
                (
                    Signal::new(None::<WizardVm>),
                    Signal::new(None::<TimerEvents>),
                    Signal::new(Some(ViewError::from(err))),
                )
            }
        }
    });

    // Sole consumer of timer events.
    use_future(move || {
        let mut vm = vm;
        let mut events = events;
        async move {
            let Some(mut rx) = events.write().take() else {
                return;
            };
            while let Some(event) = rx.recv().await {
                if let Some(vm) = vm.write().as_mut() {
                    vm.handle_timer_event(event);
                }
            }
        }
    });

    use_drop(move || {
        let mut vm = vm;
        if let Ok(mut guard) = vm.try_write() {
            if let Some(vm) = guard.as_mut() {
                vm.teardown();
            }
        }
    });

    let dispatch = use_callback(move |intent: WizardIntent| {
        let mut vm = vm;
        let changed = vm.write().as_mut().is_some_and(|vm| vm.apply(intent));
        if !changed {
            tracing::debug!(?intent, "intent had no effect");
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WizardTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    if let Some(err) = error() {
        return rsx! {
            div { class: "page",
                h2 { "{variant.label()}" }
                p { class: "error", "{err.message()}" }
            }
        };
    }

    let Some(snapshot) = vm.read().as_ref().map(WizardVm::snapshot) else {
        return rsx! {
            div { class: "page",
                p { "Loading..." }
            }
        };
    };

    rsx! {
        div { class: "page wizard",
            header { class: "wizard-header",
                h2 { "{snapshot.title}" }
                p { class: "muted", "{snapshot.step_title}" }
            }
            StepIndicator {
                steps: snapshot.steps.clone(),
                locked: snapshot.locked,
                on_intent: dispatch,
            }
            for section in snapshot.sections.iter().cloned() {
                ChoiceSection { key: "{section.heading}", section, on_intent: dispatch }
            }
            if let Some(interview) = snapshot.interview.clone() {
                InterviewCard { interview, on_intent: dispatch }
            }
            if let Some(report) = snapshot.report.clone() {
                ReportPanel { report, on_intent: dispatch }
            } else if snapshot.report_pending {
                p { class: "muted", "Your report appears here once the call has ended." }
            }
            WizardNav {
                can_previous: snapshot.can_previous,
                can_next: snapshot.can_next,
                locked: snapshot.locked,
                finished: snapshot.report.is_some(),
                on_intent: dispatch,
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WizardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WizardIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<WizardVm>>>>>,
}

#[cfg(test)]
impl WizardTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<WizardIntent>, vm: Signal<Option<WizardVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<WizardIntent> {
        (*self.dispatch.borrow()).expect("wizard dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<WizardVm>> {
        (*self.vm.borrow()).expect("wizard vm registered")
    }
}
