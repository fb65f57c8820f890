use dioxus::prelude::*;
use intake_core::Step;

use crate::components::{
    ChildDetailsStep, FormNavigation, GuardianStep, ServicesStep, StepIndicator, SubmissionSummary,
};
use crate::context::{use_form_session, FormSession};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the form session and switches between the step form and the
/// submission summary.
#[component]
pub fn App() -> Element {
    let session: Signal<FormSession> = use_signal(FormSession::new);
    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "intake-page",
            if session.read().is_completed() {
                CompletedView {}
            } else {
                StepForm {}
            }
        }
    }
}

/// The step panel inside a form.
///
/// Submitting the form (the "Confirm & Send" button, or Enter in a field)
/// completes the request on the last step and acts as "Continue" before it.
#[component]
fn StepForm() -> Element {
    let mut session = use_form_session();
    let step = session.read().step();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if step.is_last() {
            session.write().press_submit();
        } else {
            session.write().press_continue();
        }
    };

    rsx! {
        form { class: "intake-form", onsubmit: on_submit,
            StepIndicator { step }
            match step {
                Step::ChildDetails => rsx! { ChildDetailsStep {} },
                Step::Services => rsx! { ServicesStep {} },
                Step::Guardian => rsx! { GuardianStep {} },
            }
            FormNavigation { step }
        }
    }
}

#[component]
fn CompletedView() -> Element {
    let session = use_form_session();
    let state = session.read();
    let record = state.navigator().record().clone();
    let submitted_at = state
        .navigator()
        .completed_at()
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string());

    rsx! {
        SubmissionSummary { record, submitted_at }
    }
}
