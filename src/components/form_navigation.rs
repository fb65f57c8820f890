//! Navigation bar under the step panel.

use dioxus::prelude::*;
use intake_core::Step;
use intake_ui::{Button, ButtonVariant};

use crate::context::use_form_session;

/// "Previous" after step 1, "Continue" before the last step and
/// "Confirm & Send" on the last step.
///
/// "Confirm & Send" is a submit button; the enclosing form handles it.
#[component]
pub fn FormNavigation(step: Step) -> Element {
    let mut session = use_form_session();

    rsx! {
        div { class: "form-navigation",
            if !step.is_first() {
                Button {
                    variant: ButtonVariant::Back,
                    onclick: move |_| session.write().press_previous(),
                    "Previous"
                }
            }
            if !step.is_last() {
                Button {
                    variant: ButtonVariant::Continue,
                    onclick: move |_| {
                        session.write().press_continue();
                    },
                    "Continue"
                }
            }
            if step.is_last() {
                Button { variant: ButtonVariant::Submit, "Confirm & Send" }
            }
        }
    }
}
