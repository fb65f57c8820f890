//! "Step N of 3" progress line above the panel.

use dioxus::prelude::*;
use intake_core::{Step, TOTAL_STEPS};

#[component]
pub fn StepIndicator(step: Step) -> Element {
    let number = step.number();

    rsx! {
        div { class: "step-indicator",
            for each in Step::all() {
                span { key: "{each}", class: dot_class(*each, step) }
            }
            span { class: "step-count", "Step {number} of {TOTAL_STEPS}" }
        }
    }
}

fn dot_class(dot: Step, current: Step) -> &'static str {
    if dot == current {
        "step-dot current"
    } else if dot < current {
        "step-dot done"
    } else {
        "step-dot"
    }
}
