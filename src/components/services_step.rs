//! Step 2: requested services, frequency and optional comments.

use dioxus::prelude::*;
use intake_core::{FieldName, FormOption, RequestedService, ServiceFrequency};
use intake_ui::{MultiSelect, Select, TextArea};

use super::owned;
use crate::context::use_form_session;

#[component]
pub fn ServicesStep() -> Element {
    let mut session = use_form_session();
    let state = session.read();

    rsx! {
        h2 { class: "step-title", "Required Services" }
        div { class: "step-fields",
            MultiSelect {
                hint: "Select one or more services from the list below.".to_string(),
                options: owned(RequestedService::values()),
                selected: state.list(FieldName::RequestedServices),
                error: state.error(FieldName::RequestedServices),
                on_toggle: move |option| {
                    session.write().toggle_option(FieldName::RequestedServices, option)
                },
            }
            Select {
                id: FieldName::ServiceFrequency.key().to_string(),
                placeholder: "-- Select Desired Frequency --".to_string(),
                options: owned(ServiceFrequency::values()),
                selected: state.text(FieldName::ServiceFrequency),
                error: state.error(FieldName::ServiceFrequency),
                on_change: move |value| session.write().edit_text(FieldName::ServiceFrequency, value),
            }
            TextArea {
                id: FieldName::AdditionalComments.key().to_string(),
                value: state.text(FieldName::AdditionalComments),
                placeholder: "Any additional information or specific concerns you'd like us to know?"
                    .to_string(),
                rows: 4,
                oninput: move |value| session.write().edit_text(FieldName::AdditionalComments, value),
            }
        }
    }
}
