//! Step 3: parent or guardian contact details.

use dioxus::prelude::*;
use intake_core::FieldName;
use intake_ui::Input;

use crate::context::use_form_session;

/// Text fields on this panel with their input type and placeholder.
const FIELDS: [(FieldName, &str, &str); 3] = [
    (FieldName::ParentName, "text", "Your Full Name"),
    (FieldName::ParentEmail, "email", "Your Email Address"),
    (
        FieldName::ParentContact,
        "tel",
        "Your Contact Number (e.g., 123-456-7890)",
    ),
];

#[component]
pub fn GuardianStep() -> Element {
    let session = use_form_session();
    let state = session.read();

    rsx! {
        h2 { class: "step-title", "Parent/Guardian Information" }
        div { class: "step-fields",
            for (field, input_type, placeholder) in FIELDS {
                {
                    let mut session = session;
                    rsx! {
                        Input {
                            key: "{field}",
                            id: field.key().to_string(),
                            input_type: input_type.to_string(),
                            value: state.text(field),
                            placeholder: placeholder.to_string(),
                            error: state.error(field),
                            oninput: move |value| session.write().edit_text(field, value),
                        }
                    }
                }
            }
        }
    }
}
