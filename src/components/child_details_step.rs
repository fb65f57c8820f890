//! Step 1: the child's age, diagnosis and educational setting.

use dioxus::prelude::*;
use intake_core::{EducationalSetting, FieldName, FormOption};
use intake_ui::{Input, RadioGroup};

use super::owned;
use crate::context::use_form_session;

#[component]
pub fn ChildDetailsStep() -> Element {
    let mut session = use_form_session();
    let state = session.read();

    rsx! {
        h1 { class: "form-title", "New Service Request" }
        h2 { class: "step-title", "Child's Details" }
        div { class: "step-fields",
            Input {
                id: FieldName::KidAge.key().to_string(),
                input_type: "number".to_string(),
                value: state.text(FieldName::KidAge),
                placeholder: "Child's Age (e.g., 5)".to_string(),
                error: state.error(FieldName::KidAge),
                oninput: move |value| session.write().edit_text(FieldName::KidAge, value),
            }
            Input {
                id: FieldName::KidDiagnosisInfo.key().to_string(),
                value: state.text(FieldName::KidDiagnosisInfo),
                placeholder: "Primary Diagnosis (e.g., Autism Spectrum Disorder)".to_string(),
                error: state.error(FieldName::KidDiagnosisInfo),
                oninput: move |value| session.write().edit_text(FieldName::KidDiagnosisInfo, value),
            }
            RadioGroup {
                name: FieldName::EducationalSetting.key().to_string(),
                label: "Educational Setting".to_string(),
                options: owned(EducationalSetting::values()),
                selected: state.text(FieldName::EducationalSetting),
                error: state.error(FieldName::EducationalSetting),
                on_select: move |value| session.write().edit_text(FieldName::EducationalSetting, value),
            }
        }
    }
}
