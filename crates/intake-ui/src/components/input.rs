//! Input Field Components
//!
//! Text inputs and textareas with an optional label and inline error.

use dioxus::prelude::*;

use super::field_error::{control_class, FieldError};

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, number, email, tel)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// ID for label association
    pub id: String,
    /// Validation message to show under the input
    #[props(default)]
    pub error: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "kidAge".to_string(),
///         input_type: "number".to_string(),
///         value: draft.read().text(FieldName::KidAge).to_string(),
///         oninput: move |s| set_field(FieldName::KidAge, s),
///         placeholder: "Child's Age (e.g., 5)".to_string(),
///         error: errors.get(FieldName::KidAge).map(String::from),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = control_class("input-field", props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldError { message: props.error.clone() }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// ID for label association
    pub id: String,
    /// Validation message to show under the textarea
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = control_class("input-field textarea", props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldError { message: props.error.clone() }
        }
    }
}
