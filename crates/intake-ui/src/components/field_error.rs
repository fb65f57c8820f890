//! Inline field error message

use dioxus::prelude::*;

/// Properties for the FieldError component
#[derive(Clone, PartialEq, Props)]
pub struct FieldErrorProps {
    /// Message to show; nothing renders when `None`
    pub message: Option<String>,
}

/// Red message under an invalid field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FieldError { message: errors.get(FieldName::KidAge).map(String::from) }
/// }
/// ```
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}

/// CSS class for a control, marking it invalid when it has an error
pub fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{} invalid", base)
    } else {
        base.to_string()
    }
}
