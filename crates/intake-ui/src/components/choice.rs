//! Option Picker Components
//!
//! - `RadioGroup`: exactly one of a fixed list
//! - `MultiSelect`: any number of a fixed list, toggled one at a time
//! - `Select`: dropdown with an empty placeholder entry

use dioxus::prelude::*;

use super::field_error::{control_class, FieldError};

/// Properties for the RadioGroup component
#[derive(Clone, PartialEq, Props)]
pub struct RadioGroupProps {
    /// Group name shared by the radio inputs
    pub name: String,
    /// Group label
    #[props(default)]
    pub label: Option<String>,
    /// Available options, in display order
    pub options: Vec<String>,
    /// Currently selected option, empty when none
    pub selected: String,
    /// Handler called with the chosen option
    pub on_select: EventHandler<String>,
    /// Validation message to show under the group
    #[props(default)]
    pub error: Option<String>,
}

/// Horizontal row of radio buttons
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RadioGroup {
///         name: "educationalSetting".to_string(),
///         label: "Educational Setting".to_string(),
///         options: vec!["Public School".to_string(), "Homeschool".to_string()],
///         selected: current(),
///         on_select: move |value| current.set(value),
///     }
/// }
/// ```
#[component]
pub fn RadioGroup(props: RadioGroupProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                span { class: "input-label", "{label}" }
            }
            div {
                class: "radio-group",
                role: "radiogroup",
                for choice in props.options.iter() {
                    {
                        let value = choice.clone();
                        let checked = props.selected == *choice;
                        let on_select = props.on_select;
                        rsx! {
                            label { key: "{choice}", class: "radio-option",
                                input {
                                    r#type: "radio",
                                    name: "{props.name}",
                                    value: "{choice}",
                                    checked: checked,
                                    onchange: move |_| on_select.call(value.clone()),
                                }
                                span { "{choice}" }
                            }
                        }
                    }
                }
            }
            FieldError { message: props.error.clone() }
        }
    }
}

/// Properties for the MultiSelect component
#[derive(Clone, PartialEq, Props)]
pub struct MultiSelectProps {
    /// Group label
    #[props(default)]
    pub label: Option<String>,
    /// Hint shown under the label
    #[props(default)]
    pub hint: Option<String>,
    /// Available options, in display order
    pub options: Vec<String>,
    /// Currently selected options
    pub selected: Vec<String>,
    /// Handler called with the option that was clicked
    pub on_toggle: EventHandler<String>,
    /// Validation message to show under the list
    #[props(default)]
    pub error: Option<String>,
}

/// Checkbox list for picking several options
#[component]
pub fn MultiSelect(props: MultiSelectProps) -> Element {
    let list_class = control_class("multi-select", props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                span { class: "input-label", "{label}" }
            }
            if let Some(hint) = &props.hint {
                p { class: "input-hint", "{hint}" }
            }
            div { class: "{list_class}",
                for choice in props.options.iter() {
                    {
                        let value = choice.clone();
                        let checked = is_selected(&props.selected, choice);
                        let on_toggle = props.on_toggle;
                        rsx! {
                            label {
                                key: "{choice}",
                                class: option_class(checked),
                                input {
                                    r#type: "checkbox",
                                    value: "{choice}",
                                    checked: checked,
                                    onchange: move |_| on_toggle.call(value.clone()),
                                }
                                span { "{choice}" }
                            }
                        }
                    }
                }
            }
            FieldError { message: props.error.clone() }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// ID for label association
    pub id: String,
    /// Select label
    #[props(default)]
    pub label: Option<String>,
    /// Text of the leading empty entry
    pub placeholder: String,
    /// Available options, in display order
    pub options: Vec<String>,
    /// Currently selected option, empty for the placeholder
    pub selected: String,
    /// Handler called with the new value (empty for the placeholder)
    pub on_change: EventHandler<String>,
    /// Validation message to show under the select
    #[props(default)]
    pub error: Option<String>,
}

/// Dropdown with a placeholder entry
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = control_class("input-field", props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            select {
                id: "{props.id}",
                class: "{class}",
                value: "{props.selected}",
                onchange: move |e| props.on_change.call(e.value()),
                option { value: "", selected: props.selected.is_empty(), "{props.placeholder}" }
                for choice in props.options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: props.selected == *choice,
                        "{choice}"
                    }
                }
            }
            FieldError { message: props.error.clone() }
        }
    }
}

/// Whether `option` is among `selected`
pub fn is_selected(selected: &[String], option: &str) -> bool {
    selected.iter().any(|s| s == option)
}

fn option_class(checked: bool) -> &'static str {
    if checked {
        "multi-option selected"
    } else {
        "multi-option"
    }
}
