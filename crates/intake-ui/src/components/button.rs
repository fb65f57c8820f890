//! Button Components
//!
//! Navigation bar buttons for the form:
//! - Back: returns to the previous step
//! - Continue: validates and moves forward
//! - Submit: the final "Confirm & Send"

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Forward navigation
    #[default]
    Continue,
    /// Backward navigation
    Back,
    /// Final submission
    Submit,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Continue => "btn btn-continue",
            ButtonVariant::Back => "btn btn-back",
            ButtonVariant::Submit => "btn btn-submit",
        }
    }

    /// The HTML `type` attribute; only the final button submits the form
    pub fn button_type(&self) -> &'static str {
        match self {
            ButtonVariant::Submit => "submit",
            ButtonVariant::Continue | ButtonVariant::Back => "button",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled navigation button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Back,
///         onclick: move |_| go_back(),
///         "Previous"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: props.variant.button_type(),
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
