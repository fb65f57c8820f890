//! Service Request Intake UI Components
//!
//! Dioxus form widgets for the intake form: buttons, text inputs, option
//! pickers and inline field errors.
//!
//! Widgets are controlled: each takes its current value as a prop and reports
//! edits through an `EventHandler`. They hold no form state of their own and
//! know nothing about validation beyond displaying an optional error message.
//!
//! Styling is class-based; the host application supplies the stylesheet.

pub mod components;

pub use components::*;
