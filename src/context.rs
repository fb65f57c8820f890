//! Form session context for the intake desktop app.
//!
//! The root view owns one [`FormSession`] in a `Signal` and provides it to
//! all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(FormSession::new()));
//!
//! // In child components
//! let mut session = use_form_session();
//! session.write().edit_text(FieldName::KidAge, "5".into());
//! ```

use std::collections::BTreeMap;

use dioxus::prelude::*;
use intake_core::{Draft, FieldErrors, FieldName, FieldValue, Step, StepNavigator, StepOutcome};

/// Navigator plus the live draft of the panel on screen.
///
/// Unsubmitted edits of a panel are stashed when the user presses
/// "Previous" and restored when they come back to it, so moving around never
/// drops what was typed.
#[derive(Debug, Clone)]
pub struct FormSession {
    nav: StepNavigator,
    draft: Draft,
    stashed: BTreeMap<Step, Draft>,
    /// Errors on screen; re-checked per field as the user edits.
    errors: FieldErrors,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        let nav = StepNavigator::new();
        let draft = nav.draft();
        Self {
            nav,
            draft,
            stashed: BTreeMap::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.nav
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.nav.current_step()
    }

    pub fn is_completed(&self) -> bool {
        self.nav.is_completed()
    }

    /// Visible error for a field, if any.
    pub fn error(&self, field: FieldName) -> Option<String> {
        self.errors.get(field).map(String::from)
    }

    pub fn text(&self, field: FieldName) -> String {
        self.draft.text(field).to_string()
    }

    pub fn list(&self, field: FieldName) -> Vec<String> {
        self.draft.list(field).to_vec()
    }

    pub fn edit_text(&mut self, field: FieldName, value: String) {
        if let Err(e) = self.draft.set_text(field, value) {
            tracing::error!("Rejected edit of {}: {}", field, e);
            return;
        }
        self.recheck(field);
    }

    pub fn toggle_option(&mut self, field: FieldName, option: String) {
        if let Err(e) = self.draft.toggle_option(field, &option) {
            tracing::error!("Rejected toggle of {}: {}", field, e);
            return;
        }
        self.recheck(field);
    }

    /// "Continue": validate the panel and move on when it passes.
    pub fn press_continue(&mut self) -> Option<StepOutcome> {
        let result = self.nav.advance(&self.draft);
        self.settle(result)
    }

    /// "Previous": stash this panel's edits and show the previous panel.
    pub fn press_previous(&mut self) {
        let leaving = self.step();
        match self.nav.retreat() {
            Ok(step) if step != leaving => {
                self.stashed.insert(leaving, self.draft.clone());
                self.enter(step);
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Previous failed: {}", e),
        }
    }

    /// "Confirm & Send": validate the last panel and complete the form.
    pub fn press_submit(&mut self) -> Option<StepOutcome> {
        let result = self.nav.submit_final(&self.draft);
        self.settle(result)
    }

    fn settle(&mut self, result: intake_core::IntakeResult<StepOutcome>) -> Option<StepOutcome> {
        match result {
            Ok(outcome) => {
                match &outcome {
                    StepOutcome::Moved(step) => {
                        let step = *step;
                        self.enter(step);
                    }
                    StepOutcome::Blocked(errors) => self.errors = errors.clone(),
                    StepOutcome::Held(_) | StepOutcome::Completed => self.errors.clear(),
                }
                Some(outcome)
            }
            Err(e) => {
                tracing::error!("Navigation failed: {}", e);
                None
            }
        }
    }

    fn enter(&mut self, step: Step) {
        self.draft = self
            .stashed
            .remove(&step)
            .unwrap_or_else(|| self.nav.draft());
        self.errors.clear();
    }

    /// Once a field shows an error, keep its message in step with edits.
    fn recheck(&mut self, field: FieldName) {
        if !self.errors.contains(field) {
            return;
        }
        let value = self
            .draft
            .get(field)
            .cloned()
            .unwrap_or_else(|| FieldValue::empty_for(field));
        match self.nav.validators().validate_field(field, &value) {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(message) => self.errors.insert(field, message),
        }
    }
}

/// Hook to access the form session from context.
pub fn use_form_session() -> Signal<FormSession> {
    use_context::<Signal<FormSession>>()
}
