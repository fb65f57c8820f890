//! UI components for the intake desktop app.
//!
//! One panel per step, the navigation bar, and the read-only summary shown
//! after submission.

mod child_details_step;
mod form_navigation;
mod guardian_step;
mod services_step;
mod step_indicator;
mod submission_summary;

pub use child_details_step::ChildDetailsStep;
pub use form_navigation::FormNavigation;
pub use guardian_step::GuardianStep;
pub use services_step::ServicesStep;
pub use step_indicator::StepIndicator;
pub use submission_summary::SubmissionSummary;

/// Owned option strings for a widget's `options` prop.
pub(crate) fn owned(values: Vec<&'static str>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}
