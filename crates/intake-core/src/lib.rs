//! Service Request Intake Core Library
//!
//! Form state, validation and step navigation for the three-step pediatric
//! services intake form.
//!
//! ## Overview
//!
//! A family fills in three panels in order:
//!
//! 1. **Child's Details**: age, diagnosis, educational setting
//! 2. **Required Services**: services, frequency, optional comments
//! 3. **Parent/Guardian Information**: name, email, contact number
//!
//! Each "Continue" validates only the current panel's fields. A passing panel
//! is merged into the accumulated [`IntakeRecord`]; a failing one surfaces one
//! message per invalid field and changes nothing. Submitting the last panel
//! freezes the record.
//!
//! ## Quick Start
//!
//! ```
//! use intake_core::{Answers, ReplayOutcome};
//!
//! let answers = Answers::from_json(r#"{
//!     "kidAge": 5,
//!     "kidDiagnosisInfo": "ASD",
//!     "educationalSetting": "Public School",
//!     "requestedServices": ["Speech Therapy"],
//!     "serviceFrequency": "Weekly",
//!     "parentName": "Jane Doe",
//!     "parentEmail": "jane@example.com",
//!     "parentContact": "123-456-7890"
//! }"#).unwrap();
//!
//! match answers.replay().unwrap() {
//!     ReplayOutcome::Completed(nav) => assert!(nav.is_completed()),
//!     ReplayOutcome::Blocked { step, errors } => panic!("{step}: {errors}"),
//! }
//! ```

pub mod answers;
pub mod draft;
pub mod error;
pub mod fields;
pub mod logging;
pub mod navigator;
pub mod summary;
pub mod types;
pub mod validation;

// Re-exports
pub use answers::{Answers, ReplayOutcome};
pub use draft::Draft;
pub use error::{IntakeError, IntakeResult};
pub use fields::{FieldName, Step, TOTAL_STEPS};
pub use navigator::{StepNavigator, StepOutcome};
pub use summary::{summary_entries, summary_json, summary_text, SummaryEntry};
pub use types::*;
pub use validation::{FieldErrors, Rule, Validators};
