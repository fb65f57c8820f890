//! Error types for the intake form
//!
//! Field validation failures are not errors here: a blocked step is an
//! ordinary [`StepOutcome`](crate::navigator::StepOutcome). `IntakeError`
//! covers misuse of the navigator and problems loading answers.

use thiserror::Error;

use crate::fields::{FieldName, Step};

/// Main error type for intake operations
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The form was already submitted and the record is frozen
    #[error("Form already submitted; the record can no longer change")]
    AlreadyCompleted,

    /// Final submission was attempted before reaching the last step
    #[error("Cannot submit from {0}; only the last step submits")]
    NotFinalStep(Step),

    /// A draft carried a field owned by a different step
    #[error("Field {field} does not belong to {step}")]
    ForeignField { field: FieldName, step: Step },

    /// An answers file or lookup named a field that does not exist
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A step number outside 1..=3
    #[error("Invalid step number: {0}")]
    InvalidStep(usize),

    /// A value that is not one of the field's options
    #[error("Invalid option for {field}: {value}")]
    InvalidOption { field: FieldName, value: String },

    /// A value had the wrong shape for its field (text vs list)
    #[error("Wrong value type for {0}")]
    ValueType(FieldName),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;
