//! Field names and the step table.
//!
//! Every answer on the form is addressed by a [`FieldName`], and every field
//! belongs to exactly one [`Step`]. The table in [`Step::fields`] is the only
//! place that decides which panel owns which field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Number of steps on the form.
pub const TOTAL_STEPS: usize = 3;

/// A named answer on the intake form.
///
/// Ordering follows the order fields appear on screen, so maps keyed by
/// `FieldName` iterate in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    KidAge,
    KidDiagnosisInfo,
    EducationalSetting,
    RequestedServices,
    ServiceFrequency,
    AdditionalComments,
    ParentName,
    ParentEmail,
    ParentContact,
}

impl FieldName {
    /// All fields in display order.
    pub fn all() -> &'static [FieldName] {
        &[
            FieldName::KidAge,
            FieldName::KidDiagnosisInfo,
            FieldName::EducationalSetting,
            FieldName::RequestedServices,
            FieldName::ServiceFrequency,
            FieldName::AdditionalComments,
            FieldName::ParentName,
            FieldName::ParentEmail,
            FieldName::ParentContact,
        ]
    }

    /// The camelCase key used in the summary dump and answers files.
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::KidAge => "kidAge",
            FieldName::KidDiagnosisInfo => "kidDiagnosisInfo",
            FieldName::EducationalSetting => "educationalSetting",
            FieldName::RequestedServices => "requestedServices",
            FieldName::ServiceFrequency => "serviceFrequency",
            FieldName::AdditionalComments => "additionalComments",
            FieldName::ParentName => "parentName",
            FieldName::ParentEmail => "parentEmail",
            FieldName::ParentContact => "parentContact",
        }
    }

    /// Human-readable label for the summary listing.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::KidAge => "Child's Age",
            FieldName::KidDiagnosisInfo => "Primary Diagnosis",
            FieldName::EducationalSetting => "Educational Setting",
            FieldName::RequestedServices => "Requested Services",
            FieldName::ServiceFrequency => "Service Frequency",
            FieldName::AdditionalComments => "Additional Comments",
            FieldName::ParentName => "Parent/Guardian Name",
            FieldName::ParentEmail => "Email Address",
            FieldName::ParentContact => "Contact Number",
        }
    }

    /// Whether this field holds a list of selected options.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldName::RequestedServices)
    }

    /// The step whose panel owns this field.
    pub fn step(&self) -> Step {
        match self {
            FieldName::KidAge | FieldName::KidDiagnosisInfo | FieldName::EducationalSetting => {
                Step::ChildDetails
            }
            FieldName::RequestedServices
            | FieldName::ServiceFrequency
            | FieldName::AdditionalComments => Step::Services,
            FieldName::ParentName | FieldName::ParentEmail | FieldName::ParentContact => {
                Step::Guardian
            }
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::all()
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}

/// One of the three sequential panels of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// Step 1: the child's age, diagnosis and school setting
    #[default]
    ChildDetails,
    /// Step 2: requested services, frequency and free-form comments
    Services,
    /// Step 3: parent or guardian contact details
    Guardian,
}

impl Step {
    /// All steps in order.
    pub fn all() -> &'static [Step] {
        &[Step::ChildDetails, Step::Services, Step::Guardian]
    }

    /// 1-based step number as shown to the user.
    pub fn number(&self) -> usize {
        match self {
            Step::ChildDetails => 1,
            Step::Services => 2,
            Step::Guardian => 3,
        }
    }

    /// Look up a step by its 1-based number.
    pub fn from_number(number: usize) -> Result<Self, IntakeError> {
        match number {
            1 => Ok(Step::ChildDetails),
            2 => Ok(Step::Services),
            3 => Ok(Step::Guardian),
            other => Err(IntakeError::InvalidStep(other)),
        }
    }

    /// Panel heading.
    pub fn title(&self) -> &'static str {
        match self {
            Step::ChildDetails => "Child's Details",
            Step::Services => "Required Services",
            Step::Guardian => "Parent/Guardian Information",
        }
    }

    /// Fields owned by this step, in display order.
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            Step::ChildDetails => &[
                FieldName::KidAge,
                FieldName::KidDiagnosisInfo,
                FieldName::EducationalSetting,
            ],
            Step::Services => &[
                FieldName::RequestedServices,
                FieldName::ServiceFrequency,
                FieldName::AdditionalComments,
            ],
            Step::Guardian => &[
                FieldName::ParentName,
                FieldName::ParentEmail,
                FieldName::ParentContact,
            ],
        }
    }

    /// Fields that must pass validation before this step can be left.
    ///
    /// `additionalComments` is collected on step 2 but never validated.
    pub fn validated_fields(&self) -> &'static [FieldName] {
        match self {
            Step::ChildDetails => self.fields(),
            Step::Services => &[FieldName::RequestedServices, FieldName::ServiceFrequency],
            Step::Guardian => self.fields(),
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::ChildDetails => Some(Step::Services),
            Step::Services => Some(Step::Guardian),
            Step::Guardian => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::ChildDetails => None,
            Step::Services => Some(Step::ChildDetails),
            Step::Guardian => Some(Step::Services),
        }
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} ({})", self.number(), self.title())
    }
}
