//! Core types for the intake form

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, IntakeResult};
use crate::fields::FieldName;

/// A fixed option list offered by a radio group or select.
pub trait FormOption: Sized + Copy + 'static {
    /// All options in display order.
    fn all() -> &'static [Self];

    /// The value stored in the record.
    fn as_str(&self) -> &'static str;

    /// Find the option whose stored value is `value`.
    fn parse_option(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.as_str() == value)
    }

    /// Stored values of all options, in display order.
    fn values() -> Vec<&'static str> {
        Self::all().iter().map(|o| o.as_str()).collect()
    }
}

/// Where the child currently goes to school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationalSetting {
    PublicSchool,
    PrivateSchool,
    Homeschool,
}

impl FormOption for EducationalSetting {
    fn all() -> &'static [Self] {
        &[
            EducationalSetting::PublicSchool,
            EducationalSetting::PrivateSchool,
            EducationalSetting::Homeschool,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            EducationalSetting::PublicSchool => "Public School",
            EducationalSetting::PrivateSchool => "Private School",
            EducationalSetting::Homeschool => "Homeschool",
        }
    }
}

/// Services a family can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestedService {
    SpeechTherapy,
    OccupationalTherapy,
    SpecialEducation,
    PhysicalTherapy,
}

impl FormOption for RequestedService {
    fn all() -> &'static [Self] {
        &[
            RequestedService::SpeechTherapy,
            RequestedService::OccupationalTherapy,
            RequestedService::SpecialEducation,
            RequestedService::PhysicalTherapy,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RequestedService::SpeechTherapy => "Speech Therapy",
            RequestedService::OccupationalTherapy => "Occupational Therapy",
            RequestedService::SpecialEducation => "Special Education",
            RequestedService::PhysicalTherapy => "Physical Therapy",
        }
    }
}

/// How often services are wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceFrequency {
    Daily,
    MultipleTimesWeekly,
    Weekly,
    BiWeekly,
    Monthly,
}

impl FormOption for ServiceFrequency {
    fn all() -> &'static [Self] {
        &[
            ServiceFrequency::Daily,
            ServiceFrequency::MultipleTimesWeekly,
            ServiceFrequency::Weekly,
            ServiceFrequency::BiWeekly,
            ServiceFrequency::Monthly,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ServiceFrequency::Daily => "Daily",
            ServiceFrequency::MultipleTimesWeekly => "Multiple Times Weekly",
            ServiceFrequency::Weekly => "Weekly",
            ServiceFrequency::BiWeekly => "Bi-Weekly",
            ServiceFrequency::Monthly => "Monthly",
        }
    }
}

/// Option values for a field with a fixed option list, `None` for free text.
pub fn options_for(field: FieldName) -> Option<Vec<&'static str>> {
    match field {
        FieldName::EducationalSetting => Some(EducationalSetting::values()),
        FieldName::RequestedServices => Some(RequestedService::values()),
        FieldName::ServiceFrequency => Some(ServiceFrequency::values()),
        _ => None,
    }
}

/// The value of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The empty value for a field: an empty list or an empty string.
    pub fn empty_for(field: FieldName) -> Self {
        if field.is_list() {
            FieldValue::List(Vec::new())
        } else {
            FieldValue::Text(String::new())
        }
    }

    /// True for an empty list or text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// The accumulated answers of the whole form.
///
/// Starts with every field empty and is filled one step at a time by
/// [`StepNavigator`](crate::navigator::StepNavigator) merges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRecord {
    pub kid_age: String,
    pub kid_diagnosis_info: String,
    pub educational_setting: String,
    pub requested_services: Vec<String>,
    pub service_frequency: String,
    pub additional_comments: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_contact: String,
}

impl IntakeRecord {
    /// An all-empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field.
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::RequestedServices => FieldValue::List(self.requested_services.clone()),
            _ => FieldValue::Text(self.text_slot(field).unwrap_or_default().to_string()),
        }
    }

    /// Overwrite one field.
    ///
    /// Fails with [`IntakeError::ValueType`] when a list is given for a text
    /// field or the other way round.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> IntakeResult<()> {
        match (field, value) {
            (FieldName::RequestedServices, FieldValue::List(items)) => {
                self.requested_services = items;
                Ok(())
            }
            (FieldName::RequestedServices, FieldValue::Text(_)) => {
                Err(IntakeError::ValueType(field))
            }
            (_, FieldValue::Text(text)) => match self.text_slot_mut(field) {
                Some(slot) => {
                    *slot = text;
                    Ok(())
                }
                None => Err(IntakeError::ValueType(field)),
            },
            (_, FieldValue::List(_)) => Err(IntakeError::ValueType(field)),
        }
    }

    /// All fields with their values, in display order.
    pub fn entries(&self) -> Vec<(FieldName, FieldValue)> {
        FieldName::all()
            .iter()
            .map(|field| (*field, self.get(*field)))
            .collect()
    }

    fn text_slot(&self, field: FieldName) -> Option<&str> {
        let slot = match field {
            FieldName::KidAge => &self.kid_age,
            FieldName::KidDiagnosisInfo => &self.kid_diagnosis_info,
            FieldName::EducationalSetting => &self.educational_setting,
            FieldName::ServiceFrequency => &self.service_frequency,
            FieldName::AdditionalComments => &self.additional_comments,
            FieldName::ParentName => &self.parent_name,
            FieldName::ParentEmail => &self.parent_email,
            FieldName::ParentContact => &self.parent_contact,
            FieldName::RequestedServices => return None,
        };
        Some(slot.as_str())
    }

    fn text_slot_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let slot = match field {
            FieldName::KidAge => &mut self.kid_age,
            FieldName::KidDiagnosisInfo => &mut self.kid_diagnosis_info,
            FieldName::EducationalSetting => &mut self.educational_setting,
            FieldName::ServiceFrequency => &mut self.service_frequency,
            FieldName::AdditionalComments => &mut self.additional_comments,
            FieldName::ParentName => &mut self.parent_name,
            FieldName::ParentEmail => &mut self.parent_email,
            FieldName::ParentContact => &mut self.parent_contact,
            FieldName::RequestedServices => return None,
        };
        Some(slot)
    }
}
