//! Per-field validation rules.
//!
//! [`Validators`] is an explicit `FieldName -> [Rule]` table. Rules for a
//! field run in order and the first failure supplies that field's message,
//! so each invalid field reports exactly one message.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::draft::Draft;
use crate::fields::{FieldName, Step};
use crate::types::{options_for, FieldValue, IntakeRecord};

/// Case-insensitive `local@domain.tld` shape.
pub const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$";

/// 7 to 20 digits, spaces, dashes or parens with an optional leading `+`.
pub const PHONE_PATTERN: &str = r"^\+?[0-9\s\-()]{7,20}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

/// A single check applied to a field value.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-blank text or a non-empty list
    Required(&'static str),
    /// Text parses as a finite number
    Numeric(&'static str),
    /// Numeric text is at least `value`; non-numeric text is left to `Numeric`
    Min { value: f64, message: &'static str },
    /// Text matches a regex
    Pattern {
        regex: fn() -> &'static Regex,
        message: &'static str,
    },
    /// Text, or every list entry, is one of the field's options
    OneOf {
        options: Vec<&'static str>,
        message: &'static str,
    },
    /// Arbitrary predicate over the value
    Custom {
        check: fn(&FieldValue) -> bool,
        message: &'static str,
    },
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(message) | Rule::Numeric(message) => *message,
            Rule::Min { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::OneOf { message, .. }
            | Rule::Custom { message, .. } => *message,
        }
    }

    /// Whether `value` passes this rule.
    pub fn check(&self, value: &FieldValue) -> bool {
        match self {
            Rule::Required(_) => !value.is_blank(),
            Rule::Numeric(_) => value.as_text().and_then(parse_number).is_some(),
            Rule::Min { value: min, .. } => match value.as_text().and_then(parse_number) {
                Some(n) => n >= *min,
                None => true,
            },
            Rule::Pattern { regex, .. } => value
                .as_text()
                .map(|text| regex().is_match(text))
                .unwrap_or(false),
            Rule::OneOf { options, .. } => match value {
                FieldValue::Text(text) => options.contains(&text.as_str()),
                FieldValue::List(items) => items.iter().all(|item| options.contains(&item.as_str())),
            },
            Rule::Custom { check, .. } => check(value),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn has_selection(value: &FieldValue) -> bool {
    value.as_list().map(|items| !items.is_empty()).unwrap_or(false)
}

/// Messages for the fields that failed validation, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn fields(&self) -> Vec<FieldName> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// The validator map for every field on the form.
#[derive(Debug, Clone)]
pub struct Validators {
    rules: BTreeMap<FieldName, Vec<Rule>>,
}

impl Default for Validators {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validators {
    /// The rule table of the service request form.
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();

        rules.insert(
            FieldName::KidAge,
            vec![
                Rule::Required("Child's age is mandatory."),
                Rule::Numeric("Age must be a number."),
                Rule::Min {
                    value: 0.0,
                    message: "Age cannot be negative.",
                },
            ],
        );
        rules.insert(
            FieldName::KidDiagnosisInfo,
            vec![Rule::Required(
                "A diagnosis or reason for services is required.",
            )],
        );
        rules.insert(
            FieldName::EducationalSetting,
            vec![
                Rule::Required("Please select a school type."),
                Rule::OneOf {
                    options: options_for(FieldName::EducationalSetting).unwrap_or_default(),
                    message: "Please select a school type.",
                },
            ],
        );
        rules.insert(
            FieldName::RequestedServices,
            vec![
                Rule::Required("At least one service must be selected."),
                Rule::Custom {
                    check: has_selection,
                    message: "Please select at least one service.",
                },
                Rule::OneOf {
                    options: options_for(FieldName::RequestedServices).unwrap_or_default(),
                    message: "Please select services from the list.",
                },
            ],
        );
        rules.insert(
            FieldName::ServiceFrequency,
            vec![
                Rule::Required("Service frequency is required."),
                Rule::OneOf {
                    options: options_for(FieldName::ServiceFrequency).unwrap_or_default(),
                    message: "Service frequency is required.",
                },
            ],
        );
        rules.insert(
            FieldName::ParentName,
            vec![Rule::Required("Your name is required.")],
        );
        rules.insert(
            FieldName::ParentEmail,
            vec![
                Rule::Required("Email address is required."),
                Rule::Pattern {
                    regex: email_regex,
                    message: "Invalid email address.",
                },
            ],
        );
        rules.insert(
            FieldName::ParentContact,
            vec![
                Rule::Required("A contact number is mandatory."),
                Rule::Pattern {
                    regex: phone_regex,
                    message: "Invalid phone number format.",
                },
            ],
        );

        Self { rules }
    }

    /// Rules registered for a field; empty for unvalidated fields.
    pub fn rules_for(&self, field: FieldName) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check one value, returning the first failing rule's message.
    pub fn validate_field(&self, field: FieldName, value: &FieldValue) -> Result<(), &'static str> {
        match self.rules_for(field).iter().find(|rule| !rule.check(value)) {
            Some(rule) => Err(rule.message()),
            None => Ok(()),
        }
    }

    /// Validate exactly the fields `step` gates on, reading them from `draft`.
    ///
    /// A field absent from the draft is validated as empty.
    pub fn validate_step(&self, step: Step, draft: &Draft) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in step.validated_fields() {
            let value = draft
                .get(*field)
                .cloned()
                .unwrap_or_else(|| FieldValue::empty_for(*field));
            if let Err(message) = self.validate_field(*field, &value) {
                errors.insert(*field, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate every gated field of a whole record.
    pub fn validate_record(&self, record: &IntakeRecord) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for step in Step::all() {
            for field in step.validated_fields() {
                if let Err(message) = self.validate_field(*field, &record.get(*field)) {
                    errors.insert(*field, message);
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
