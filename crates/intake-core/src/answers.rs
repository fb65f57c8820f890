//! Answers files for headless runs.
//!
//! An answers file is a JSON object keyed by camelCase field names, the same
//! shape as the summary dump. Any subset of fields may be present. Numbers
//! are accepted for text fields and kept as their decimal text.
//!
//! ```json
//! {
//!   "kidAge": 5,
//!   "kidDiagnosisInfo": "ASD",
//!   "educationalSetting": "Public School",
//!   "requestedServices": ["Speech Therapy"],
//!   "serviceFrequency": "Weekly",
//!   "parentName": "Jane Doe",
//!   "parentEmail": "jane@example.com",
//!   "parentContact": "123-456-7890"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::draft::Draft;
use crate::error::{IntakeError, IntakeResult};
use crate::fields::{FieldName, Step};
use crate::navigator::{StepNavigator, StepOutcome};
use crate::types::FieldValue;
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: BTreeMap<FieldName, FieldValue>,
}

/// How a replay of an answers file ended.
#[derive(Debug)]
pub enum ReplayOutcome {
    /// Every step passed; the navigator holds the completed record
    Completed(Box<StepNavigator>),
    /// The given step did not validate
    Blocked { step: Step, errors: FieldErrors },
}

impl Answers {
    /// Parse an answers document.
    pub fn from_json(json: &str) -> IntakeResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(object) = value else {
            return Err(IntakeError::Serialization(serde::de::Error::custom(
                "answers must be a JSON object",
            )));
        };

        let mut values = BTreeMap::new();
        for (key, raw) in object {
            let field: FieldName = key.parse()?;
            if let Some(value) = field_value(field, raw)? {
                values.insert(field, value);
            }
        }
        Ok(Self { values })
    }

    /// Read and parse an answers file.
    pub fn load(path: impl AsRef<Path>) -> IntakeResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The answers belonging to `step`, as a draft.
    pub fn draft_for(&self, step: Step) -> IntakeResult<Draft> {
        let mut draft = Draft::empty(step);
        for field in step.fields() {
            if let Some(value) = self.values.get(field) {
                draft.insert(*field, value.clone())?;
            }
        }
        Ok(draft)
    }

    /// Drive a fresh navigator through every step with these answers.
    ///
    /// Stops at the first step that fails validation.
    pub fn replay(&self) -> IntakeResult<ReplayOutcome> {
        let mut nav = StepNavigator::new();
        loop {
            let step = nav.current_step();
            let draft = self.draft_for(step)?;
            let outcome = if step.is_last() {
                nav.submit_final(&draft)?
            } else {
                nav.advance(&draft)?
            };

            match outcome {
                StepOutcome::Completed => return Ok(ReplayOutcome::Completed(Box::new(nav))),
                StepOutcome::Blocked(errors) => return Ok(ReplayOutcome::Blocked { step, errors }),
                StepOutcome::Moved(_) | StepOutcome::Held(_) => {}
            }
        }
    }
}

fn field_value(field: FieldName, raw: Value) -> IntakeResult<Option<FieldValue>> {
    let value = match raw {
        Value::Null => return Ok(None),
        Value::String(s) if !field.is_list() => FieldValue::Text(s),
        Value::Number(n) if !field.is_list() => FieldValue::Text(n.to_string()),
        Value::Array(items) if field.is_list() => {
            let items = items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(IntakeError::ValueType(field)),
                })
                .collect::<IntakeResult<Vec<_>>>()?;
            FieldValue::List(items)
        }
        _ => return Err(IntakeError::ValueType(field)),
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "kidAge": 5,
        "kidDiagnosisInfo": "ASD",
        "educationalSetting": "Public School",
        "requestedServices": ["Speech Therapy"],
        "serviceFrequency": "Weekly",
        "parentName": "Jane Doe",
        "parentEmail": "jane@example.com",
        "parentContact": "123-456-7890"
    }"#;

    #[test]
    fn numbers_become_text() {
        let answers = Answers::from_json(VALID).unwrap();
        assert_eq!(
            answers.get(FieldName::KidAge),
            Some(&FieldValue::Text("5".into()))
        );
        assert_eq!(answers.len(), 8);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Answers::from_json(r#"{"kid_age": "5"}"#).unwrap_err();
        assert!(matches!(err, IntakeError::UnknownField(ref k) if k == "kid_age"));
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        assert!(matches!(
            Answers::from_json(r#"{"requestedServices": "Speech Therapy"}"#),
            Err(IntakeError::ValueType(FieldName::RequestedServices))
        ));
        assert!(matches!(
            Answers::from_json(r#"{"requestedServices": [1]}"#),
            Err(IntakeError::ValueType(FieldName::RequestedServices))
        ));
        assert!(matches!(
            Answers::from_json(r#"["kidAge"]"#),
            Err(IntakeError::Serialization(_))
        ));
    }

    #[test]
    fn nulls_are_skipped() {
        let answers = Answers::from_json(r#"{"additionalComments": null}"#).unwrap();
        assert!(answers.is_empty());
    }

    #[test]
    fn drafts_split_by_step() {
        let answers = Answers::from_json(VALID).unwrap();
        let draft = answers.draft_for(Step::Services).unwrap();
        assert_eq!(draft.fields().count(), 2);
        assert_eq!(draft.text(FieldName::ServiceFrequency), "Weekly");
    }

    #[test]
    fn replay_completes_valid_answers() {
        let answers = Answers::from_json(VALID).unwrap();
        match answers.replay().unwrap() {
            ReplayOutcome::Completed(nav) => {
                assert!(nav.is_completed());
                assert_eq!(nav.record().parent_name, "Jane Doe");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn replay_stops_at_first_bad_step() {
        let answers = Answers::from_json(r#"{"kidAge": "-1"}"#).unwrap();
        match answers.replay().unwrap() {
            ReplayOutcome::Blocked { step, errors } => {
                assert_eq!(step, Step::ChildDetails);
                assert_eq!(errors.get(FieldName::KidAge), Some("Age cannot be negative."));
                assert!(errors.contains(FieldName::EducationalSetting));
            }
            other => panic!("expected blocked, got {:?}", other),
        }
    }

    #[test]
    fn load_reads_answers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, VALID).unwrap();

        let answers = Answers::load(&path).unwrap();
        assert_eq!(answers, Answers::from_json(VALID).unwrap());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Answers::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, IntakeError::Io(_)));
    }
}
