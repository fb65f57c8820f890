//! Step-scoped draft values.
//!
//! A [`Draft`] holds the in-progress answers of one step before they are
//! merged into the accumulated [`IntakeRecord`]. It only accepts fields owned
//! by its step, so a merge can never touch another panel's answers.

use std::collections::BTreeMap;

use crate::error::{IntakeError, IntakeResult};
use crate::fields::{FieldName, Step};
use crate::types::{FieldValue, IntakeRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    step: Step,
    values: BTreeMap<FieldName, FieldValue>,
}

impl Draft {
    /// An empty draft for `step`. Fields not set are validated as empty.
    pub fn empty(step: Step) -> Self {
        Self {
            step,
            values: BTreeMap::new(),
        }
    }

    /// A draft for `step` pre-filled with that step's current answers.
    pub fn for_step(step: Step, record: &IntakeRecord) -> Self {
        let values = step
            .fields()
            .iter()
            .map(|field| (*field, record.get(*field)))
            .collect();
        Self { step, values }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Set a field, checking it belongs to this draft's step and has the
    /// right shape.
    pub fn insert(&mut self, field: FieldName, value: FieldValue) -> IntakeResult<()> {
        self.ensure_owned(field)?;
        if field.is_list() != matches!(value, FieldValue::List(_)) {
            return Err(IntakeError::ValueType(field));
        }
        self.values.insert(field, value);
        Ok(())
    }

    pub fn set_text(&mut self, field: FieldName, text: impl Into<String>) -> IntakeResult<()> {
        self.insert(field, FieldValue::Text(text.into()))
    }

    pub fn set_list(&mut self, field: FieldName, items: Vec<String>) -> IntakeResult<()> {
        self.insert(field, FieldValue::List(items))
    }

    /// Flip one option of a multi-select field on or off.
    ///
    /// Returns whether the option is selected afterwards.
    pub fn toggle_option(&mut self, field: FieldName, option: &str) -> IntakeResult<bool> {
        self.ensure_owned(field)?;
        let entry = self
            .values
            .entry(field)
            .or_insert_with(|| FieldValue::empty_for(field));
        let FieldValue::List(items) = entry else {
            return Err(IntakeError::ValueType(field));
        };
        if let Some(pos) = items.iter().position(|item| item == option) {
            items.remove(pos);
            Ok(false)
        } else {
            items.push(option.to_string());
            Ok(true)
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Text value of a field, empty when unset or a list.
    pub fn text(&self, field: FieldName) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// List value of a field, empty when unset or text.
    pub fn list(&self, field: FieldName) -> &[String] {
        self.get(field).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    /// Fields present in the draft, in display order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.values.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow-overwrite `record` with every field present in this draft.
    ///
    /// Fields the draft does not carry are left untouched.
    pub fn merge_into(&self, record: &mut IntakeRecord) -> IntakeResult<()> {
        for (field, value) in &self.values {
            record.set(*field, value.clone())?;
        }
        Ok(())
    }

    fn ensure_owned(&self, field: FieldName) -> IntakeResult<()> {
        if field.step() == self.step {
            Ok(())
        } else {
            Err(IntakeError::ForeignField {
                field,
                step: self.step,
            })
        }
    }
}
