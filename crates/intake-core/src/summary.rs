//! Read-only rendering of a submitted record.

use crate::error::IntakeResult;
use crate::fields::FieldName;
use crate::types::{FieldValue, IntakeRecord};

/// Shown for the optional comments field when left blank.
pub const NO_VALUE: &str = "(none)";

/// One line of the summary listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
}

/// Label/value pairs for every field, in display order.
///
/// Lists are joined with `", "`; blank values show [`NO_VALUE`].
pub fn summary_entries(record: &IntakeRecord) -> Vec<SummaryEntry> {
    record
        .entries()
        .into_iter()
        .map(|(field, value)| SummaryEntry {
            field,
            label: field.label(),
            value: display_value(&value),
        })
        .collect()
}

fn display_value(value: &FieldValue) -> String {
    if value.is_blank() {
        NO_VALUE.to_string()
    } else {
        value.to_string().trim().to_string()
    }
}

/// The pretty-printed JSON dump of a record.
pub fn summary_json(record: &IntakeRecord) -> IntakeResult<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Plain-text listing, one `Label: value` per line.
pub fn summary_text(record: &IntakeRecord) -> String {
    summary_entries(record)
        .iter()
        .map(|entry| format!("{}: {}", entry.label, entry.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IntakeRecord {
        IntakeRecord {
            kid_age: "5".into(),
            kid_diagnosis_info: "ASD".into(),
            educational_setting: "Public School".into(),
            requested_services: vec!["Speech Therapy".into(), "Physical Therapy".into()],
            service_frequency: "Weekly".into(),
            additional_comments: String::new(),
            parent_name: "Jane Doe".into(),
            parent_email: "jane@example.com".into(),
            parent_contact: "123-456-7890".into(),
        }
    }

    #[test]
    fn entries_follow_display_order() {
        let entries = summary_entries(&sample());
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].label, "Child's Age");
        assert_eq!(entries[3].value, "Speech Therapy, Physical Therapy");
        assert_eq!(entries[5].value, NO_VALUE);
        assert_eq!(entries[8].field, FieldName::ParentContact);
    }

    #[test]
    fn json_dump_uses_field_keys() {
        let json = summary_json(&sample()).unwrap();
        assert!(json.contains("\"parentEmail\": \"jane@example.com\""));
        assert!(json.contains("\"requestedServices\": ["));
        let parsed: IntakeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn text_listing() {
        let text = summary_text(&sample());
        assert!(text.starts_with("Child's Age: 5\n"));
        assert!(text.contains("Additional Comments: (none)"));
    }
}
