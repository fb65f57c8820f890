//! Read-only confirmation view shown once the form is submitted.

use dioxus::prelude::*;
use intake_core::{summary_entries, summary_json, IntakeRecord};

#[component]
pub fn SubmissionSummary(record: IntakeRecord, submitted_at: Option<String>) -> Element {
    let entries = summary_entries(&record);
    let dump = summary_json(&record).unwrap_or_else(|e| {
        tracing::error!("Failed to render summary JSON: {}", e);
        String::new()
    });

    rsx! {
        div { class: "summary-card",
            h2 { class: "summary-title", "Thank You! Your Request Has Been Submitted." }
            p { class: "summary-text",
                "We have received your information and will be in touch shortly."
            }
            if let Some(at) = submitted_at {
                p { class: "summary-meta", "Submitted {at}" }
            }
            div { class: "summary-body",
                h3 { class: "summary-heading", "Summary of Your Submission:" }
                dl { class: "summary-list",
                    for entry in entries {
                        div { key: "{entry.field}", class: "summary-row",
                            dt { "{entry.label}" }
                            dd { "{entry.value}" }
                        }
                    }
                }
                if !dump.is_empty() {
                    pre { class: "summary-json", "{dump}" }
                }
            }
        }
    }
}
