//! End-to-end flows through the step navigator
//!
//! These tests drive the navigator the way the desktop view does: seed a
//! draft, edit it, press Continue/Previous, and finally submit.

use intake_core::{
    summary_entries, Draft, FieldName, IntakeError, IntakeRecord, Step, StepNavigator,
    StepOutcome,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn fill_child(nav: &StepNavigator, age: &str) -> Draft {
    let mut draft = nav.draft();
    draft.set_text(FieldName::KidAge, age).unwrap();
    draft.set_text(FieldName::KidDiagnosisInfo, "ASD").unwrap();
    draft
        .set_text(FieldName::EducationalSetting, "Public School")
        .unwrap();
    draft
}

fn fill_services(nav: &StepNavigator, services: &[&str]) -> Draft {
    let mut draft = nav.draft();
    draft
        .set_list(
            FieldName::RequestedServices,
            services.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
    draft.set_text(FieldName::ServiceFrequency, "Weekly").unwrap();
    draft
}

fn fill_guardian(nav: &StepNavigator, email: &str) -> Draft {
    let mut draft = nav.draft();
    draft.set_text(FieldName::ParentName, "Jane Doe").unwrap();
    draft.set_text(FieldName::ParentEmail, email).unwrap();
    draft.set_text(FieldName::ParentContact, "123-456-7890").unwrap();
    draft
}

fn expected_record() -> IntakeRecord {
    IntakeRecord {
        kid_age: "5".into(),
        kid_diagnosis_info: "ASD".into(),
        educational_setting: "Public School".into(),
        requested_services: vec!["Speech Therapy".into()],
        service_frequency: "Weekly".into(),
        additional_comments: String::new(),
        parent_name: "Jane Doe".into(),
        parent_email: "jane@example.com".into(),
        parent_contact: "123-456-7890".into(),
    }
}

// ============================================================================
// Full Flow
// ============================================================================

#[test]
fn test_full_flow_yields_exact_record() {
    let mut nav = StepNavigator::new();

    let draft = fill_child(&nav, "5");
    assert_eq!(nav.advance(&draft).unwrap(), StepOutcome::Moved(Step::Services));

    let draft = fill_services(&nav, &["Speech Therapy"]);
    assert_eq!(nav.advance(&draft).unwrap(), StepOutcome::Moved(Step::Guardian));

    let draft = fill_guardian(&nav, "jane@example.com");
    assert_eq!(nav.submit_final(&draft).unwrap(), StepOutcome::Completed);

    assert!(nav.is_completed());
    assert_eq!(nav.completed_record(), Some(&expected_record()));

    let entries = summary_entries(nav.record());
    assert_eq!(entries.len(), 9);
    assert!(entries
        .iter()
        .any(|e| e.field == FieldName::RequestedServices && e.value == "Speech Therapy"));
}

// ============================================================================
// Blocking
// ============================================================================

#[test]
fn test_empty_steps_block_without_merge() {
    let mut nav = StepNavigator::new();

    for step in Step::all() {
        assert_eq!(nav.current_step(), *step);
        let before = nav.record().clone();

        let blocked = nav.advance(&Draft::empty(*step)).unwrap();
        match blocked {
            StepOutcome::Blocked(errors) => {
                assert_eq!(errors.len(), step.validated_fields().len());
            }
            other => panic!("{} should block, got {:?}", step, other),
        }
        assert_eq!(nav.current_step(), *step);
        assert_eq!(nav.record(), &before);

        let draft = match step {
            Step::ChildDetails => fill_child(&nav, "5"),
            Step::Services => fill_services(&nav, &["Speech Therapy"]),
            Step::Guardian => break,
        };
        assert!(nav.advance(&draft).unwrap().is_accepted());
    }
}

#[test]
fn test_one_bad_field_blocks_the_whole_step() {
    let mut nav = StepNavigator::new();
    let mut draft = fill_child(&nav, "5");
    draft.set_text(FieldName::KidDiagnosisInfo, "").unwrap();

    let outcome = nav.advance(&draft).unwrap();
    assert!(!outcome.is_accepted());
    // The valid age in the same draft must not leak into the record.
    assert_eq!(nav.record().kid_age, "");
    assert_eq!(
        nav.errors().get(FieldName::KidDiagnosisInfo),
        Some("A diagnosis or reason for services is required.")
    );
}

#[test]
fn test_age_boundaries() {
    let mut nav = StepNavigator::new();
    let rejected = nav.advance(&fill_child(&nav, "-1")).unwrap();
    assert!(!rejected.is_accepted());

    let accepted = nav.advance(&fill_child(&nav, "0")).unwrap();
    assert_eq!(accepted, StepOutcome::Moved(Step::Services));
}

#[test]
fn test_service_selection_boundaries() {
    let mut nav = StepNavigator::new();
    nav.advance(&fill_child(&nav, "5")).unwrap();

    let none = nav.advance(&fill_services(&nav, &[])).unwrap();
    match none {
        StepOutcome::Blocked(errors) => assert_eq!(
            errors.get(FieldName::RequestedServices),
            Some("At least one service must be selected.")
        ),
        other => panic!("expected blocked, got {:?}", other),
    }

    let one = nav.advance(&fill_services(&nav, &["Occupational Therapy"])).unwrap();
    assert_eq!(one, StepOutcome::Moved(Step::Guardian));
}

#[test]
fn test_email_boundaries() {
    let mut nav = StepNavigator::new();
    nav.advance(&fill_child(&nav, "5")).unwrap();
    nav.advance(&fill_services(&nav, &["Speech Therapy"])).unwrap();

    let rejected = nav.submit_final(&fill_guardian(&nav, "not-an-email")).unwrap();
    assert!(!rejected.is_accepted());
    assert!(!nav.is_completed());

    let accepted = nav.submit_final(&fill_guardian(&nav, "a@b.co")).unwrap();
    assert_eq!(accepted, StepOutcome::Completed);
}

#[test]
fn test_padded_values_are_validated_as_stored() {
    let mut nav = StepNavigator::new();

    let padded_age = fill_child(&nav, " 5 ");
    match nav.advance(&padded_age).unwrap() {
        StepOutcome::Blocked(errors) => {
            assert_eq!(errors.get(FieldName::KidAge), Some("Age must be a number."));
        }
        other => panic!("expected padded age to block, got {:?}", other),
    }
    assert_eq!(nav.record().kid_age, "");

    nav.advance(&fill_child(&nav, "5")).unwrap();
    nav.advance(&fill_services(&nav, &["Speech Therapy"])).unwrap();

    let padded_email = fill_guardian(&nav, " a@b.co ");
    match nav.submit_final(&padded_email).unwrap() {
        StepOutcome::Blocked(errors) => {
            assert_eq!(
                errors.get(FieldName::ParentEmail),
                Some("Invalid email address.")
            );
        }
        other => panic!("expected padded email to block, got {:?}", other),
    }
    assert!(!nav.is_completed());
    assert_eq!(nav.record().parent_email, "");

    // Spaces are part of the phone shape, so a padded number is stored as typed.
    let mut padded_phone = fill_guardian(&nav, "a@b.co");
    padded_phone
        .set_text(FieldName::ParentContact, " 123-456-7890 ")
        .unwrap();
    assert_eq!(nav.submit_final(&padded_phone).unwrap(), StepOutcome::Completed);
    assert_eq!(nav.record().parent_email, "a@b.co");
    assert_eq!(nav.record().parent_contact, " 123-456-7890 ");
}

#[test]
fn test_malformed_contact_blocks_submit() {
    let mut nav = StepNavigator::new();
    nav.advance(&fill_child(&nav, "5")).unwrap();
    nav.advance(&fill_services(&nav, &["Speech Therapy"])).unwrap();
    let before = nav.record().clone();

    let mut draft = fill_guardian(&nav, "jane@example.com");
    draft.set_text(FieldName::ParentContact, "call me").unwrap();

    match nav.submit_final(&draft).unwrap() {
        StepOutcome::Blocked(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldName::ParentContact),
                Some("Invalid phone number format.")
            );
        }
        other => panic!("expected blocked submit, got {:?}", other),
    }
    assert!(!nav.is_completed());
    assert_eq!(nav.current_step(), Step::Guardian);
    assert_eq!(nav.record(), &before);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_back_and_forth_preserves_answers() {
    let mut nav = StepNavigator::new();
    nav.advance(&fill_child(&nav, "5")).unwrap();

    let mut services = fill_services(&nav, &["Speech Therapy", "Special Education"]);
    services
        .set_text(FieldName::AdditionalComments, "Prefers mornings")
        .unwrap();
    nav.advance(&services).unwrap();
    assert_eq!(nav.current_step(), Step::Guardian);

    assert_eq!(nav.retreat().unwrap(), Step::Services);
    let reseeded = nav.draft();
    assert_eq!(
        reseeded.list(FieldName::RequestedServices),
        &["Speech Therapy".to_string(), "Special Education".to_string()]
    );
    assert_eq!(reseeded.text(FieldName::AdditionalComments), "Prefers mornings");

    assert_eq!(nav.retreat().unwrap(), Step::ChildDetails);
    assert_eq!(nav.retreat().unwrap(), Step::ChildDetails);
    assert_eq!(nav.draft().text(FieldName::KidAge), "5");

    // Re-submit untouched drafts all the way forward.
    nav.advance(&nav.draft()).unwrap();
    nav.advance(&nav.draft()).unwrap();
    assert_eq!(nav.current_step(), Step::Guardian);
    assert_eq!(nav.record().additional_comments, "Prefers mornings");
    assert_eq!(nav.record().kid_age, "5");
}

#[test]
fn test_editing_an_earlier_step_overwrites_only_that_step() {
    let mut nav = StepNavigator::new();
    nav.advance(&fill_child(&nav, "5")).unwrap();
    nav.advance(&fill_services(&nav, &["Speech Therapy"])).unwrap();

    nav.retreat().unwrap();
    nav.retreat().unwrap();
    let mut draft = nav.draft();
    draft.set_text(FieldName::KidAge, "6").unwrap();
    nav.advance(&draft).unwrap();

    assert_eq!(nav.record().kid_age, "6");
    assert_eq!(nav.record().requested_services, vec!["Speech Therapy".to_string()]);
    assert_eq!(nav.current_step(), Step::Services);
}

#[test]
fn test_completed_form_is_frozen() {
    let mut nav = StepNavigator::new();
    nav.advance(&fill_child(&nav, "5")).unwrap();
    nav.advance(&fill_services(&nav, &["Speech Therapy"])).unwrap();
    nav.submit_final(&fill_guardian(&nav, "jane@example.com"))
        .unwrap();

    let draft = nav.draft();
    assert!(matches!(nav.advance(&draft), Err(IntakeError::AlreadyCompleted)));
    assert!(matches!(nav.retreat(), Err(IntakeError::AlreadyCompleted)));
    assert_eq!(nav.record(), &expected_record());
}
