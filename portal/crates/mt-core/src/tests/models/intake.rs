use crate::{IntakeForm, IntakeRecord, Sightseeing, SightseeingPref};

fn filled_form() -> IntakeForm {
    IntakeForm {
        full_name: "Asha Rao".into(),
        age: "42".into(),
        phone: "+91 98450 00000".into(),
        country: "India".into(),
        budget: "8200.50".into(),
        has_sightseeing: Sightseeing::Yes,
        sightseeing_days: "4".into(),
        sightseeing_prefs: vec![SightseeingPref::Temples, SightseeingPref::Museums],
        notes: "  ".into(),
    }
}

#[test]
fn given_sightseeing_no_when_to_submission_then_days_omitted_and_prefs_empty() {
    let mut form = filled_form();
    form.has_sightseeing = Sightseeing::No;

    let submission = form.to_submission("user_123").unwrap();
    let json = serde_json::to_value(&submission).unwrap();

    assert!(json.get("sightseeingDays").is_none());
    assert_eq!(json["sightseeingPrefs"], serde_json::json!([]));
    assert_eq!(json["hasSightseeing"], "no");
}

#[test]
fn given_sightseeing_no_with_invalid_days_when_to_submission_then_days_ignored() {
    let mut form = filled_form();
    form.has_sightseeing = Sightseeing::No;
    form.sightseeing_days = "not a number".into();

    assert!(form.to_submission("user_123").is_ok());
}

#[test]
fn given_sightseeing_yes_when_to_submission_then_days_and_prefs_sent() {
    let submission = filled_form().to_submission("user_123").unwrap();
    let json = serde_json::to_value(&submission).unwrap();

    assert_eq!(json["sightseeingDays"], 4);
    assert_eq!(json["sightseeingPrefs"], serde_json::json!(["temples", "museums"]));
    assert_eq!(json["pseudonym_id"], "user_123");
    assert_eq!(json["age"], 42);
    assert_eq!(json["budget"], 8200.5);
}

#[test]
fn given_blank_notes_when_to_submission_then_notes_null() {
    let submission = filled_form().to_submission("user_123").unwrap();
    let json = serde_json::to_value(&submission).unwrap();

    assert!(json["notes"].is_null());
}

#[test]
fn given_age_out_of_range_when_to_submission_then_validation_error_on_age() {
    let mut form = filled_form();
    form.age = "121".into();

    let err = form.to_submission("user_123").unwrap_err();
    assert_eq!(err.field(), Some("age"));
}

#[test]
fn given_sightseeing_days_over_limit_when_to_submission_then_error() {
    let mut form = filled_form();
    form.sightseeing_days = "31".into();

    let err = form.to_submission("user_123").unwrap_err();
    assert_eq!(err.field(), Some("sightseeingDays"));
}

#[test]
fn given_negative_budget_when_to_submission_then_error() {
    let mut form = filled_form();
    form.budget = "-1".into();

    let err = form.to_submission("user_123").unwrap_err();
    assert_eq!(err.field(), Some("budget"));
}

#[test]
fn given_blank_name_when_to_submission_then_error_and_input_kept() {
    let mut form = filled_form();
    form.full_name = "   ".into();

    assert!(form.to_submission("user_123").is_err());
    assert_eq!(form.phone, "+91 98450 00000");
}

#[test]
fn test_toggle_pref_adds_then_removes() {
    let mut form = IntakeForm::default();

    form.toggle_pref(SightseeingPref::Beaches);
    assert_eq!(form.sightseeing_prefs, vec![SightseeingPref::Beaches]);

    form.toggle_pref(SightseeingPref::Beaches);
    assert!(form.sightseeing_prefs.is_empty());
}

#[test]
fn given_stored_record_when_from_record_then_form_prefilled() {
    let json = r#"{
        "fullName": "Asha Rao",
        "age": 42,
        "budget": 5000,
        "hasSightseeing": "yes",
        "sightseeingDays": 3,
        "sightseeingPrefs": ["nature", "volcanoes"]
    }"#;
    let record: IntakeRecord = serde_json::from_str(json).unwrap();

    let form = IntakeForm::from_record(&record);

    assert_eq!(form.full_name, "Asha Rao");
    assert_eq!(form.age, "42");
    assert_eq!(form.budget, "5000");
    assert_eq!(form.has_sightseeing, Sightseeing::Yes);
    assert_eq!(form.sightseeing_days, "3");
    assert_eq!(form.sightseeing_prefs, vec![SightseeingPref::Nature]);
    assert_eq!(form.phone, "");
}

#[test]
fn test_reset_clears_form() {
    let mut form = filled_form();
    form.reset();
    assert_eq!(form, IntakeForm::default());
    assert_eq!(form.has_sightseeing, Sightseeing::No);
}
