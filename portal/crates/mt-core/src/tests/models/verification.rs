use crate::{VerificationForm, VisaStatus};

fn filled_form() -> VerificationForm {
    VerificationForm {
        name: "Asha Rao".into(),
        age: "42".into(),
        budget: "$5000 USD".into(),
        availability_days: "14".into(),
        visa_status: VisaStatus::NotIndianCitizen,
    }
}

#[test]
fn given_complete_form_when_to_request_then_camel_case_payload() {
    let request = filled_form().to_request().unwrap();
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["name"], "Asha Rao");
    assert_eq!(json["age"], 42);
    assert_eq!(json["budget"], "$5000 USD");
    assert_eq!(json["availabilityDays"], 14);
    assert_eq!(json["visaStatus"], "not_indian_citizen");
}

#[test]
fn given_missing_field_when_to_request_then_fill_all_fields_error() {
    let mut form = filled_form();
    form.availability_days = String::new();

    let err = form.to_request().unwrap_err();
    assert_eq!(err.inline_message(), "Please fill in all fields.");
}

#[test]
fn given_zero_age_when_to_request_then_error_on_age() {
    let mut form = filled_form();
    form.age = "0".into();

    let err = form.to_request().unwrap_err();
    assert_eq!(err.field(), Some("age"));
}

#[test]
fn test_prefilled_uses_provider_name_and_default_visa() {
    let form = VerificationForm::prefilled(Some("Asha Rao"));
    assert_eq!(form.name, "Asha Rao");
    assert_eq!(form.visa_status, VisaStatus::IndianCitizen);
}
