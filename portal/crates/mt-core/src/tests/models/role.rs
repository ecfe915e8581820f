use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Unset.as_str(), "unset");
    assert_eq!(Role::Patient.as_str(), "patient");
    assert_eq!(Role::Doctor.as_str(), "doctor");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("patient").unwrap(), Role::Patient);
    assert_eq!(Role::from_str("doctor").unwrap(), Role::Doctor);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("user").unwrap(), Role::Unset);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_default_is_unset() {
    assert_eq!(Role::default(), Role::Unset);
    assert!(!Role::default().is_set());
}

#[test]
fn given_legacy_placeholders_when_decoding_wire_role_then_unset() {
    assert_eq!(Role::from_wire(Some("user")), Role::Unset);
    assert_eq!(Role::from_wire(Some("")), Role::Unset);
    assert_eq!(Role::from_wire(Some("unset")), Role::Unset);
    assert_eq!(Role::from_wire(None), Role::Unset);
}

#[test]
fn given_null_or_unknown_json_role_when_deserialize_then_unset() {
    let null_role: Role = serde_json::from_str("null").unwrap();
    let unknown: Role = serde_json::from_str("\"superuser\"").unwrap();
    let patient: Role = serde_json::from_str("\"patient\"").unwrap();

    assert_eq!(null_role, Role::Unset);
    assert_eq!(unknown, Role::Unset);
    assert_eq!(patient, Role::Patient);
}

#[test]
fn test_role_is_selectable() {
    assert!(Role::Patient.is_selectable());
    assert!(Role::Doctor.is_selectable());
    assert!(!Role::Admin.is_selectable());
    assert!(!Role::Unset.is_selectable());
}
