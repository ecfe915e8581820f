use crate::Client;
use crate::client::client::error_message;

use std::time::Duration;

fn client(base_url: &str) -> Client {
    Client::new(base_url, "http://127.0.0.1:8000/", Duration::from_secs(10)).unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = client("http://localhost:5001/");
    assert_eq!(client.base_url, "http://localhost:5001");
    assert_eq!(client.intake_base_url, "http://127.0.0.1:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = client("http://localhost:5001");
    assert_eq!(client.base_url, "http://localhost:5001");
}

#[test]
fn test_from_config_uses_both_services() {
    let config = mt_config::ApiConfig::default();
    let client = Client::from_config(&config).unwrap();
    assert_eq!(client.base_url, config.base_url);
    assert_eq!(client.intake_base_url, config.intake_base_url);
}

#[test]
fn given_user_service_body_when_error_message_then_message_field() {
    let body = r#"{"message": "Role already set"}"#;
    assert_eq!(error_message(body).as_deref(), Some("Role already set"));
}

#[test]
fn given_intake_service_body_when_error_message_then_detail_field() {
    let body = r#"{"detail": "Invalid token"}"#;
    assert_eq!(error_message(body).as_deref(), Some("Invalid token"));
}

#[test]
fn given_nested_error_object_when_error_message_then_inner_message() {
    let body = r#"{"error": {"code": "LIMIT", "message": "Too many files"}}"#;
    assert_eq!(error_message(body).as_deref(), Some("Too many files"));
}

#[test]
fn given_non_json_body_when_error_message_then_none() {
    assert!(error_message("<html>Bad Gateway</html>").is_none());
    assert!(error_message("").is_none());
}
