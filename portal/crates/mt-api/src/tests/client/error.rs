use crate::{ClientError, ErrorKind};

use mt_core::CoreError;

#[test]
fn given_api_error_when_kind_then_business_and_message_verbatim() {
    let err = ClientError::api_error(400, "File count exceeded");
    assert_eq!(err.kind(), ErrorKind::Business);
    assert_eq!(err.user_message(), "File count exceeded");
}

#[test]
fn given_unauthorized_when_kind_then_authentication() {
    let err = ClientError::unauthorized(401, "jwt expired");
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(!err.is_timeout());
}

#[test]
fn given_core_error_when_converted_then_validation_kind() {
    let err: ClientError = CoreError::too_many_files(5).into();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.user_message(), "You can upload a maximum of 5 files.");
}

#[test]
fn given_json_error_when_converted_then_transport_kind() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClientError = json_err.into();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
