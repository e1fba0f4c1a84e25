//! Transport boundary behavior: what callers outside the process see.

mod common;

use common::{User, UserService};
use errs::to_status;

#[test]
fn test_hides_internal_error_message() {
    let service = UserService;
    let err = service
        .create_user(&User::named("Juanito valderrama"))
        .unwrap_err();

    let status = to_status(&err);
    assert_eq!(status.code(), tonic::Code::Internal);
    assert_eq!(status.message(), "Internal server error");
    assert!(!status.message().contains("INSERT"));
}

#[test]
fn test_includes_validation_message() {
    let service = UserService;
    let mut user = User::named("Juanito valderrama");
    user.age = 16;
    let err = service.validate(&user).unwrap_err();

    let status = to_status(&err);
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert!(status.message().contains("Age must be >= 18"));
}

#[test]
fn test_translation_is_idempotent() {
    let service = UserService;
    let err = service
        .create_user(&User::named("Juanito valderrama"))
        .unwrap_err();

    let first = to_status(&err);
    let second = to_status(&err);
    assert_eq!(first.code(), second.code());
    assert_eq!(first.message(), second.message());
}
