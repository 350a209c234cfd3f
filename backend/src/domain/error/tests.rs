//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn serializes_code_in_snake_case() {
    let error = Error::not_found("no endpoint at /api/v1/meters");
    let value = serde_json::to_value(&error).expect("serialize error");
    assert_eq!(
        value,
        json!({"code": "not_found", "message": "no endpoint at /api/v1/meters"})
    );
}

#[rstest]
fn details_are_serialized_when_present() {
    let error = Error::invalid_request("bad date").with_details(json!({"field": "date"}));
    let value = serde_json::to_value(&error).expect("serialize error");
    assert_eq!(value["details"]["field"], "date");
}

#[rstest]
fn display_uses_the_message() {
    assert_eq!(Error::not_found("no such day").to_string(), "no such day");
}
