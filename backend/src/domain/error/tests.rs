//! Tests for the error payload formatting and trace propagation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("nope"), ErrorCode::Unauthorized)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("dupe"), ErrorCode::Conflict)]
#[case(Error::upstream("store down"), ErrorCode::UpstreamFailure)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::conflict("dupe") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_to_camel_case_and_omits_empty_fields(base_error: Error) {
    let value = serde_json::to_value(&base_error).expect("serialise error");
    assert_eq!(value, json!({ "code": "invalid_request", "message": "bad" }));

    let decorated = base_error
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "missing_fields": ["age"] }));
    let value = serde_json::to_value(&decorated).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "traceId": TRACE_ID,
            "details": { "missing_fields": ["age"] },
        })
    );
}

#[rstest]
fn deserialising_rejects_blank_messages() {
    let result: Result<Error, _> =
        serde_json::from_value(json!({ "code": "conflict", "message": "  " }));
    assert!(result.is_err());
}

#[rstest]
fn deserialising_accepts_snake_case_trace_id_alias() {
    let error: Error = serde_json::from_value(json!({
        "code": "upstream_failure",
        "message": "store down",
        "trace_id": TRACE_ID,
    }))
    .expect("error payload");
    assert_eq!(error.code(), ErrorCode::UpstreamFailure);
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}
