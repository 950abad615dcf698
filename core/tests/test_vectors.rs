//! Verify `Response::new` against the JSON test vectors in `test-vectors/`.
//!
//! Each case describes a raw response and the expected classification,
//! location and decoded body. Bodies are compared as parsed JSON to avoid
//! false negatives from formatting differences.

use rest_core::http;
use rest_core::{Response, RestError};

/// Build a raw response from a vector case.
fn raw_response(case: &serde_json::Value) -> http::Response<std::io::Cursor<Vec<u8>>> {
    let mut builder = http::Response::builder().status(case["status"].as_u64().unwrap() as u16);
    for h in case["headers"].as_array().unwrap() {
        let pair = h.as_array().unwrap();
        builder = builder.header(pair[0].as_str().unwrap(), pair[1].as_str().unwrap());
    }
    let body = case["body"].as_str().unwrap().as_bytes().to_vec();
    builder.body(std::io::Cursor::new(body)).unwrap()
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_success = case["expected_success"].as_bool().unwrap();

        let response = match Response::new(raw_response(case)) {
            Ok(r) => {
                assert!(expected_success, "{name}: expected failure");
                r
            }
            Err(err) => {
                assert!(!expected_success, "{name}: unexpected error {err}");
                assert_eq!(err.to_string(), case["expected_error"].as_str().unwrap(), "{name}: error");
                assert!(matches!(err, RestError::Status { .. }), "{name}: variant");
                err.into_response().unwrap()
            }
        };

        assert_eq!(response.is_success(), expected_success, "{name}: is_success");
        assert_eq!(response.status() as u64, case["status"].as_u64().unwrap(), "{name}: status");
        assert_eq!(response.body(), case["body"].as_str().unwrap().as_bytes(), "{name}: body");
        assert_eq!(
            response.location(),
            case["expected_location"].as_str().unwrap(),
            "{name}: location"
        );

        if let Some(expected) = case.get("expected_json") {
            let decoded: serde_json::Value = response.unmarshal().unwrap();
            assert_eq!(&decoded, expected, "{name}: decoded body");
        }
    }
}

#[test]
fn non_json_body_fails_to_unmarshal() {
    let res = http::Response::builder()
        .status(200)
        .body(std::io::Cursor::new(b"not json".to_vec()))
        .unwrap();
    let response = Response::new(res).unwrap();
    let err = response.unmarshal::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, RestError::Deserialization(_)));
    assert_eq!(response.body(), b"not json");
}
