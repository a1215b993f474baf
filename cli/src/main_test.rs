use super::*;
use reqwest::StatusCode;

#[test]
fn decode_response_parses_json_success() {
    let value = decode_response(StatusCode::OK, r#"{"ok":true}"#).expect("json");
    assert_eq!(value["ok"], true);
}

#[test]
fn decode_response_rejects_non_json_success() {
    let err = decode_response(StatusCode::OK, "<html>proxy login</html>").expect_err("not json");
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn decode_response_keeps_error_body() {
    let body = r#"{"code":"E_NOT_FOUND","message":"not found"}"#;
    let err = decode_response(StatusCode::NOT_FOUND, body).expect_err("404");
    assert!(matches!(err, CliError::ServerError { status: 404, ref message } if message == body));

    let err = decode_response(StatusCode::BAD_GATEWAY, "upstream down\n").expect_err("502");
    assert!(matches!(err, CliError::ServerError { status: 502, ref message } if message == "upstream down"));
}
