use super::*;
use base64ct::Base64UrlUnpadded;

fn token_with_payload(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl", Base64UrlUnpadded::encode_string(payload.as_bytes()))
}

const ALICE: &str = r#"{"token":"abc","user":{"username":"alice","auth_method":"google"}}"#;

// =============================================================
// read_cookie
// =============================================================

#[test]
fn read_cookie_finds_exact_name() {
    let raw = "theme=dark; session_data=abc.def.ghi; other=1";
    assert_eq!(read_cookie(raw, "session_data"), Some("abc.def.ghi"));
}

#[test]
fn read_cookie_does_not_match_name_suffix() {
    let raw = "old_session_data=x.y.z";
    assert_eq!(read_cookie(raw, "session_data"), None);
}

#[test]
fn read_cookie_missing_or_empty_is_none() {
    assert_eq!(read_cookie("", "session_data"), None);
    assert_eq!(read_cookie("session_data=", "session_data"), None);
}

#[test]
fn read_cookie_keeps_equals_inside_value() {
    assert_eq!(read_cookie("session_data=a=b", "session_data"), Some("a=b"));
}

// =============================================================
// decode_session_token
// =============================================================

#[test]
fn decode_valid_token_returns_user() {
    let user = decode_session_token(&token_with_payload(ALICE)).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.auth_method.as_deref(), Some("google"));
}

#[test]
fn decode_handles_url_safe_alphabet() {
    // '?' and '>' push the encoding into the '-' / '_' characters.
    let payload = r#"{"user":{"username":"??>>??","auth_method":"local"}}"#;
    let token = token_with_payload(payload);
    assert!(token.contains('-') || token.contains('_'));
    assert_eq!(decode_session_token(&token).unwrap().username, "??>>??");
}

#[test]
fn decode_rejects_wrong_segment_counts() {
    let payload = Base64UrlUnpadded::encode_string(ALICE.as_bytes());
    for token in [String::new(), payload.clone(), format!("a.{payload}"), format!("a.{payload}.b.c")] {
        assert_eq!(decode_session_token(&token), None, "token {token:?}");
    }
}

#[test]
fn decode_rejects_bad_base64() {
    assert_eq!(decode_session_token("a.!!!not-base64!!!.c"), None);
}

#[test]
fn decode_rejects_truncated_json() {
    let truncated = &ALICE[..ALICE.len() - 5];
    assert_eq!(decode_session_token(&token_with_payload(truncated)), None);
}

#[test]
fn decode_rejects_json_without_user() {
    assert_eq!(decode_session_token(&token_with_payload(r#"{"token":"abc"}"#)), None);
}

// =============================================================
// decode_session_cookie
// =============================================================

#[test]
fn decode_session_cookie_yields_identity() {
    let raw = format!("a=1; session_data={}", token_with_payload(ALICE));
    let identity = decode_session_cookie(&raw, "session_data").unwrap();
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.auth_method, AuthMethod::Google);
    assert!(!identity.is_admin);
}

#[test]
fn decode_session_cookie_absent_is_none() {
    assert_eq!(decode_session_cookie("a=1", "session_data"), None);
}

#[test]
fn expire_directive_sets_zero_max_age_on_root() {
    assert_eq!(expire_directive("session_data"), "session_data=; Max-Age=0; path=/");
}

#[test]
fn padding_is_added_to_multiple_of_four() {
    assert_eq!(to_padded_standard_alphabet("ab"), "ab==");
    assert_eq!(to_padded_standard_alphabet("abc"), "abc=");
    assert_eq!(to_padded_standard_alphabet("abcd"), "abcd");
    assert_eq!(to_padded_standard_alphabet("a-_b"), "a+/b");
}
