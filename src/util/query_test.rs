use super::*;

// =============================================================
// parse_query / query_value
// =============================================================

#[test]
fn parse_query_decodes_pairs() {
    let pairs = parse_query("?a=1&b=hello%20world&c=x+y");
    assert_eq!(
        pairs,
        vec![
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "hello world".to_owned()),
            ("c".to_owned(), "x y".to_owned()),
        ]
    );
}

#[test]
fn query_value_ignores_empty() {
    assert_eq!(query_value("?token=&username=alice", "token"), None);
    assert_eq!(query_value("?token=&username=alice", "username"), Some("alice".to_owned()));
}

#[test]
fn query_value_missing_key() {
    assert_eq!(query_value("", "token"), None);
}

// =============================================================
// OAuth callback
// =============================================================

#[test]
fn oauth_callback_with_google_method() {
    let identity = oauth_callback_identity("?token=t0k&username=alice&auth_method=google").unwrap();
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.auth_method, AuthMethod::Google);
    assert!(!identity.is_admin);
}

#[test]
fn oauth_callback_without_method_is_local() {
    let identity = oauth_callback_identity("token=t0k&username=bob").unwrap();
    assert_eq!(identity.auth_method, AuthMethod::Local);
}

#[test]
fn oauth_callback_requires_token_and_username() {
    assert!(oauth_callback_identity("?username=alice").is_none());
    assert!(oauth_callback_identity("?token=t0k").is_none());
}

#[test]
fn register_flag_only_for_true() {
    assert!(wants_register("?register=true"));
    assert!(!wants_register("?register=1"));
    assert!(!wants_register(""));
}

// =============================================================
// Login path
// =============================================================

#[test]
fn login_path_encodes_target() {
    assert_eq!(login_path_with_target("/transakcje"), "/login?from=%2Ftransakcje");
    assert_eq!(login_path_with_target("/sklep?success=true"), "/login?from=%2Fsklep%3Fsuccess%3Dtrue");
}

#[test]
fn login_path_for_home_has_no_query() {
    assert_eq!(login_path_with_target("/"), "/login");
}

#[test]
fn login_target_round_trips_through_query() {
    let path = login_path_with_target("/transakcje?page=2");
    let search = path.trim_start_matches("/login");
    assert_eq!(query_value(search, "from"), Some("/transakcje?page=2".to_owned()));
}

#[test]
fn encode_component_escapes_spaces() {
    assert_eq!(encode_component("Gamingowy Kubek"), "Gamingowy+Kubek");
}

// =============================================================
// Parked OAuth target
// =============================================================

#[test]
fn callback_restores_parked_target() {
    assert_eq!(parked_target_action("/", "?token=t&username=alice"), ParkedTarget::Restore);
    assert_eq!(parked_target_action("/login", "?token=t&username=alice"), ParkedTarget::Restore);
}

#[test]
fn login_without_callback_discards_parked_target() {
    assert_eq!(parked_target_action("/login", ""), ParkedTarget::Discard);
    assert_eq!(parked_target_action("/login", "?error=access_denied"), ParkedTarget::Discard);
}

#[test]
fn other_pages_keep_parked_target() {
    assert_eq!(parked_target_action("/sklep", "?success=true"), ParkedTarget::Keep);
    assert_eq!(parked_target_action("/", ""), ParkedTarget::Keep);
}
