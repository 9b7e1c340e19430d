use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_points_at_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "http://localhost:5000");
    assert_eq!(config.session_cookie, "session_data");
    assert_eq!(config.admin_redirect_delay, Duration::from_secs(3));
}

#[test]
fn from_values_without_overrides_matches_default() {
    assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_values_trims_trailing_slash_from_base() {
    let config = ClientConfig::from_values(Some("https://api.example.com/"), None);
    assert_eq!(config.api_base, "https://api.example.com");
}

#[test]
fn from_values_ignores_blank_base() {
    let config = ClientConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_values_parses_log_level() {
    let config = ClientConfig::from_values(None, Some("debug"));
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn from_values_keeps_default_level_on_garbage() {
    let config = ClientConfig::from_values(None, Some("chatty"));
    assert_eq!(config.log_level, log::Level::Info);
}

// =============================================================
// endpoint
// =============================================================

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint("/api/user"), "http://localhost:5000/api/user");
    assert_eq!(config.endpoint("api/user"), "http://localhost:5000/api/user");
}

#[test]
fn endpoint_handles_base_with_trailing_slash() {
    let config = ClientConfig { api_base: "http://h:1/".to_owned(), ..ClientConfig::default() };
    assert_eq!(config.endpoint("/api/logout"), "http://h:1/api/logout");
}
