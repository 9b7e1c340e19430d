//! URL query-string helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes OAuth by redirecting the browser back with
//! `token`, `username`, and `auth_method` query parameters; the login view
//! reads `register=true` and `from=`; the shop reads `success`/`canceled`.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded;

use crate::state::auth::{AuthMethod, Identity};

/// Decoded `key=value` pairs of a search string (leading `?` optional).
#[must_use]
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// First value for `key`, ignoring empty values.
#[must_use]
pub fn query_value(search: &str, key: &str) -> Option<String> {
    parse_query(search)
        .into_iter()
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(_, v)| v)
}

/// Identity carried by an OAuth callback URL, when both `token` and
/// `username` are present.
#[must_use]
pub fn oauth_callback_identity(search: &str) -> Option<Identity> {
    query_value(search, "token")?;
    let username = query_value(search, "username")?;
    let method = query_value(search, "auth_method");
    Some(Identity::new(username, AuthMethod::parse(method.as_deref())))
}

/// `?register=true` pre-selects the registration form.
#[must_use]
pub fn wants_register(search: &str) -> bool {
    query_value(search, "register").is_some_and(|v| v == "true")
}

/// `/login?from=<target>` with the target percent-encoded.
#[must_use]
pub fn login_path_with_target(target: &str) -> String {
    if target == "/" {
        return "/login".to_owned();
    }
    let query: String = form_urlencoded::Serializer::new(String::new()).append_pair("from", target).finish();
    format!("/login?{query}")
}

/// Percent-encode a single path/query component.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// What a page load does with the redirect target parked in session storage
/// before the OAuth round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParkedTarget {
    /// Not an OAuth return; leave storage alone.
    Keep,
    /// Callback parameters present; take the target and continue to it.
    Restore,
    /// Back on `/login` without callback parameters; the round trip failed.
    Discard,
}

#[must_use]
pub fn parked_target_action(path: &str, search: &str) -> ParkedTarget {
    if oauth_callback_identity(search).is_some() {
        ParkedTarget::Restore
    } else if path == "/login" {
        ParkedTarget::Discard
    } else {
        ParkedTarget::Keep
    }
}
