//! Pending post-login redirect target.
//!
//! SYSTEM CONTEXT
//! ==============
//! Captured by the route guard when it bounces an anonymous user to `/login`,
//! consumed exactly once by the login flow after success, then discarded.
//! Lives next to `AuthState` at the top of the tree.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Where login lands when nothing was captured.
pub const HOME_PATH: &str = "/";

/// Redirect target awaiting a successful login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingRedirect {
    target: Option<String>,
}

impl PendingRedirect {
    /// Remember `path` + `search` (search may be empty or start with `?`).
    pub fn capture(&mut self, path: &str, search: &str) {
        self.target = sanitize_target(&join_path_and_search(path, search));
    }

    /// Remember an already-joined target, e.g. from `?from=` or session storage.
    pub fn capture_target(&mut self, target: &str) {
        if let Some(target) = sanitize_target(target) {
            self.target = Some(target);
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Consume the target, falling back to `/`.
    pub fn take(&mut self) -> String {
        self.target.take().unwrap_or_else(|| HOME_PATH.to_owned())
    }
}

/// `"/transakcje"` + `"?page=2"` -> `"/transakcje?page=2"`.
#[must_use]
pub fn join_path_and_search(path: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { path.to_owned() } else { format!("{path}?{search}") }
}

/// Accept only same-origin absolute paths. Rejects relative paths,
/// protocol-relative `//host` and backslash tricks, and the login view
/// itself so login never redirects back to login.
#[must_use]
pub fn sanitize_target(raw: &str) -> Option<String> {
    let target = raw.trim();
    if !target.starts_with('/') || target.starts_with("//") || target.contains('\\') {
        return None;
    }
    let path = target.split(['?', '#']).next().unwrap_or_default();
    if path == "/login" {
        return None;
    }
    Some(target.to_owned())
}
