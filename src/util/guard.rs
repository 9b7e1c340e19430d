//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical rules, so the decision is a pure
//! function of `AuthState` and the route's access level. The `ProtectedRoute`
//! and `AdminRoute` components only act on the outcome.
//!
//! Rendering is gated on a confirmed identity: a cookie-derived identity is
//! unverified, so while it is the only evidence the guard keeps showing the
//! loading placeholder until the probe answers.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

/// Access level required by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

/// What the guard does for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Resolution still running; show the neutral placeholder.
    Loading,
    /// Anonymous; capture the current location and replace-navigate to login.
    RedirectToLogin,
    /// Authenticated but not an administrator; show the message, go home later.
    Denied,
    Render,
}

#[must_use]
pub fn guard_outcome(state: &AuthState, access: Access) -> GuardOutcome {
    if state.is_checking() {
        return GuardOutcome::Loading;
    }
    if !state.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    if !state.is_confirmed() {
        return GuardOutcome::Loading;
    }
    match access {
        Access::Authenticated => GuardOutcome::Render,
        Access::Admin if state.is_admin() => GuardOutcome::Render,
        // Login and OAuth responses carry no admin flag; wait for `/api/user`.
        Access::Admin if !state.is_network_confirmed() => GuardOutcome::Loading,
        Access::Admin => GuardOutcome::Denied,
    }
}

/// The admin guard needs `/api/user` to learn `is_admin` and no probe is running.
#[must_use]
pub fn needs_identity_refresh(state: &AuthState, access: Access) -> bool {
    access == Access::Admin && state.is_confirmed() && !state.is_network_confirmed() && !state.probe_in_flight
}

/// Whether a login redirect should remember the current page. Not after an
/// explicit logout: the next login may be a different user.
#[must_use]
pub fn remembers_target(state: &AuthState) -> bool {
    !state.signed_out
}
