//! Session resolution: decides who the browser user is on load.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once from the root `App` when it mounts, and again (as a refresh)
//! when the admin guard needs the `is_admin` flag. Sources, in order:
//!
//! 1. OAuth callback query parameters (`token` + `username`): adopted as a
//!    completed login, no probe.
//! 2. The session cookie: decoded and adopted optimistically so the navbar
//!    can paint a name, but never trusted by the guards.
//! 3. `GET /api/user`: canonical. Success overwrites whatever the cookie said;
//!    any failure degrades to anonymous.
//!
//! ERROR HANDLING
//! ==============
//! Resolution never fails outward. Transport, status, decode, and timeout
//! errors are logged and turn into the anonymous state.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::cell::RefCell;

use leptos::prelude::*;

use super::api::AuthApi;
use crate::state::auth::{AuthMethod, AuthState, Authority, Identity, ProbeTicket};
use crate::util::cookie::{CookieStore, decode_session_cookie};
use crate::util::lifetime::Liveness;
use crate::util::query::oauth_callback_identity;

/// Where auth state lives. `RwSignal<AuthState>` in the app; `RefCell` in tests.
pub trait AuthStore {
    fn snapshot(&self) -> AuthState;

    /// Apply `f` to the state. `None` if the store has been disposed.
    fn modify<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R>;
}

impl AuthStore for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl AuthStore for RefCell<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// How a resolver run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Identity taken from OAuth callback parameters without a probe.
    OAuthCallback(Identity),
    /// `/api/user` confirmed the session.
    Authenticated,
    /// No valid session.
    Anonymous,
    /// Another probe was already outstanding; nothing was requested.
    Skipped,
    /// The driving component was torn down before the probe answered.
    Discarded,
}

/// Full load-time resolution for the current `search` string.
pub async fn resolve_session<A, C, S>(
    api: &A,
    cookies: &C,
    store: &S,
    cookie_name: &str,
    search: &str,
    alive: &Liveness,
) -> Resolution
where
    A: AuthApi,
    C: CookieStore,
    S: AuthStore,
{
    if let Some(identity) = oauth_callback_identity(search) {
        log::info!("session established from OAuth callback ({})", identity.auth_method);
        store.modify(|state| state.login_succeeded(identity.clone(), Authority::Session));
        return Resolution::OAuthCallback(identity);
    }

    let Some(ticket) = store.modify(AuthState::begin_probe).flatten() else {
        log::debug!("identity probe already in flight; skipping");
        return Resolution::Skipped;
    };

    if let Some(identity) = decode_session_cookie(&cookies.raw(), cookie_name) {
        log::debug!("adopting provisional identity from session cookie");
        store.modify(|state| state.adopt_provisional(identity));
    }

    probe(api, cookies, store, cookie_name, ticket, alive).await
}

/// Re-ask `/api/user` without looking at the cookie or URL, e.g. to learn
/// `is_admin` after a login whose response did not carry it.
pub async fn refresh_identity<A, C, S>(api: &A, cookies: &C, store: &S, cookie_name: &str, alive: &Liveness) -> Resolution
where
    A: AuthApi,
    C: CookieStore,
    S: AuthStore,
{
    let Some(ticket) = store.modify(AuthState::begin_probe).flatten() else {
        return Resolution::Skipped;
    };
    probe(api, cookies, store, cookie_name, ticket, alive).await
}

async fn probe<A, C, S>(
    api: &A,
    cookies: &C,
    store: &S,
    cookie_name: &str,
    ticket: ProbeTicket,
    alive: &Liveness,
) -> Resolution
where
    A: AuthApi,
    C: CookieStore,
    S: AuthStore,
{
    let result = api.fetch_user().await;
    if !alive.is_alive() {
        log::debug!("identity probe answered after teardown; result discarded");
        store.modify(AuthState::abandon_probe);
        return Resolution::Discarded;
    }

    match result {
        Ok(user) => {
            let identity = user.into_identity(AuthMethod::Local);
            store.modify(|state| state.resolved(ticket, Some(identity)));
            Resolution::Authenticated
        }
        Err(e) => {
            log::warn!("identity probe failed: {e}");
            if e.status().is_some() {
                cookies.clear(cookie_name);
            }
            store.modify(|state| state.resolved(ticket, None));
            Resolution::Anonymous
        }
    }
}
