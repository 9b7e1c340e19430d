//! Session mutators: login, register, OAuth redirect, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow changes server-side session state and then pushes the result
//! into the shared `AuthState` through the same transitions the resolver
//! uses, so guards re-evaluate without a page reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::api::{AuthApi, HttpApi, OAuthProvider};
use super::resolver::AuthStore;
use super::types::{LoginRequest, RegisterRequest};
use crate::error::SessionError;
use crate::state::auth::{AuthMethod, Authority, Identity};
use crate::util::cookie::CookieStore;

/// Shown when login fails without a server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Nieprawidłowe dane logowania";

/// Shown when registration fails without a server message.
pub const REGISTER_FAILED_MESSAGE: &str = "Nie udało się zarejestrować";

/// Registration form as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Local, pre-network check of the registration form.
///
/// # Errors
///
/// Returns [`SessionError::PasswordMismatch`] when the two passwords differ.
pub fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, SessionError> {
    if form.password != form.confirm_password {
        return Err(SessionError::PasswordMismatch);
    }
    Ok(RegisterRequest {
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

/// Submit credentials; on success the identity becomes the session identity.
///
/// # Errors
///
/// Returns the backend failure; `AuthState` is left untouched.
pub async fn login<A, S>(api: &A, store: &S, request: &LoginRequest) -> Result<Identity, SessionError>
where
    A: AuthApi,
    S: AuthStore,
{
    let user = api.login(request).await.inspect_err(|e| log::info!("login rejected: {e}"))?;
    let identity = user.into_identity(AuthMethod::Local);
    store.modify(|state| state.login_succeeded(identity.clone(), Authority::Session));
    Ok(identity)
}

/// Validate, register, and treat success as an implicit local login.
///
/// # Errors
///
/// Returns [`SessionError::PasswordMismatch`] without any request when the
/// passwords differ, or the backend failure.
pub async fn register<A, S>(api: &A, store: &S, form: &RegisterForm) -> Result<Identity, SessionError>
where
    A: AuthApi,
    S: AuthStore,
{
    let request = validate_registration(form)?;
    let user = api.register(&request).await.inspect_err(|e| log::info!("registration rejected: {e}"))?;
    let identity = Identity::new(user.username, AuthMethod::Local);
    store.modify(|state| state.login_succeeded(identity.clone(), Authority::Session));
    Ok(identity)
}

/// Log out on the backend, then clear the cookie and identity locally no
/// matter what the backend answered.
pub async fn logout<A, C, S>(api: &A, cookies: &C, store: &S, cookie_name: &str)
where
    A: AuthApi,
    C: CookieStore,
    S: AuthStore,
{
    if let Err(e) = api.logout().await {
        log::warn!("logout request failed; clearing local session anyway: {e}");
    }
    cookies.clear(cookie_name);
    store.modify(|state| state.logged_out());
}

/// Leave the app for the provider's OAuth page. The pending redirect target
/// is parked in session storage so it survives the round trip.
pub fn start_oauth_login(api: &HttpApi, provider: OAuthProvider, pending_target: Option<&str>) {
    let url = api.oauth_login_url(provider);
    if let Some(target) = pending_target {
        crate::util::storage::save_json(crate::util::storage::PENDING_REDIRECT_KEY, &target);
    }
    log::info!("redirecting to {} login", provider.slug());
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
