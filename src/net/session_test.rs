use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::error::ApiError;
use crate::net::types::UserPayload;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::redirect::PendingRedirect;
use crate::util::guard::{Access, GuardOutcome, guard_outcome, remembers_target};

const COOKIE: &str = "session_data";

#[derive(Default)]
struct FakeApi {
    login_result: Option<Result<UserPayload, ApiError>>,
    register_result: Option<Result<UserPayload, ApiError>>,
    logout_result: Option<Result<(), ApiError>>,
    calls: Cell<u32>,
}

impl AuthApi for FakeApi {
    async fn fetch_user(&self) -> Result<UserPayload, ApiError> {
        self.calls.set(self.calls.get() + 1);
        Err(ApiError::Status { status: 401, message: None })
    }

    async fn login(&self, _request: &LoginRequest) -> Result<UserPayload, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.login_result.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<UserPayload, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.register_result.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.logout_result.clone().unwrap_or(Ok(()))
    }
}

#[derive(Default)]
struct MemoryCookies {
    raw: RefCell<String>,
}

impl CookieStore for MemoryCookies {
    fn raw(&self) -> String {
        self.raw.borrow().clone()
    }

    fn clear(&self, name: &str) {
        let kept: Vec<String> = self
            .raw
            .borrow()
            .split("; ")
            .filter(|pair| !pair.starts_with(&format!("{name}=")))
            .map(str::to_owned)
            .collect();
        *self.raw.borrow_mut() = kept.join("; ");
    }
}

fn alice_payload() -> UserPayload {
    UserPayload { username: "alice".to_owned(), auth_method: Some("local".to_owned()), is_admin: None }
}

fn credentials() -> LoginRequest {
    LoginRequest { username: "alice".to_owned(), password: "hunter2".to_owned() }
}

fn logged_in_store() -> RefCell<AuthState> {
    let store = RefCell::new(AuthState::default());
    store.modify(|state| state.login_succeeded(Identity::new("alice", AuthMethod::Local), Authority::Session));
    store
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_sets_identity() {
    let api = FakeApi { login_result: Some(Ok(alice_payload())), ..FakeApi::default() };
    let store = RefCell::new(AuthState::default());

    let identity = block_on(login(&api, &store, &credentials())).unwrap();

    assert_eq!(identity.username, "alice");
    assert!(store.snapshot().is_confirmed());
}

#[test]
fn login_failure_surfaces_server_message_and_keeps_state() {
    let api = FakeApi {
        login_result: Some(Err(ApiError::Status {
            status: 401,
            message: Some("Nieprawidłowa nazwa użytkownika lub hasło".to_owned()),
        })),
        ..FakeApi::default()
    };
    let store = RefCell::new(AuthState::default());

    let err = block_on(login(&api, &store, &credentials())).unwrap_err();

    assert_eq!(err.user_message(LOGIN_FAILED_MESSAGE), "Nieprawidłowa nazwa użytkownika lub hasło");
    assert_eq!(store.snapshot(), AuthState::default());
}

#[test]
fn login_failure_without_message_uses_fallback() {
    let api = FakeApi { login_result: Some(Err(ApiError::Transport("offline".to_owned()))), ..FakeApi::default() };
    let store = RefCell::new(AuthState::default());

    let err = block_on(login(&api, &store, &credentials())).unwrap_err();

    assert_eq!(err.user_message(LOGIN_FAILED_MESSAGE), LOGIN_FAILED_MESSAGE);
}

#[test]
fn guarded_path_is_restored_after_login() {
    let api = FakeApi { login_result: Some(Ok(alice_payload())), ..FakeApi::default() };
    let store = RefCell::new(AuthState::default());
    store.modify(|state| {
        let ticket = state.begin_probe().unwrap();
        state.resolved(ticket, None);
    });
    let mut pending = PendingRedirect::default();

    assert_eq!(guard_outcome(&store.snapshot(), Access::Authenticated), GuardOutcome::RedirectToLogin);
    pending.capture("/transakcje", "");

    block_on(login(&api, &store, &credentials())).unwrap();

    assert_eq!(pending.take(), "/transakcje");
    assert_eq!(guard_outcome(&store.snapshot(), Access::Authenticated), GuardOutcome::Render);
}

// =============================================================
// Register
// =============================================================

fn form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        username: "carol".to_owned(),
        email: "carol@example.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn register_mismatch_never_calls_network() {
    let api = FakeApi::default();
    let store = RefCell::new(AuthState::default());

    let err = block_on(register(&api, &store, &form("secret1", "secret2"))).unwrap_err();

    assert_eq!(err, SessionError::PasswordMismatch);
    assert_eq!(err.user_message(REGISTER_FAILED_MESSAGE), "Hasła nie są identyczne");
    assert_eq!(api.calls.get(), 0);
    assert_eq!(store.snapshot(), AuthState::default());
}

#[test]
fn register_success_is_local_login() {
    let payload = UserPayload { username: "carol".to_owned(), auth_method: None, is_admin: None };
    let api = FakeApi { register_result: Some(Ok(payload)), ..FakeApi::default() };
    let store = RefCell::new(AuthState::default());

    let identity = block_on(register(&api, &store, &form("secret", "secret"))).unwrap();

    assert_eq!(identity, Identity::new("carol", AuthMethod::Local));
    assert_eq!(store.snapshot().username(), Some("carol"));
}

#[test]
fn register_conflict_shows_server_message() {
    let api = FakeApi {
        register_result: Some(Err(ApiError::Status { status: 409, message: Some("Nazwa użytkownika już istnieje".to_owned()) })),
        ..FakeApi::default()
    };
    let store = RefCell::new(AuthState::default());

    let err = block_on(register(&api, &store, &form("x", "x"))).unwrap_err();

    assert_eq!(err.user_message(REGISTER_FAILED_MESSAGE), "Nazwa użytkownika już istnieje");
}

#[test]
fn validate_registration_drops_confirmation() {
    let request = validate_registration(&form("pw", "pw")).unwrap();
    assert_eq!(request.password, "pw");
    assert_eq!(request.email, "carol@example.com");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_identity_and_cookie() {
    let api = FakeApi::default();
    let cookies = MemoryCookies::default();
    *cookies.raw.borrow_mut() = format!("theme=dark; {COOKIE}=a.b.c");
    let store = logged_in_store();

    block_on(logout(&api, &cookies, &store, COOKIE));

    assert_eq!(cookies.raw(), "theme=dark");
    assert_eq!(store.snapshot().phase, AuthPhase::Anonymous);
}

#[test]
fn logout_is_effective_when_backend_fails() {
    let api = FakeApi {
        logout_result: Some(Err(ApiError::Status { status: 500, message: None })),
        ..FakeApi::default()
    };
    let cookies = MemoryCookies::default();
    *cookies.raw.borrow_mut() = format!("{COOKIE}=a.b.c");
    let store = logged_in_store();

    block_on(logout(&api, &cookies, &store, COOKIE));

    assert_eq!(api.calls.get(), 1);
    assert!(cookies.raw().is_empty());
    let state = store.snapshot();
    assert!(state.identity.is_none());
    assert_eq!(guard_outcome(&state, Access::Authenticated), GuardOutcome::RedirectToLogin);
}

#[test]
fn login_after_logout_lands_home() {
    let api = FakeApi { login_result: Some(Ok(alice_payload())), ..FakeApi::default() };
    let cookies = MemoryCookies::default();
    let store = logged_in_store();
    let mut pending = PendingRedirect::default();

    block_on(logout(&api, &cookies, &store, COOKIE));
    // The still-mounted guard sees the logout and must not remember its page.
    if remembers_target(&store.snapshot()) {
        pending.capture("/admin", "");
    }
    block_on(login(&api, &store, &credentials())).unwrap();

    assert_eq!(pending.take(), "/");
}
