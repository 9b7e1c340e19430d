//! Route wrappers that gate protected views on the resolved identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision itself is `util::guard::guard_outcome`; these components
//! only act on it:
//!
//! - `Loading`: neutral placeholder.
//! - `RedirectToLogin`: capture the current path + query as the pending
//!   redirect target (unless the user just logged out) and replace-navigate
//!   to `/login?from=...`.
//! - `Denied`: access message, then home after the configured delay. The
//!   delayed navigation is cancelled if the guard unmounts first.
//! - `Render`: the wrapped view.
//!
//! Admin routes whose identity came from a login response also watch
//! `needs_identity_refresh` on its own and start a refresh probe whenever it
//! turns true. It can flip while the outcome stays `Loading`, e.g. when a
//! probe from before the login returns and releases the in-flight flag.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::state::redirect::{HOME_PATH, PendingRedirect, join_path_and_search};
use crate::util::guard::{Access, GuardOutcome, guard_outcome, needs_identity_refresh, remembers_target};
use crate::util::lifetime::{DelayedRedirect, Liveness};
use crate::util::query::login_path_with_target;

/// Renders `children` only for a confirmed, signed-in user.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Authenticated, children)
}

/// Renders `children` only for a confirmed administrator.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Admin, children)
}

fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pending = expect_context::<RwSignal<PendingRedirect>>();
    let api = expect_context::<HttpApi>();
    let location = use_location();
    let navigate = use_navigate();
    let alive = Liveness::for_current_owner();

    let outcome = Memo::new(move |_| auth.with(|state| guard_outcome(state, access)));
    let wants_refresh = Memo::new(move |_| auth.with(|state| needs_identity_refresh(state, access)));

    let refresh_api = api.clone();
    let refresh_alive = alive.clone();
    Effect::new(move || {
        if wants_refresh.get() {
            refresh(&refresh_api, auth, refresh_alive.clone());
        }
    });

    Effect::new(move || match outcome.get() {
        GuardOutcome::RedirectToLogin => {
            let path = location.pathname.get_untracked();
            let search = location.search.get_untracked();
            let target = if auth.with_untracked(remembers_target) {
                pending.update(|p| p.capture(&path, &search));
                login_path_with_target(&join_path_and_search(&path, &search))
            } else {
                pending.update(|p| *p = PendingRedirect::default());
                "/login".to_owned()
            };
            log::debug!("unauthenticated access to {path}; redirecting to login");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        GuardOutcome::Denied => {
            log::info!("non-admin user denied access to {}", location.pathname.get_untracked());
            let navigate = navigate.clone();
            DelayedRedirect::new(HOME_PATH, api.config().admin_redirect_delay, alive.clone())
                .schedule(move |target| navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() }));
        }
        GuardOutcome::Loading | GuardOutcome::Render => {}
    });

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Denied => view! {
            <div class="admin-panel">
                <div class="error-message">"Nie masz uprawnień administratora. Przekierowywanie..."</div>
            </div>
        }
        .into_any(),
        GuardOutcome::Loading | GuardOutcome::RedirectToLogin => view! { <div class="loading">"Ładowanie..."</div> }.into_any(),
    }
}

/// Ask `/api/user` again so the admin flag is known.
fn refresh(api: &HttpApi, auth: RwSignal<AuthState>, alive: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let cookie_name = api.config().session_cookie.clone();
            let outcome = crate::net::resolver::refresh_identity(
                &api,
                &crate::util::cookie::BrowserCookies,
                &auth,
                &cookie_name,
                &alive,
            )
            .await;
            log::debug!("admin identity refresh finished: {outcome:?}");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth, alive);
    }
}
