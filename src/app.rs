//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session state (`AuthState`, `PendingRedirect`) and the
//! applied tag filter, and hands them to pages through context. Session
//! resolution runs once per full page load from `SessionBootstrap`; every
//! route except `/login` sits behind a guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::{AdminRoute, ProtectedRoute};
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    admin::AdminPage,
    article::ArticlePage,
    home::HomePage,
    info::{AboutPage, ContactPage},
    login::LoginPage,
    shop::ShopPage,
    transactions::TransactionsPage,
};
use crate::state::{auth::AuthState, blog::SelectedTags, redirect::PendingRedirect};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let auth = RwSignal::new(AuthState::default());

    provide_context(HttpApi::new(config.clone()));
    provide_context(config);
    provide_context(auth);
    provide_context(RwSignal::new(PendingRedirect::default()));
    provide_context(RwSignal::new(SelectedTags::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/gamerblog.css"/>
        <Title text="Gamer Blog"/>

        <Router>
            <SessionBootstrap/>
            <div class="app">
                <Show when=move || auth.with(AuthState::is_authenticated)>
                    <Navbar/>
                </Show>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }/>
                    <Route
                        path=(StaticSegment("article"), StaticSegment("silent-hill-2"))
                        view=|| view! { <ProtectedRoute><ArticlePage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("o-nas") view=|| view! { <ProtectedRoute><AboutPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("kontakt") view=|| view! { <ProtectedRoute><ContactPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("sklep") view=|| view! { <ProtectedRoute><ShopPage/></ProtectedRoute> }/>
                    <Route
                        path=StaticSegment("transakcje")
                        view=|| view! { <ProtectedRoute><TransactionsPage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("admin") view=|| view! { <AdminRoute><AdminPage/></AdminRoute> }/>
                </Routes>
            </div>
        </Router>
    }
}

/// Resolves the session once when the app mounts in the browser.
///
/// An OAuth callback lands here with `token`/`username` in the query; the
/// redirect target parked before leaving for the provider is restored first
/// so the login page (or this component, on any other path) can continue to it.
/// Landing on `/login` without them drops the parked target.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pending = expect_context::<RwSignal<PendingRedirect>>();
    let api = expect_context::<HttpApi>();
    let navigate = leptos_router::hooks::use_navigate();
    let alive = crate::util::lifetime::Liveness::for_current_owner();

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;

        use crate::net::resolver::{Resolution, resolve_session};
        use crate::util::cookie::BrowserCookies;
        use crate::util::query::{ParkedTarget, parked_target_action};
        use crate::util::storage::{PENDING_REDIRECT_KEY, take_json};

        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        let search = location.search().unwrap_or_default();
        let path = location.pathname().unwrap_or_default();
        match parked_target_action(&path, &search) {
            ParkedTarget::Restore => {
                if let Some(target) = take_json::<String>(PENDING_REDIRECT_KEY) {
                    pending.update(|p| p.capture_target(&target));
                }
            }
            ParkedTarget::Discard => {
                if let Some(stale) = take_json::<String>(PENDING_REDIRECT_KEY) {
                    log::debug!("dropping redirect target {stale} from an unfinished OAuth login");
                }
            }
            ParkedTarget::Keep => {}
        }

        leptos::task::spawn_local(async move {
            let cookie_name = api.config().session_cookie.clone();
            let outcome = resolve_session(&api, &BrowserCookies, &auth, &cookie_name, &search, &alive).await;
            log::info!("session resolved: {outcome:?}");
            // The login page continues to the pending target by itself.
            if matches!(outcome, Resolution::OAuthCallback(_)) && path != "/login" {
                let target = pending.try_update(PendingRedirect::take).unwrap_or_default();
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, pending, api, navigate, alive);
    }
}
