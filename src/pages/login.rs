//! Login page: local login, registration, and OAuth provider buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `?register=true` to pre-select the registration tab and `?from=` to
//! restore the pending redirect target after a full page load. Once the
//! session is confirmed the page consumes the pending target and
//! replace-navigates there (or to `/`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::{HttpApi, OAuthProvider};
use crate::net::session::{RegisterForm, start_oauth_login};
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::redirect::PendingRedirect;
use crate::util::query::{query_value, wants_register};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pending = expect_context::<RwSignal<PendingRedirect>>();
    let api = expect_context::<HttpApi>();
    let location = use_location();
    let navigate = use_navigate();

    let search = location.search.get_untracked();
    let tab = RwSignal::new(if wants_register(&search) { Tab::Register } else { Tab::Login });
    if let Some(from) = query_value(&search, "from") {
        pending.update(|p| p.capture_target(&from));
    }

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.with(AuthState::is_confirmed) {
            let target = pending.try_update(PendingRedirect::take).unwrap_or_default();
            log::debug!("signed in; continuing to {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let api_login = api.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = LoginRequest { username: username.get(), password: password.get() };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api_login.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::session::login(&api, &auth, &request).await {
                    error.set(Some(e.user_message(crate::net::session::LOGIN_FAILED_MESSAGE)));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_login, request);
            busy.set(false);
        }
    };

    let api_register = api.clone();
    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api_register.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::session::register(&api, &auth, &form).await {
                    error.set(Some(e.user_message(crate::net::session::REGISTER_FAILED_MESSAGE)));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_register, form);
            busy.set(false);
        }
    };

    let oauth = move |provider: OAuthProvider| {
        let target = pending.with_untracked(|p| p.peek().map(str::to_owned));
        start_oauth_login(&api, provider, target.as_deref());
    };
    let oauth_google = oauth.clone();
    let oauth_github = oauth;

    let switch_to = move |next: Tab| {
        tab.set(next);
        error.set(None);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="tabs">
                    <button
                        class=move || if tab.get() == Tab::Login { "tab active" } else { "tab" }
                        on:click=move |_| switch_to(Tab::Login)
                    >
                        "Logowanie"
                    </button>
                    <button
                        class=move || if tab.get() == Tab::Register { "tab active" } else { "tab" }
                        on:click=move |_| switch_to(Tab::Register)
                    >
                        "Rejestracja"
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <Show
                    when=move || tab.get() == Tab::Login
                    fallback=move || {
                        let on_register = on_register.clone();
                        view! {
                            <form class="login-form" on:submit=on_register>
                                <input
                                    type="text"
                                    placeholder="Nazwa użytkownika"
                                    required=true
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                />
                                <input
                                    type="email"
                                    placeholder="Email"
                                    required=true
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    type="password"
                                    placeholder="Hasło"
                                    required=true
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <input
                                    type="password"
                                    placeholder="Potwierdź hasło"
                                    required=true
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                />
                                <button type="submit" disabled=move || busy.get()>"Zarejestruj się"</button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_login.clone()>
                        <input
                            type="text"
                            placeholder="Nazwa użytkownika"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Hasło"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || busy.get()>"Zaloguj się"</button>
                    </form>
                </Show>

                <div class="login-divider">"lub"</div>
                <div class="social-login">
                    <button class="google-login" on:click=move |_| oauth_google(OAuthProvider::Google)>
                        "Zaloguj przez Google"
                    </button>
                    <button class="github-login" on:click=move |_| oauth_github(OAuthProvider::Github)>
                        "Zaloguj przez GitHub"
                    </button>
                </div>
            </div>
        </div>
    }
}
