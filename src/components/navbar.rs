//! Top navigation bar: site links, tag search, greeting, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `App` above the routes whenever an identity is present,
//! including the provisional one decoded from the cookie. The tag dropdown
//! edits a draft selection that is applied to the home view on "Zastosuj".

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::state::auth::{AuthState, Identity};
use crate::state::blog::{SelectedTags, TAGS, toggle_tag};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let applied = expect_context::<RwSignal<SelectedTags>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();

    let search_open = RwSignal::new(false);
    let draft = RwSignal::new(applied.get_untracked().0);

    let greeting = move || auth.with(|state| state.identity.as_ref().map(Identity::greeting).unwrap_or_default());
    let is_admin = move || auth.with(AuthState::is_admin);

    let on_apply = move |_| {
        applied.set(SelectedTags(draft.get()));
        search_open.set(false);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let cookie_name = api.config().session_cookie.clone();
                crate::net::session::logout(&api, &crate::util::cookie::BrowserCookies, &auth, &cookie_name).await;
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate);
        }
    };

    view! {
        <nav class="navbar">
            <div class="logo">
                <img src="/img/logo.jpg" alt="Logo"/>
            </div>
            <ul class="nav-links">
                <li><a href="/">"Blog"</a></li>
                <li><a href="/o-nas">"O nas"</a></li>
                <li><a href="/kontakt">"Kontakt"</a></li>
                <li><a href="/sklep">"Sklep"</a></li>
                <li class="search" on:click=move |_| search_open.update(|open| *open = !*open)>
                    "Wyszukaj"
                </li>
            </ul>

            <div class="user-logged-in">
                <span class="username">{greeting}</span>
                <div class="user-menu">
                    <a href="/transakcje" class="user-menu-link">"Historia zamówień"</a>
                    <Show when=is_admin>
                        <a href="/admin" class="user-menu-link admin-link">"Panel Admina"</a>
                    </Show>
                    <button class="logout-button" on:click=on_logout>"Wyloguj"</button>
                </div>
            </div>

            <Show when=move || search_open.get()>
                <div class="search-dropdown">
                    <h3>"Filtruj według tagów"</h3>
                    <div class="tags-list">
                        {TAGS
                            .iter()
                            .map(|&tag| {
                                view! {
                                    <label class="tag-checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || draft.with(|tags| tags.iter().any(|t| t == tag))
                                            on:change=move |_| draft.update(|tags| toggle_tag(tags, tag))
                                        />
                                        {tag}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="apply-button" on:click=on_apply>"Zastosuj"</button>
                </div>
            </Show>
        </nav>
    }
}
