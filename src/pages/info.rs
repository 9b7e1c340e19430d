//! Static "O nas" and "Kontakt" pages.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-content">
            <h1>"O nas"</h1>
            <p>"Informacje o naszej firmie..."</p>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page-content">
            <h1>"Kontakt"</h1>
            <p>"Skontaktuj się z nami..."</p>
        </div>
    }
}
