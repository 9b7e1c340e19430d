//! Full article view rendered from Markdown.

use leptos::prelude::*;

use crate::state::blog::{SILENT_HILL_2_BODY, render_markdown_html};

#[component]
pub fn ArticlePage() -> impl IntoView {
    let rendered = render_markdown_html(SILENT_HILL_2_BODY);

    view! {
        <div class="article-page">
            <div class="article-body" inner_html=rendered></div>
            <a href="/" class="back-link">"← Wróć do bloga"</a>
        </div>
    }
}
