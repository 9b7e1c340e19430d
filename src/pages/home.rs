//! Blog home: article teasers filtered by the navbar's applied tags.

use leptos::prelude::*;

use crate::state::blog::{ARTICLES, SelectedTags, filter_by_tags};

#[component]
pub fn HomePage() -> impl IntoView {
    let selected = expect_context::<RwSignal<SelectedTags>>();

    let visible = move || selected.with(|tags| filter_by_tags(&ARTICLES, &tags.0));

    view! {
        <div class="home-page">
            <h1>"Blog dla graczy"</h1>
            <Show when=move || selected.with(|tags| !tags.0.is_empty())>
                <p class="active-filters">"Filtry: " {move || selected.with(|tags| tags.0.join(", "))}</p>
            </Show>
            {move || {
                let articles = visible();
                if articles.is_empty() {
                    return view! { <p class="no-articles">"Brak artykułów dla wybranych tagów"</p> }.into_any();
                }
                view! {
                    <div class="articles-grid">
                        {articles
                            .into_iter()
                            .map(|article| {
                                view! {
                                    <article class="article-card">
                                        <h2>{article.title}</h2>
                                        <p>{article.summary}</p>
                                        <div class="article-tags">
                                            {article.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                                        </div>
                                        {article.path.map(|path| view! { <a href=path class="read-more">"Czytaj dalej"</a> })}
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
