//! Blog catalogue and tag filtering.
//!
//! DESIGN
//! ======
//! Articles are static. The navbar owns a draft tag selection and only
//! applies it to the home view on "Zastosuj", so the filter is a plain
//! `Vec<String>` signal shared through context.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Fixed tag vocabulary offered by the navbar search dropdown.
pub const TAGS: [&str; 6] = ["Gry", "Horror", "Porady", "Gracze", "Artykuł", "Dyskusje"];

/// Tags applied to the home view, shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedTags(pub Vec<String>);

/// An article teaser on the home view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Route of the full article, if it has one.
    pub path: Option<&'static str>,
}

pub static ARTICLES: [Article; 4] = [
    Article {
        slug: "silent-hill-2",
        title: "Silent Hill 2: powrót do mgły",
        summary: "Dlaczego historia Jamesa Sunderlanda wciąż przeraża po ponad dwóch dekadach.",
        tags: &["Gry", "Horror", "Artykuł"],
        path: Some("/article/silent-hill-2"),
    },
    Article {
        slug: "pierwszy-pc",
        title: "Jak złożyć pierwszy komputer do grania",
        summary: "Podzespoły, budżet i najczęstsze błędy początkujących.",
        tags: &["Porady", "Gracze"],
        path: None,
    },
    Article {
        slug: "najlepsze-horrory",
        title: "Najlepsze horrory ostatniej dekady",
        summary: "Subiektywny ranking gier, przy których nie da się spać.",
        tags: &["Gry", "Horror", "Dyskusje"],
        path: None,
    },
    Article {
        slug: "spolecznosc",
        title: "Społeczność graczy w 2024 roku",
        summary: "Gdzie dziś rozmawiamy o grach i dlaczego fora wracają do łask.",
        tags: &["Gracze", "Dyskusje"],
        path: None,
    },
];

#[must_use]
pub fn find_article(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

/// Add `tag` when absent, remove it when present.
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(index) = selected.iter().position(|t| t == tag) {
        selected.remove(index);
    } else {
        selected.push(tag.to_owned());
    }
}

/// An article matches when nothing is selected or it carries any selected tag.
#[must_use]
pub fn matches_tags(article: &Article, selected: &[String]) -> bool {
    selected.is_empty() || article.tags.iter().any(|tag| selected.iter().any(|s| s == tag))
}

#[must_use]
pub fn filter_by_tags<'a>(articles: &'a [Article], selected: &[String]) -> Vec<&'a Article> {
    articles.iter().filter(|a| matches_tags(a, selected)).collect()
}

/// Body of `/article/silent-hill-2`.
pub const SILENT_HILL_2_BODY: &str = r"# Silent Hill 2: powrót do mgły

James Sunderland dostaje list od żony, która **nie żyje od trzech lat**.
Zaprasza go do miasteczka, w którym spędzili razem najlepsze chwile.

## Atmosfera

Mgła, szum radia i puste ulice budują napięcie lepiej niż jakikolwiek
*jump scare*. Gra rzadko atakuje gracza wprost; zamiast tego pozwala mu
samemu dopowiedzieć resztę.

## Dlaczego warto wrócić

- symbolika potworów odbijająca poczucie winy bohatera,
- kilka zakończeń zależnych od stylu gry,
- ścieżka dźwiękowa Akiry Yamaoki.

> W moich niespokojnych snach widzę to miasto.
";

/// Render trusted Markdown to HTML. Raw HTML in the source is dropped.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
