// templates/layouts/site.rs
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Real Estate Listings";

/// Per-page `<head>` metadata.
#[derive(Debug, Clone, Default)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    /// Absolute or root-relative canonical URL.
    pub canonical: Option<&'a str>,
    pub image: Option<&'a str>,
}

impl<'a> PageMeta<'a> {
    pub fn titled(title: &'a str) -> Self {
        Self {
            title,
            ..Default::default()
        }
    }
}

pub fn site_layout(meta: &PageMeta<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                @if let Some(description) = meta.description {
                    meta name="description" content=(description);
                    meta property="og:description" content=(description);
                }
                meta property="og:title" content=(meta.title);
                @if let Some(image) = meta.image {
                    meta property="og:image" content=(image);
                }
                @if let Some(canonical) = meta.canonical {
                    link rel="canonical" href=(canonical);
                }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/properties" { "Properties" } }
                            li { a href="/blog" { "Blog" } }
                            li { a href="/tools" { "Tools" } }
                        }
                    }
                }
                main { (content) }
                footer class="px-6 py-8" {
                    p { "© " (SITE_NAME) }
                }
            }
        }
    }
}
