// templates/pages/blog.rs
use maud::{html, Markup, PreEscaped};

use crate::domain::blog::BlogPost;
use crate::leads::LeadKind;
use crate::templates::components::{blog_card, empty_state, lead_form};
use crate::templates::layouts::{site_layout, PageMeta};

pub fn blog_list_page(posts: &[BlogPost]) -> Markup {
    let meta = PageMeta {
        title: "Blog | Real Estate Listings",
        description: Some("Market insights, buying guides and selling tips."),
        canonical: Some("/blog"),
        image: None,
    };

    site_layout(
        &meta,
        html! {
            h1 { "Blog" }
            @if posts.is_empty() {
                (empty_state("No posts found", "New articles are on the way."))
            } @else {
                div class="grid" {
                    @for post in posts { (blog_card(post)) }
                }
            }
        },
    )
}

pub fn blog_post_page(post: &BlogPost, canonical: &str) -> Markup {
    let description = post
        .seo_description
        .as_deref()
        .or((!post.excerpt.is_empty()).then_some(post.excerpt.as_str()));
    let meta = PageMeta {
        title: post.page_title(),
        description,
        canonical: Some(canonical),
        image: (!post.image.is_empty()).then_some(post.image.as_str()),
    };

    site_layout(
        &meta,
        html! {
            article class="post" {
                header {
                    @if !post.category.is_empty() {
                        span class="badge" { (post.category) }
                    }
                    h1 { (post.title) }
                    div class="byline" {
                        @if let Some(avatar) = &post.author.avatar {
                            img class="avatar" src=(avatar) alt=(post.author.name);
                        }
                        @if !post.author.name.is_empty() {
                            span class="author" { (post.author.name) }
                        }
                        @if let Some(date) = post.published_at {
                            " · "
                            time datetime=(date.to_rfc3339()) { (date.format("%B %-d, %Y").to_string()) }
                        }
                        @if let Some(minutes) = post.read_time {
                            " · " (minutes) " min read"
                        }
                    }
                }
                @if !post.image.is_empty() {
                    img class="hero-image" src=(post.image) alt=(post.title);
                }
                div class="content" { (PreEscaped(&post.content)) }

                @if !post.tags.is_empty() {
                    ul class="tags" {
                        @for tag in &post.tags { li { "#" (tag) } }
                    }
                }

                aside class="newsletter" {
                    h2 { "Enjoyed this article?" }
                    (lead_form(LeadKind::Newsletter, None))
                }
            }
        },
    )
}
