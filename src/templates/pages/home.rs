// templates/pages/home.rs
use maud::{html, Markup};

use crate::domain::blog::BlogPost;
use crate::domain::property::Property;
use crate::leads::LeadKind;
use crate::templates::components::{blog_card, empty_state, lead_form, property_card};
use crate::templates::layouts::{site_layout, PageMeta, SITE_NAME};

pub fn home_page(featured: &[Property], posts: &[BlogPost]) -> Markup {
    let meta = PageMeta {
        title: SITE_NAME,
        description: Some("Find your next home, explore market insights and run the numbers."),
        canonical: Some("/"),
        image: None,
    };

    site_layout(
        &meta,
        html! {
            section class="hero" {
                h1 { "Find your next home" }
                form method="get" action="/properties" {
                    input type="search" name="search" placeholder="City, street or title";
                    button class="btn" type="submit" { "Search" }
                }
            }

            section {
                h2 { "Featured Properties" }
                @if featured.is_empty() {
                    (empty_state("No properties found", "Check back soon for new listings."))
                } @else {
                    div class="grid" {
                        @for property in featured { (property_card(property)) }
                    }
                }
                a href="/properties" { "View all properties →" }
            }

            section {
                h2 { "From the Blog" }
                @if posts.is_empty() {
                    (empty_state("No posts found", "New articles are on the way."))
                } @else {
                    div class="grid" {
                        @for post in posts { (blog_card(post)) }
                    }
                }
            }

            section class="newsletter" {
                h2 { "Get market updates" }
                (lead_form(LeadKind::Newsletter, None))
            }
        },
    )
}
