// templates/components/cards.rs
use maud::{html, Markup};

use crate::domain::blog::BlogPost;
use crate::domain::property::Property;
use crate::templates::components::format::currency;

pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="card property-card" {
            a href={ "/properties/" (property.slug) } {
                @if !property.image.is_empty() {
                    img src=(property.image) alt=(property.title) loading="lazy";
                }
                div class="card-body" {
                    span class="badge" { (property.status.label()) }
                    h3 { (property.title) }
                    p class="price" { (currency(property.price)) }
                    p class="address" { (property.address) }
                    ul class="facts" {
                        li { (property.bedrooms) " bd" }
                        li { (property.bathrooms) " ba" }
                        li { (property.sqft) " sqft" }
                    }
                }
            }
        }
    }
}

pub fn blog_card(post: &BlogPost) -> Markup {
    html! {
        article class="card blog-card" {
            a href={ "/blog/" (post.slug) } {
                @if !post.image.is_empty() {
                    img src=(post.image) alt=(post.title) loading="lazy";
                }
                div class="card-body" {
                    @if !post.category.is_empty() {
                        span class="badge" { (post.category) }
                    }
                    h3 { (post.title) }
                    @if !post.excerpt.is_empty() {
                        p { (post.excerpt) }
                    }
                    p class="meta" {
                        @if let Some(date) = post.published_at {
                            time datetime=(date.to_rfc3339()) { (date.format("%B %-d, %Y").to_string()) }
                        }
                        @if let Some(minutes) = post.read_time {
                            " · " (minutes) " min read"
                        }
                    }
                }
            }
        }
    }
}

pub fn empty_state(title: &str, message: &str) -> Markup {
    html! {
        div class="empty-state" {
            h2 { (title) }
            p { (message) }
        }
    }
}
