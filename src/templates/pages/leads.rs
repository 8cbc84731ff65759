// templates/pages/leads.rs
use maud::{html, Markup};

use crate::leads::Lead;
use crate::templates::layouts::{site_layout, PageMeta};

pub fn lead_thanks_page(lead: &Lead) -> Markup {
    site_layout(
        &PageMeta::titled("Thank you | Real Estate Listings"),
        html! {
            section class="thanks" {
                h1 { "Thank you" @if !lead.name.is_empty() { ", " (lead.name) } "!" }
                p { (lead.kind.confirmation()) }
                p { a href="/properties" { "Keep browsing properties →" } }
            }
        },
    )
}
