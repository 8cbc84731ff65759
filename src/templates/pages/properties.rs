// templates/pages/properties.rs
use maud::{html, Markup, PreEscaped};

use crate::content::filters::{PriceBucket, PropertyFilters};
use crate::domain::property::{Property, PropertyStatus, PropertyType};
use crate::leads::LeadKind;
use crate::templates::components::format::currency;
use crate::templates::components::{empty_state, lead_form, property_card};
use crate::templates::layouts::{site_layout, PageMeta};

/// Listing page. `canonical` is the canonical URL for the active filters.
pub fn properties_page(filters: &PropertyFilters, properties: &[Property], canonical: &str) -> Markup {
    let title = filters.page_title();
    let meta = PageMeta {
        title: &title,
        description: Some("Browse homes, condos and land for sale and for rent."),
        canonical: Some(canonical),
        image: None,
    };

    site_layout(
        &meta,
        html! {
            h1 { "Properties" }
            (filter_form(filters))

            @if properties.is_empty() {
                (empty_state("No properties found", "Try widening your search or clearing some filters."))
            } @else {
                p class="result-count" { (properties.len()) " properties" }
                div class="grid" {
                    @for property in properties { (property_card(property)) }
                }
            }
        },
    )
}

fn filter_form(filters: &PropertyFilters) -> Markup {
    let selected_type = filters.property_type.map(PropertyType::as_str).unwrap_or("all");
    let selected_status = filters.status.map(PropertyStatus::as_str).unwrap_or("all");
    let selected_price = filters.price_bucket.map(PriceBucket::as_str).unwrap_or("all");
    let beds = filters.bedrooms.map(|n| n.to_string()).unwrap_or_else(|| "all".to_string());
    let baths = filters.bathrooms.map(|n| n.to_string()).unwrap_or_else(|| "all".to_string());

    html! {
        form class="filters" method="get" action="/properties" {
            input type="search" name="search" placeholder="Search"
                value=(filters.search.as_deref().unwrap_or_default());
            input type="text" name="city" placeholder="City"
                value=(filters.city.as_deref().unwrap_or_default());
            input type="text" name="state" placeholder="State"
                value=(filters.state.as_deref().unwrap_or_default());

            select name="type" {
                option value="all" selected[selected_type == "all"] { "All types" }
                @for t in PropertyType::ALL {
                    option value=(t.as_str()) selected[selected_type == t.as_str()] { (t.label()) }
                }
            }
            select name="status" {
                option value="all" selected[selected_status == "all"] { "Any status" }
                @for s in PropertyStatus::ALL {
                    option value=(s.as_str()) selected[selected_status == s.as_str()] { (s.label()) }
                }
            }
            select name="price" {
                option value="all" selected[selected_price == "all"] { "Any price" }
                @for b in PriceBucket::ALL {
                    option value=(b.as_str()) selected[selected_price == b.as_str()] { (b.label()) }
                }
            }
            select name="bedrooms" {
                option value="all" selected[beds == "all"] { "Beds" }
                @for n in 1..=5u32 {
                    option value=(n) selected[beds == n.to_string()] { (n) "+" }
                }
            }
            select name="bathrooms" {
                option value="all" selected[baths == "all"] { "Baths" }
                @for n in 1..=4u32 {
                    option value=(n) selected[baths == n.to_string()] { (n) "+" }
                }
            }
            button class="btn" type="submit" { "Apply" }
            a href="/properties" { "Clear" }
        }
    }
}

pub fn property_detail_page(property: &Property, canonical: &str) -> Markup {
    let meta = PageMeta {
        title: property.page_title(),
        description: property.seo_description.as_deref(),
        canonical: Some(canonical),
        image: (!property.image.is_empty()).then_some(property.image.as_str()),
    };

    site_layout(
        &meta,
        html! {
            article class="property" {
                @if !property.image.is_empty() {
                    img class="hero-image" src=(property.image) alt=(property.title);
                }
                header {
                    span class="badge" { (property.status.label()) }
                    span class="badge" { (property.property_type.label()) }
                    h1 { (property.title) }
                    p class="address" { (property.address) }
                    p class="price" { (currency(property.price)) }
                }

                ul class="facts" {
                    li { strong { (property.bedrooms) } " Bedrooms" }
                    li { strong { (property.bathrooms) } " Bathrooms" }
                    li { strong { (property.sqft) } " sqft" }
                    @if let Some(lot) = property.lot_size {
                        li { strong { (lot) } " Lot size" }
                    }
                    @if let Some(year) = property.year_built {
                        li { strong { (year) } " Year built" }
                    }
                    @if let Some(parking) = property.parking {
                        li { strong { (parking) } " Parking" }
                    }
                }

                @if let Some(description) = &property.description {
                    section class="description" { (PreEscaped(description)) }
                }

                @if let Some(features) = &property.features {
                    section {
                        h2 { "Features" }
                        ul { @for f in features { li { (f) } } }
                    }
                }
                @if let Some(amenities) = &property.amenities {
                    section {
                        h2 { "Amenities" }
                        ul { @for a in amenities { li { (a) } } }
                    }
                }

                @if !property.gallery.is_empty() {
                    section class="gallery" {
                        @for url in &property.gallery {
                            img src=(url) alt=(property.title) loading="lazy";
                        }
                    }
                }

                aside {
                    h2 { "Interested in this property?" }
                    (lead_form(LeadKind::InformationRequest, Some(&property.title)))
                }
            }
        },
    )
}
