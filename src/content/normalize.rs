// src/content/normalize.rs

use chrono::{DateTime, Utc};

use crate::content::documents::{AddressDoc, BlogDoc, PropertyDoc};
use crate::content::media::MediaResolver;
use crate::content::slug::slugify;
use crate::domain::blog::{Author, BlogPost};
use crate::domain::property::Property;

/// Maps raw store documents onto display records. Pure: the same document
/// always produces the same record.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    media: MediaResolver,
}

impl Normalizer {
    pub fn new(media: MediaResolver) -> Self {
        Self { media }
    }

    pub fn property(&self, doc: &PropertyDoc) -> Property {
        let description = doc
            .description
            .as_ref()
            .map(|d| d.to_html())
            .filter(|html| !html.is_empty());

        let features: Vec<String> = doc.features.iter().map(|f| f.feature.clone()).collect();
        let amenities: Vec<String> = doc.amenities.iter().map(|a| a.amenity.clone()).collect();

        let gallery = doc
            .gallery
            .iter()
            .map(|item| self.media.resolve(&item.image))
            .filter(|url| !url.is_empty())
            .collect();

        let seo = doc.seo.as_ref();

        Property {
            id: doc.id.to_string(),
            title: doc.title.clone(),
            slug: slug_or_derived(doc.slug.as_deref(), &doc.title),
            address: compose_address(&doc.address),
            city: doc.address.city.clone(),
            state: doc.address.state.clone(),
            price: doc.price,
            property_type: doc.property_type,
            status: doc.status,
            bedrooms: doc.bedrooms,
            bathrooms: doc.bathrooms,
            sqft: doc.sqft,
            lot_size: doc.lot_size,
            year_built: doc.year_built,
            parking: doc.parking,
            description,
            features: (!features.is_empty()).then_some(features),
            amenities: (!amenities.is_empty()).then_some(amenities),
            image: self.media.resolve_opt(doc.featured_image.as_ref()),
            gallery,
            featured: doc.featured,
            published: doc.published,
            seo_title: non_empty(seo.and_then(|s| s.title.as_deref())),
            seo_description: non_empty(seo.and_then(|s| s.description.as_deref())),
        }
    }

    pub fn blog(&self, doc: &BlogDoc) -> BlogPost {
        let author = match &doc.author {
            Some(relation) => Author {
                name: relation.display_with(|user| {
                    non_empty(user.name.as_deref()).or_else(|| non_empty(user.email.as_deref()))
                }),
                avatar: relation
                    .expanded()
                    .and_then(|user| user.avatar.as_ref())
                    .map(|avatar| self.media.resolve(avatar))
                    .filter(|url| !url.is_empty()),
            },
            None => Author {
                name: String::new(),
                avatar: None,
            },
        };

        let category = doc
            .category
            .as_ref()
            .map(|c| c.display_with(|cat| non_empty(cat.name.as_deref())))
            .unwrap_or_default();

        let published_at = parse_timestamp(doc.published_at.as_deref())
            .or_else(|| parse_timestamp(doc.created_at.as_deref()));

        let seo = doc.seo.as_ref();

        BlogPost {
            id: doc.id.to_string(),
            title: doc.title.clone(),
            slug: slug_or_derived(doc.slug.as_deref(), &doc.title),
            excerpt: doc.excerpt.clone(),
            content: doc
                .content
                .as_ref()
                .map(|c| c.to_html())
                .unwrap_or_default(),
            author,
            category,
            tags: doc.tags.iter().map(|t| t.tag.clone()).collect(),
            published_at,
            read_time: doc.read_time,
            image: self.media.resolve_opt(doc.featured_image.as_ref()),
            featured: doc.featured,
            published: doc.published,
            seo_title: non_empty(seo.and_then(|s| s.title.as_deref())),
            seo_description: non_empty(seo.and_then(|s| s.description.as_deref())),
        }
    }
}

/// Joins the non-empty address parts with ", ".
pub fn compose_address(address: &AddressDoc) -> String {
    [
        address.street.as_str(),
        address.city.as_str(),
        address.state.as_str(),
        address.zip_code.as_str(),
        address.country.as_deref().unwrap_or(""),
    ]
    .iter()
    .map(|part| part.trim())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

fn slug_or_derived(slug: Option<&str>, title: &str) -> String {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slug.to_string(),
        None => slugify(title),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parses an RFC 3339 timestamp, ignoring anything unparseable.
pub fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
