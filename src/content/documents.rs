// src/content/documents.rs

use serde::{Deserialize, Deserializer};

use crate::content::media::MediaDoc;
use crate::content::richtext::RichText;
use crate::domain::property::{PropertyStatus, PropertyType};

// Raw document shapes
//
// property
//  ├── id, title, slug
//  ├── featuredImage      (media id | media object)
//  ├── gallery[].image    (media id | media object)
//  ├── address { street, city, state, zipCode, country }
//  ├── price, type, status, bedrooms, bathrooms, sqft
//  ├── lotSize, yearBuilt, parking
//  ├── description        (html string | editor tree)
//  ├── features[].feature, amenities[].amenity
//  ├── featured, published, createdAt, updatedAt
//  └── seo { title, description }
//
// blog
//  ├── id, title, slug, excerpt
//  ├── content            (html string | editor tree)
//  ├── featuredImage      (media id | media object)
//  ├── author             (user id | user object)
//  ├── category           (category id | category object)
//  ├── tags[].tag
//  ├── publishedAt, createdAt, readTime
//  ├── featured, published
//  └── seo { title, description }

/// Document identifiers arrive as strings from document databases and as
/// integers from relational adapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DocId(pub String);

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => DocId(s),
            Raw::Int(n) => DocId(n.to_string()),
        })
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A relation that may or may not have been expanded by the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Reference(DocId),
    Expanded(T),
}

impl<T> Relation<T> {
    /// Display value for a relation: the bare identifier when unexpanded,
    /// otherwise whatever `display` picks from the object (empty if nothing).
    pub fn display_with<F>(&self, display: F) -> String
    where
        F: FnOnce(&T) -> Option<String>,
    {
        match self {
            Relation::Reference(id) => id.0.clone(),
            Relation::Expanded(obj) => display(obj).unwrap_or_default(),
        }
    }

    pub fn expanded(&self) -> Option<&T> {
        match self {
            Relation::Reference(_) => None,
            Relation::Expanded(obj) => Some(obj),
        }
    }
}

/// Treats an explicit `null` like a missing field.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDoc {
    #[serde(default, deserialize_with = "null_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_default")]
    pub zip_code: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeoDoc {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub image: Relation<MediaDoc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureItem {
    pub feature: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AmenityItem {
    pub amenity: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagItem {
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDoc {
    pub id: DocId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub featured_image: Option<Relation<MediaDoc>>,
    #[serde(default, deserialize_with = "null_default")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default, deserialize_with = "null_default")]
    pub address: AddressDoc,
    #[serde(default, deserialize_with = "null_default")]
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    #[serde(default, deserialize_with = "null_default")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub sqft: u32,
    #[serde(default)]
    pub lot_size: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub parking: Option<u32>,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default, deserialize_with = "null_default")]
    pub features: Vec<FeatureItem>,
    #[serde(default, deserialize_with = "null_default")]
    pub amenities: Vec<AmenityItem>,
    #[serde(default, deserialize_with = "null_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub seo: Option<SeoDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserDoc {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<Relation<MediaDoc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryDoc {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDoc {
    pub id: DocId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub featured_image: Option<Relation<MediaDoc>>,
    #[serde(default)]
    pub author: Option<Relation<UserDoc>>,
    #[serde(default)]
    pub category: Option<Relation<CategoryDoc>>,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<TagItem>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub published: bool,
    #[serde(default)]
    pub seo: Option<SeoDoc>,
}
