// src/domain/property.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    /// The value stored in documents and used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Rented,
    Pending,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 5] = [
        PropertyStatus::ForSale,
        PropertyStatus::ForRent,
        PropertyStatus::Sold,
        PropertyStatus::Rented,
        PropertyStatus::Pending,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "for-sale",
            PropertyStatus::ForRent => "for-rent",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
            PropertyStatus::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Rented => "Rented",
            PropertyStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyStatus::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A property listing flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Street, city, state, zip and country joined with ", ", empty parts left out.
    pub address: String,
    pub city: String,
    pub state: String,
    pub price: f64,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub lot_size: Option<f64>,
    pub year_built: Option<i32>,
    pub parking: Option<u32>,
    /// Flattened HTML.
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub image: String,
    pub gallery: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl Property {
    pub fn page_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }
}
