// src/content/filters.rs

use crate::content::query::{Collection, Condition, DocumentQuery, Sort};
use crate::domain::property::{PropertyStatus, PropertyType};

/// Query-string value meaning "no constraint".
pub const ALL: &str = "all";

/// Preset price ranges offered by the listings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    Under500k,
    From500kTo1m,
    From1mTo2m,
    Over2m,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::Under500k,
        PriceBucket::From500kTo1m,
        PriceBucket::From1mTo2m,
        PriceBucket::Over2m,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "under-500k" => Some(PriceBucket::Under500k),
            "500k-1m" => Some(PriceBucket::From500kTo1m),
            "1m-2m" => Some(PriceBucket::From1mTo2m),
            "over-2m" => Some(PriceBucket::Over2m),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceBucket::Under500k => "under-500k",
            PriceBucket::From500kTo1m => "500k-1m",
            PriceBucket::From1mTo2m => "1m-2m",
            PriceBucket::Over2m => "over-2m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::Under500k => "Under $500,000",
            PriceBucket::From500kTo1m => "$500k - $1M",
            PriceBucket::From1mTo2m => "$1M - $2M",
            PriceBucket::Over2m => "Over $2M",
        }
    }

    /// `(min, max)` bounds, inclusive.
    pub fn bounds(self) -> (Option<f64>, Option<f64>) {
        match self {
            PriceBucket::Under500k => (None, Some(500_000.0)),
            PriceBucket::From500kTo1m => (Some(500_000.0), Some(1_000_000.0)),
            PriceBucket::From1mTo2m => (Some(1_000_000.0), Some(2_000_000.0)),
            PriceBucket::Over2m => (Some(2_000_000.0), None),
        }
    }
}

/// Caller-supplied listing filters. Every field is optional; `None` imposes
/// no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub price_bucket: Option<PriceBucket>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// At least this many bedrooms.
    pub bedrooms: Option<u32>,
    /// At least this many bathrooms.
    pub bathrooms: Option<u32>,
    pub search: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl PropertyFilters {
    /// Reads filters from decoded query-string pairs. Unknown keys, the
    /// sentinel `all`, blanks and unparseable values are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = PropertyFilters::default();

        for (key, raw) in pairs {
            let value = raw.trim();
            if value.is_empty() || value == ALL {
                continue;
            }
            match key {
                "type" => filters.property_type = value.parse().ok(),
                "status" => filters.status = value.parse().ok(),
                "price" => filters.price_bucket = PriceBucket::parse(value),
                "minPrice" => filters.min_price = parse_price(value),
                "maxPrice" => filters.max_price = parse_price(value),
                "bedrooms" => filters.bedrooms = value.parse().ok(),
                "bathrooms" => filters.bathrooms = value.parse().ok(),
                "search" => filters.search = Some(value.to_string()),
                "city" => filters.city = Some(value.to_string()),
                "state" => filters.state = Some(value.to_string()),
                _ => {}
            }
        }

        filters
    }

    /// Effective price bounds: explicit min/max override the bucket.
    pub fn price_bounds(&self) -> (Option<f64>, Option<f64>) {
        let (bucket_min, bucket_max) = self
            .price_bucket
            .map(PriceBucket::bounds)
            .unwrap_or((None, None));
        (self.min_price.or(bucket_min), self.max_price.or(bucket_max))
    }

    pub fn is_empty(&self) -> bool {
        *self == PropertyFilters::default()
    }

    /// The store query for public listings matching these filters.
    pub fn to_query(&self) -> DocumentQuery {
        let mut query = DocumentQuery::new(Collection::Properties)
            .filter(Condition::equals("published", true))
            .sort(Sort::desc("updatedAt"));

        if let Some(t) = self.property_type {
            query = query.filter(Condition::equals("type", t.as_str()));
        }
        if let Some(s) = self.status {
            query = query.filter(Condition::equals("status", s.as_str()));
        }

        let (min_price, max_price) = self.price_bounds();
        if let Some(min) = min_price {
            query = query.filter(Condition::gte("price", min));
        }
        if let Some(max) = max_price {
            query = query.filter(Condition::lte("price", max));
        }

        if let Some(beds) = self.bedrooms {
            query = query.filter(Condition::gte("bedrooms", f64::from(beds)));
        }
        if let Some(baths) = self.bathrooms {
            query = query.filter(Condition::gte("bathrooms", f64::from(baths)));
        }

        if let Some(city) = &self.city {
            query = query.filter(Condition::contains("address.city", city));
        }
        if let Some(state) = &self.state {
            query = query.filter(Condition::contains("address.state", state));
        }

        if let Some(search) = &self.search {
            query = query.filter(Condition::Or(vec![
                Condition::contains("title", search),
                Condition::contains("address.street", search),
                Condition::contains("address.city", search),
            ]));
        }

        query
    }

    /// Human-readable summary of the active filters, in page order.
    pub fn summary_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if let Some(t) = self.property_type {
            parts.push(t.label().to_string());
        }
        if let Some(s) = self.status {
            parts.push(s.label().to_string());
        }
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => parts.push(format!("in {city}, {state}")),
            (Some(city), None) => parts.push(format!("in {city}")),
            (None, Some(state)) => parts.push(format!("in {state}")),
            (None, None) => {}
        }
        if let Some(bucket) = self.price_bucket {
            parts.push(bucket.label().to_string());
        }
        if let Some(beds) = self.bedrooms {
            parts.push(format!("{beds}+ Bedrooms"));
        }
        if let Some(baths) = self.bathrooms {
            parts.push(format!("{baths}+ Bathrooms"));
        }
        if let Some(search) = &self.search {
            parts.push(format!("matching \"{search}\""));
        }

        parts
    }

    pub fn page_title(&self) -> String {
        let parts = self.summary_parts();
        if parts.is_empty() {
            "Browse Properties | Real Estate Listings".to_string()
        } else {
            format!("{} | Real Estate Listings", parts.join(" "))
        }
    }

    /// Query-string pairs for the canonical listings URL: only active
    /// filters, always in the same order.
    pub fn canonical_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.property_type {
            pairs.push(("type", t.as_str().to_string()));
        }
        if let Some(s) = self.status {
            pairs.push(("status", s.as_str().to_string()));
        }
        if let Some(bucket) = self.price_bucket {
            pairs.push(("price", bucket.as_str().to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(beds) = self.bedrooms {
            pairs.push(("bedrooms", beds.to_string()));
        }
        if let Some(baths) = self.bathrooms {
            pairs.push(("bathrooms", baths.to_string()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(state) = &self.state {
            pairs.push(("state", state.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_blank_values_impose_nothing() {
        let filters = PropertyFilters::from_pairs([
            ("type", "all"),
            ("status", "all"),
            ("price", "all"),
            ("bedrooms", "all"),
            ("city", "  "),
            ("utm_source", "mail"),
        ]);
        assert!(filters.is_empty());

        let q = filters.to_query();
        assert_eq!(q.conditions, vec![Condition::equals("published", true)]);
        assert_eq!(q.sort, Some(Sort::desc("updatedAt")));
    }

    #[test]
    fn page_parameters_become_conditions() {
        let filters = PropertyFilters::from_pairs([
            ("type", "condo"),
            ("status", "for-rent"),
            ("price", "500k-1m"),
            ("bedrooms", "2"),
            ("bathrooms", "1"),
            ("city", "Austin"),
            ("state", "TX"),
            ("search", "loft"),
        ]);

        let q = filters.to_query();
        assert!(q.conditions.contains(&Condition::equals("type", "condo")));
        assert!(q.conditions.contains(&Condition::equals("status", "for-rent")));
        assert!(q.conditions.contains(&Condition::gte("price", 500_000.0)));
        assert!(q.conditions.contains(&Condition::lte("price", 1_000_000.0)));
        assert!(q.conditions.contains(&Condition::gte("bedrooms", 2.0)));
        assert!(q.conditions.contains(&Condition::gte("bathrooms", 1.0)));
        assert!(q.conditions.contains(&Condition::contains("address.city", "Austin")));
        assert!(q.conditions.contains(&Condition::contains("address.state", "TX")));
        assert!(q.conditions.contains(&Condition::Or(vec![
            Condition::contains("title", "loft"),
            Condition::contains("address.street", "loft"),
            Condition::contains("address.city", "loft"),
        ])));
    }

    #[test]
    fn explicit_bounds_override_bucket_independently() {
        let filters = PropertyFilters::from_pairs([("price", "over-2m"), ("maxPrice", "3,500,000")]);
        assert_eq!(filters.price_bounds(), (Some(2_000_000.0), Some(3_500_000.0)));

        let only_max = PropertyFilters {
            max_price: Some(250_000.0),
            ..Default::default()
        };
        let q = only_max.to_query();
        assert!(q.conditions.contains(&Condition::lte("price", 250_000.0)));
        assert!(!q
            .conditions
            .iter()
            .any(|c| matches!(c, Condition::GreaterThanEqual { field, .. } if field == "price")));
    }

    #[test]
    fn invalid_values_are_dropped() {
        let filters = PropertyFilters::from_pairs([
            ("type", "castle"),
            ("bedrooms", "two"),
            ("minPrice", "-5"),
            ("price", "cheap"),
        ]);
        assert!(filters.is_empty());
    }

    #[test]
    fn title_summarises_active_filters() {
        assert_eq!(
            PropertyFilters::default().page_title(),
            "Browse Properties | Real Estate Listings"
        );

        let filters = PropertyFilters::from_pairs([
            ("type", "house"),
            ("status", "for-sale"),
            ("city", "Denver"),
            ("state", "CO"),
            ("price", "under-500k"),
            ("bedrooms", "3"),
        ]);
        assert_eq!(
            filters.page_title(),
            "House For Sale in Denver, CO Under $500,000 3+ Bedrooms | Real Estate Listings"
        );
    }

    #[test]
    fn canonical_pairs_are_ordered() {
        let filters = PropertyFilters::from_pairs([
            ("search", "view"),
            ("city", "Reno"),
            ("type", "land"),
        ]);
        assert_eq!(
            filters.canonical_pairs(),
            vec![
                ("type", "land".to_string()),
                ("city", "Reno".to_string()),
                ("search", "view".to_string())
            ]
        );
    }
}
