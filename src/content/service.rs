// src/content/service.rs

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::content::documents::{BlogDoc, PropertyDoc};
use crate::content::filters::PropertyFilters;
use crate::content::normalize::Normalizer;
use crate::content::query::{Collection, Condition, DocumentQuery, Sort};
use crate::content::store::ContentStore;
use crate::domain::blog::BlogPost;
use crate::domain::property::Property;

/// Public read operations over the content store.
///
/// Never fails: store errors are logged and degrade to an empty list or
/// `None`, undecodable documents are skipped, and every returned document
/// is re-checked against the query so unpublished content cannot leak
/// through a store that ignores a condition.
pub struct ContentService<S> {
    store: S,
    normalizer: Normalizer,
}

impl<S: ContentStore> ContentService<S> {
    pub fn new(store: S, normalizer: Normalizer) -> Self {
        Self { store, normalizer }
    }

    pub fn list_properties(&self, filters: &PropertyFilters) -> Vec<Property> {
        self.fetch::<PropertyDoc>(&filters.to_query())
            .iter()
            .map(|doc| self.normalizer.property(doc))
            .collect()
    }

    pub fn get_property_by_slug(&self, slug: &str) -> Option<Property> {
        let query = DocumentQuery::new(Collection::Properties)
            .filter(Condition::equals("slug", slug))
            .filter(Condition::equals("published", true))
            .limit(1);

        self.fetch::<PropertyDoc>(&query)
            .first()
            .map(|doc| self.normalizer.property(doc))
    }

    pub fn get_property_by_id(&self, id: &str) -> Option<Property> {
        let raw = match self.store.find_by_id(Collection::Properties, id) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(collection = "properties", id, error = %e, "find_by_id failed");
                return None;
            }
        };

        if !Condition::equals("published", true).matches(&raw) {
            debug!(id, "property is not published");
            return None;
        }

        decode::<PropertyDoc>(Collection::Properties, raw).map(|doc| self.normalizer.property(&doc))
    }

    pub fn list_featured_properties(&self, limit: usize) -> Vec<Property> {
        let query = DocumentQuery::new(Collection::Properties)
            .filter(Condition::equals("published", true))
            .filter(Condition::equals("featured", true))
            .sort(Sort::desc("updatedAt"))
            .limit(limit);

        self.fetch::<PropertyDoc>(&query)
            .iter()
            .map(|doc| self.normalizer.property(doc))
            .collect()
    }

    pub fn list_blogs(&self) -> Vec<BlogPost> {
        let query = DocumentQuery::new(Collection::Blogs)
            .filter(Condition::equals("published", true))
            .sort(Sort::desc("publishedAt"));

        self.fetch::<BlogDoc>(&query)
            .iter()
            .map(|doc| self.normalizer.blog(doc))
            .collect()
    }

    pub fn get_blog_by_slug(&self, slug: &str) -> Option<BlogPost> {
        let query = DocumentQuery::new(Collection::Blogs)
            .filter(Condition::equals("slug", slug))
            .filter(Condition::equals("published", true))
            .limit(1);

        self.fetch::<BlogDoc>(&query)
            .first()
            .map(|doc| self.normalizer.blog(doc))
    }

    pub fn list_featured_blogs(&self, limit: usize) -> Vec<BlogPost> {
        let query = DocumentQuery::new(Collection::Blogs)
            .filter(Condition::equals("published", true))
            .filter(Condition::equals("featured", true))
            .sort(Sort::desc("publishedAt"))
            .limit(limit);

        self.fetch::<BlogDoc>(&query)
            .iter()
            .map(|doc| self.normalizer.blog(doc))
            .collect()
    }

    fn fetch<T: DeserializeOwned>(&self, query: &DocumentQuery) -> Vec<T> {
        let collection = query.collection;

        let response = match self.store.find(query) {
            Ok(resp) => resp,
            Err(e) => {
                warn!(collection = collection.as_str(), error = %e, "content query failed");
                return Vec::new();
            }
        };

        debug!(
            collection = collection.as_str(),
            returned = response.docs.len(),
            total = ?response.total_docs,
            "content query"
        );

        response
            .docs
            .into_iter()
            .filter(|doc| query.conditions.iter().all(|c| c.matches(doc)))
            .take(query.limit)
            .filter_map(|doc| decode(collection, doc))
            .collect()
    }
}

fn decode<T: DeserializeOwned>(collection: Collection, raw: Value) -> Option<T> {
    let id = raw.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value(raw) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(collection = collection.as_str(), %id, error = %e, "skipping malformed document");
            None
        }
    }
}
