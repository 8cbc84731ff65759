// src/content/store.rs

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::content::query::{Collection, DocumentQuery};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed store response: {0}")]
    Decode(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid field path '{0}'")]
    InvalidField(String),

    #[error("Document rejected: {0}")]
    Validation(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// One page of matching documents plus the store's paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    #[serde(default)]
    pub docs: Vec<Value>,
    #[serde(default)]
    pub total_docs: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub has_prev_page: Option<bool>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

/// Read access to a document store holding properties and blog posts.
pub trait ContentStore: Send + Sync {
    fn find(&self, query: &DocumentQuery) -> Result<FindResponse, StoreError>;

    fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError>;
}

impl<S: ContentStore + ?Sized> ContentStore for Box<S> {
    fn find(&self, query: &DocumentQuery) -> Result<FindResponse, StoreError> {
        (**self).find(query)
    }

    fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        (**self).find_by_id(collection, id)
    }
}
