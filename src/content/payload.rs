// src/content/payload.rs
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::content::query::{Collection, DocumentQuery, DEFAULT_DEPTH};
use crate::content::store::{ContentStore, FindResponse, StoreError};

const USER_AGENT: &str = concat!("realty_site/", env!("CARGO_PKG_VERSION"));

/// Client for a Payload-style REST API (`{api}/{collection}?where[...]`).
pub struct PayloadClient {
    client: Client,
    api_url: Url,
}

impl PayloadClient {
    pub fn new(api_url: Url, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self { client, api_url })
    }

    fn collection_url(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Network(format!("'{}' cannot be a base URL", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn find_url(&self, query: &DocumentQuery) -> Result<Url, StoreError> {
        let mut url = self.collection_url(&[query.collection.as_str()])?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        Ok(url)
    }

    pub fn find_by_id_url(&self, collection: Collection, id: &str) -> Result<Url, StoreError> {
        let mut url = self.collection_url(&[collection.as_str(), id])?;
        url.query_pairs_mut()
            .append_pair("depth", &DEFAULT_DEPTH.to_string());
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Option<Value>, StoreError> {
        debug!(%url, "content store request");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<Value>()
            .map(Some)
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl ContentStore for PayloadClient {
    fn find(&self, query: &DocumentQuery) -> Result<FindResponse, StoreError> {
        let url = self.find_url(query)?;
        let body = self.get(url)?.ok_or(StoreError::Status {
            status: 404,
            body: format!("collection '{}' not found", query.collection.as_str()),
        })?;
        serde_json::from_value(body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let url = self.find_by_id_url(collection, id)?;
        self.get(url)
    }
}
