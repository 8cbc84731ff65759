// src/app.rs
use tracing::{info, warn};
use url::Url;

use crate::config::{AppConfig, ContentBackend};
use crate::content::media::MediaResolver;
use crate::content::normalize::Normalizer;
use crate::content::payload::PayloadClient;
use crate::content::{ContentService, ContentStore};
use crate::db::{Database, SqliteContentStore};
use crate::errors::ServerError;

/// Everything a request handler needs, shared across worker threads.
pub struct AppContext {
    pub db: Database,
    pub content: ContentService<Box<dyn ContentStore>>,
    pub site_url: Option<Url>,
    pub admin_token: Option<String>,
}

impl AppContext {
    pub fn new(
        db: Database,
        store: Box<dyn ContentStore>,
        site_url: Option<Url>,
        admin_token: Option<String>,
    ) -> Self {
        let normalizer = Normalizer::new(MediaResolver::new(site_url.as_ref()));
        Self {
            db,
            content: ContentService::new(store, normalizer),
            site_url,
            admin_token,
        }
    }

    /// Wires the configured content backend. The database schema must
    /// already be applied.
    pub fn from_config(config: &AppConfig, db: Database) -> Result<Self, ServerError> {
        let store: Box<dyn ContentStore> = match &config.content_backend {
            ContentBackend::Sqlite => {
                let store = SqliteContentStore::new(db.clone());
                if let Some(seed) = &config.seed_file {
                    store.import_seed_file(seed)?;
                }
                info!(db = db.path(), "content backend: sqlite");
                Box::new(store)
            }
            ContentBackend::Payload { api_url } => {
                if config.seed_file.is_some() {
                    warn!("SEED_FILE is ignored with the payload backend");
                }
                info!(%api_url, "content backend: payload");
                Box::new(PayloadClient::new(api_url.clone(), config.content_timeout)?)
            }
        };

        Ok(Self::new(
            db,
            store,
            config.site_url.clone(),
            config.admin_token.clone(),
        ))
    }

    /// Absolute URL for `path` when a site URL is configured, else `path`.
    pub fn url_for(&self, path: &str) -> String {
        match &self.site_url {
            Some(base) => base
                .join(path)
                .map(String::from)
                .unwrap_or_else(|_| path.to_string()),
            None => path.to_string(),
        }
    }
}
