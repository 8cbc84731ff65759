// src/content/media.rs

use std::collections::HashMap;

use serde::Deserialize;
use url::Url;

use crate::content::documents::{null_default, DocId, Relation};

/// The derived size preferred for cards and detail pages.
pub const PREFERRED_SIZE: &str = "medium";

/// An uploaded asset as the store expands it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaDoc {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub sizes: HashMap<String, MediaSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaSize {
    #[serde(default)]
    pub url: Option<String>,
}

impl MediaDoc {
    /// The preferred derived size when present, else the canonical URL.
    pub fn best_url(&self) -> Option<&str> {
        self.sizes
            .get(PREFERRED_SIZE)
            .and_then(|s| s.url.as_deref())
            .filter(|u| !u.is_empty())
            .or_else(|| self.url.as_deref().filter(|u| !u.is_empty()))
    }
}

/// Qualifies media references into displayable URLs.
#[derive(Debug, Clone, Default)]
pub struct MediaResolver {
    base: Option<String>,
}

impl MediaResolver {
    pub fn new(base: Option<&Url>) -> Self {
        Self {
            base: base.map(|u| u.as_str().trim_end_matches('/').to_string()),
        }
    }

    /// Resolves a media relation. An expanded object yields its preferred URL;
    /// a bare string is treated as either a URL, a path or an identifier.
    pub fn resolve(&self, media: &Relation<MediaDoc>) -> String {
        match media {
            Relation::Reference(raw) => self.normalize_url(&raw.0),
            Relation::Expanded(doc) => self.normalize_url(doc.best_url().unwrap_or("")),
        }
    }

    pub fn resolve_opt(&self, media: Option<&Relation<MediaDoc>>) -> String {
        media.map(|m| self.resolve(m)).unwrap_or_default()
    }

    pub fn normalize_url(&self, url: &str) -> String {
        let url = url.trim();
        if url.is_empty() {
            return String::new();
        }

        // Object-storage, CDN and other absolute URLs are already displayable.
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }

        let api_path = if url.starts_with("/api/media/") {
            url.to_string()
        } else if let Some(rest) = url.strip_prefix("/media/") {
            format!("/api/media/{rest}")
        } else if url.starts_with('/') {
            format!("/api{url}")
        } else {
            format!("/api/media/{url}")
        };

        match &self.base {
            Some(base) => format!("{base}{api_path}"),
            None => api_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MediaResolver {
        let base = Url::parse("https://homes.example.com/").unwrap();
        MediaResolver::new(Some(&base))
    }

    #[test]
    fn absolute_urls_pass_through() {
        let r = resolver();
        let s3 = "https://bucket.s3.us-east-1.amazonaws.com/media/house.jpg";
        assert_eq!(r.normalize_url(s3), s3);
        assert_eq!(r.normalize_url("http://cdn.example.net/a.png"), "http://cdn.example.net/a.png");
        // Idempotent on its own output.
        let once = r.normalize_url("/media/house.jpg");
        assert_eq!(r.normalize_url(&once), once);
    }

    #[test]
    fn relative_paths_are_qualified() {
        let r = resolver();
        assert_eq!(
            r.normalize_url("/api/media/file/house.jpg"),
            "https://homes.example.com/api/media/file/house.jpg"
        );
        assert_eq!(
            r.normalize_url("/media/house.jpg"),
            "https://homes.example.com/api/media/house.jpg"
        );
        assert_eq!(
            r.normalize_url("/uploads/x.png"),
            "https://homes.example.com/api/uploads/x.png"
        );
        assert_eq!(
            r.normalize_url("65f0c1a2"),
            "https://homes.example.com/api/media/65f0c1a2"
        );
    }

    #[test]
    fn without_base_the_api_path_is_returned() {
        let r = MediaResolver::default();
        assert_eq!(r.normalize_url("/media/a.jpg"), "/api/media/a.jpg");
        assert_eq!(r.normalize_url("abc"), "/api/media/abc");
        assert_eq!(r.normalize_url(""), "");
    }

    #[test]
    fn expanded_media_prefers_medium_size() {
        let r = resolver();
        let mut doc = MediaDoc {
            id: Some(DocId("m1".into())),
            url: Some("https://cdn.example.net/full.jpg".into()),
            ..Default::default()
        };
        assert_eq!(
            r.resolve(&Relation::Expanded(doc.clone())),
            "https://cdn.example.net/full.jpg"
        );

        doc.sizes.insert(
            "thumbnail".into(),
            MediaSize {
                url: Some("https://cdn.example.net/thumb.jpg".into()),
            },
        );
        doc.sizes.insert(
            "medium".into(),
            MediaSize {
                url: Some("https://cdn.example.net/medium.jpg".into()),
            },
        );
        let media = Relation::Expanded(doc);
        assert_eq!(r.resolve(&media), "https://cdn.example.net/medium.jpg");
        assert_eq!(r.resolve(&media), r.resolve(&media));
    }

    #[test]
    fn expanded_media_without_urls_is_empty() {
        let r = resolver();
        assert_eq!(r.resolve(&Relation::Expanded(MediaDoc::default())), "");
        assert_eq!(r.resolve_opt(None), "");
    }
}
