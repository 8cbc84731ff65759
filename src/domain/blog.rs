// src/domain/blog.rs

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
}

/// A blog post flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Flattened HTML.
    pub content: String,
    pub author: Author,
    pub category: String,
    pub tags: Vec<String>,
    /// Publish time, or the creation time when no publish time was stored.
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: Option<u32>,
    pub image: String,
    pub featured: bool,
    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl BlogPost {
    pub fn page_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }
}
