// src/content/mod.rs
pub mod collections;
pub mod documents;
pub mod filters;
pub mod media;
pub mod normalize;
pub mod payload;
pub mod query;
pub mod richtext;
pub mod service;
pub mod slug;
pub mod store;

pub use filters::PropertyFilters;
pub use service::ContentService;
pub use store::{ContentStore, StoreError};
