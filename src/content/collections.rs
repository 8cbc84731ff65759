// src/content/collections.rs

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::content::query::Collection;
use crate::content::slug::slugify;
use crate::content::store::StoreError;
use crate::domain::property::{PropertyStatus, PropertyType};

pub const MIN_YEAR_BUILT: i64 = 1800;

/// Whether a write creates a new document or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
}

/// Runs the collection hooks and validation on a document about to be
/// written. `now` stamps `updatedAt` (and `createdAt` on create).
pub fn prepare_document(
    collection: Collection,
    op: WriteOp,
    mut doc: Map<String, Value>,
    now: DateTime<Utc>,
) -> Result<Map<String, Value>, StoreError> {
    let title = doc
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| StoreError::Validation("title is required".to_string()))?
        .to_string();

    // Slug: derived from the title only when absent.
    let has_slug = doc
        .get("slug")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !has_slug {
        let slug = slugify(&title);
        if slug.is_empty() {
            return Err(StoreError::Validation(format!(
                "cannot derive a slug from title '{title}'"
            )));
        }
        doc.insert("slug".to_string(), Value::String(slug));
    }

    match collection {
        Collection::Properties => validate_property(&doc, now)?,
        Collection::Blogs => before_change_blog(&mut doc, op, now),
    }

    let stamp = Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true));
    if op == WriteOp::Create || !doc.contains_key("createdAt") {
        doc.insert("createdAt".to_string(), stamp.clone());
    }
    doc.insert("updatedAt".to_string(), stamp);

    Ok(doc)
}

/// A published post created without a publish date is published "now".
fn before_change_blog(doc: &mut Map<String, Value>, op: WriteOp, now: DateTime<Utc>) {
    let published = doc.get("published").and_then(Value::as_bool).unwrap_or(false);
    let has_published_at = doc.get("publishedAt").is_some_and(|v| !v.is_null());

    if op == WriteOp::Create && published && !has_published_at {
        doc.insert(
            "publishedAt".to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }
}

fn validate_property(doc: &Map<String, Value>, now: DateTime<Utc>) -> Result<(), StoreError> {
    let required_str = |key: &str| -> Result<String, StoreError> {
        doc.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StoreError::Validation(format!("{key} is required")))
    };

    let kind = required_str("type")?;
    kind.parse::<PropertyType>()
        .map_err(|e| StoreError::Validation(format!("type: {e}")))?;
    let status = required_str("status")?;
    status
        .parse::<PropertyStatus>()
        .map_err(|e| StoreError::Validation(format!("status: {e}")))?;

    for key in ["price", "bedrooms", "bathrooms", "sqft"] {
        if !doc.get(key).is_some_and(Value::is_number) {
            return Err(StoreError::Validation(format!("{key} is required")));
        }
    }

    for key in ["price", "lotSize"] {
        if let Some(n) = number(doc, key)? {
            non_negative(key, n)?;
        }
    }

    // Counts are stored as JSON integers so they decode as unsigned fields.
    for key in ["bedrooms", "bathrooms", "sqft", "parking"] {
        if let Some(n) = number(doc, key)? {
            non_negative(key, n)?;
            integer(doc, key, n)?;
        }
    }

    if let Some(year) = number(doc, "yearBuilt")? {
        integer(doc, "yearBuilt", year)?;
        let max_year = now.year() + 1;
        if !(MIN_YEAR_BUILT as f64..=f64::from(max_year)).contains(&year) {
            return Err(StoreError::Validation(format!(
                "Year Built must be between {MIN_YEAR_BUILT} and {max_year}"
            )));
        }
    }

    Ok(())
}

/// A numeric field's value; `null` counts as absent, anything else non-numeric is rejected.
fn number(doc: &Map<String, Value>, key: &str) -> Result<Option<f64>, StoreError> {
    match doc.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| StoreError::Validation(format!("{key} must be a number"))),
    }
}

fn non_negative(key: &str, n: f64) -> Result<(), StoreError> {
    if n < 0.0 {
        return Err(StoreError::Validation(format!(
            "{key} must be at least 0 (got {n})"
        )));
    }
    Ok(())
}

fn integer(doc: &Map<String, Value>, key: &str, n: f64) -> Result<(), StoreError> {
    let fits = doc
        .get(key)
        .and_then(Value::as_i64)
        .is_some_and(|v| u32::try_from(v.unsigned_abs()).is_ok());
    if !fits {
        return Err(StoreError::Validation(format!(
            "{key} must be a whole number (got {n})"
        )));
    }
    Ok(())
}
