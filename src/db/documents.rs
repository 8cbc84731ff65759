// src/db/documents.rs
//
// SQLite-backed content store. Documents live as JSON bodies in the
// `documents` table and queries are evaluated with `json_extract`.

use chrono::Utc;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, OptionalExtension};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::content::collections::{prepare_document, WriteOp};
use crate::content::query::{Collection, Condition, DocumentQuery};
use crate::content::slug::slugify;
use crate::content::store::{ContentStore, FindResponse, StoreError};
use crate::db::connection::Database;
use crate::errors::ServerError;

pub struct SqliteContentStore {
    db: Database,
}

/// Shape of a seed file: `{"properties": [...], "blogs": [...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub properties: Vec<Value>,
    #[serde(default)]
    pub blogs: Vec<Value>,
}

impl SqliteContentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Creates or updates a document, running the collection hooks first.
    ///
    /// The target row is picked by `id` when given, else by slug, so
    /// re-importing the same seed updates in place. Updates are merged over
    /// the stored body. Returns the stored id.
    pub fn save_document(&self, collection: Collection, doc: Value) -> Result<String, StoreError> {
        let Value::Object(mut doc) = doc else {
            return Err(StoreError::Validation("document must be a JSON object".to_string()));
        };

        let given_id = doc.get("id").and_then(id_string);
        let slug_hint = doc
            .get("slug")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| doc.get("title").and_then(Value::as_str).map(slugify));

        self.db
            .with_conn(|conn| {
                let tx = conn.transaction()?;

                let existing = match &given_id {
                    Some(id) => find_row_by_id(&tx, collection, id)?,
                    None => match &slug_hint {
                        Some(slug) => find_row_by_slug(&tx, collection, slug)?,
                        None => None,
                    },
                };

                let (op, id) = match (&existing, given_id) {
                    (Some(row), _) => (WriteOp::Update, row.id.clone()),
                    (None, Some(id)) => (WriteOp::Create, id),
                    (None, None) => (WriteOp::Create, next_id(&tx, collection)?),
                };

                if let Some(row) = existing {
                    let mut merged = row.body;
                    merged.extend(doc);
                    doc = merged;
                }
                doc.insert("id".to_string(), Value::String(id.clone()));

                let doc = prepare_document(collection, op, doc, Utc::now())?;
                write_row(&tx, collection, &id, &doc)?;
                tx.commit()?;

                debug!(collection = collection.as_str(), %id, ?op, "document saved");
                Ok(id)
            })
            .map_err(into_store_error)
    }

    /// Imports every document of a parsed seed, properties first.
    pub fn import_seed(&self, seed: SeedFile) -> Result<usize, StoreError> {
        let mut count = 0;
        for doc in seed.properties {
            self.save_document(Collection::Properties, doc)?;
            count += 1;
        }
        for doc in seed.blogs {
            self.save_document(Collection::Blogs, doc)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn import_seed_file(&self, path: &Path) -> Result<usize, StoreError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| StoreError::Database(format!("reading seed {}: {e}", path.display())))?;
        let seed: SeedFile = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Decode(format!("seed {}: {e}", path.display())))?;

        let count = self.import_seed(seed)?;
        info!(seed = %path.display(), documents = count, "seed imported");
        Ok(count)
    }
}

impl ContentStore for SqliteContentStore {
    fn find(&self, query: &DocumentQuery) -> Result<FindResponse, StoreError> {
        let mut where_sql = String::from("collection = ?");
        let mut args: Vec<SqlValue> = vec![SqlValue::Text(query.collection.as_str().to_string())];

        for condition in &query.conditions {
            where_sql.push_str(" AND ");
            compile_condition(condition, &mut where_sql, &mut args)?;
        }

        let mut order_sql = String::new();
        let mut order_args: Vec<SqlValue> = Vec::new();
        if let Some(sort) = &query.sort {
            order_sql.push_str("json_extract(body, ?)");
            order_sql.push_str(if sort.descending { " DESC, " } else { " ASC, " });
            order_args.push(SqlValue::Text(json_path(&sort.field)?));
        }
        order_sql.push_str("updated_at DESC");

        let limit = query.limit as i64;

        self.db
            .with_conn(|conn| {
                let total: i64 = conn.query_row(
                    &format!("SELECT COUNT(*) FROM documents WHERE {where_sql}"),
                    params_from_iter(args.iter()),
                    |row| row.get(0),
                )?;

                let sql = format!(
                    "SELECT body FROM documents WHERE {where_sql} ORDER BY {order_sql} LIMIT ?"
                );
                let mut stmt = conn.prepare(&sql)?;
                let all_args = args
                    .iter()
                    .cloned()
                    .chain(order_args.iter().cloned())
                    .chain(std::iter::once(SqlValue::Integer(limit)));
                let bodies = stmt
                    .query_map(params_from_iter(all_args), |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>()?;

                let docs = bodies
                    .iter()
                    .map(|b| serde_json::from_str::<Value>(b))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| StoreError::Decode(e.to_string()))?;

                let total = total.max(0) as u64;
                let limit = limit.max(1) as u64;
                Ok(FindResponse {
                    docs,
                    total_docs: Some(total),
                    limit: Some(limit),
                    total_pages: Some(total.div_ceil(limit)),
                    page: Some(1),
                    has_prev_page: Some(false),
                    has_next_page: Some(total > limit),
                })
            })
            .map_err(into_store_error)
    }

    fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        self.db
            .with_conn(|conn| {
                let body: Option<String> = conn
                    .query_row(
                        "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                        params![collection.as_str(), id],
                        |row| row.get(0),
                    )
                    .optional()?;

                body.map(|b| serde_json::from_str(&b))
                    .transpose()
                    .map_err(|e| StoreError::Decode(e.to_string()).into())
            })
            .map_err(into_store_error)
    }
}

struct ExistingRow {
    id: String,
    body: Map<String, Value>,
}

fn existing_row(row: &rusqlite::Row<'_>) -> Result<ExistingRow, rusqlite::Error> {
    let id: String = row.get(0)?;
    let raw: String = row.get(1)?;
    let body = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    Ok(ExistingRow { id, body })
}

fn find_row_by_id(
    conn: &Connection,
    collection: Collection,
    id: &str,
) -> Result<Option<ExistingRow>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, body FROM documents WHERE collection = ?1 AND id = ?2",
        params![collection.as_str(), id],
        existing_row,
    )
    .optional()
}

fn find_row_by_slug(
    conn: &Connection,
    collection: Collection,
    slug: &str,
) -> Result<Option<ExistingRow>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, body FROM documents WHERE collection = ?1 AND slug = ?2",
        params![collection.as_str(), slug],
        existing_row,
    )
    .optional()
}

/// Numeric ids, one sequence per collection.
fn next_id(conn: &Connection, collection: Collection) -> Result<String, rusqlite::Error> {
    let max: i64 = conn.query_row(
        "SELECT COALESCE(MAX(CAST(id AS INTEGER)), 0) FROM documents WHERE collection = ?1",
        params![collection.as_str()],
        |row| row.get(0),
    )?;
    Ok((max + 1).to_string())
}

fn write_row(
    conn: &Connection,
    collection: Collection,
    id: &str,
    doc: &Map<String, Value>,
) -> Result<(), ServerError> {
    let text = |key: &str| doc.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
    let body = serde_json::to_string(doc).map_err(|e| StoreError::Decode(e.to_string()))?;
    let slug = text("slug");

    let result = conn.execute(
        "INSERT INTO documents (collection, id, slug, body, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT (collection, id) DO UPDATE SET
            slug = excluded.slug,
            body = excluded.body,
            created_at = excluded.created_at,
            updated_at = excluded.updated_at",
        params![
            collection.as_str(),
            id,
            slug,
            body,
            text("createdAt"),
            text("updatedAt")
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(StoreError::Validation(format!(
                "slug '{slug}' is already used in {}",
                collection.as_str()
            ))
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `address.city` -> `$.address.city`. Only plain identifiers are allowed.
fn json_path(field: &str) -> Result<String, StoreError> {
    let valid = !field.is_empty()
        && field.split('.').all(|part| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if !valid {
        return Err(StoreError::InvalidField(field.to_string()));
    }
    Ok(format!("$.{field}"))
}

fn compile_condition(
    condition: &Condition,
    sql: &mut String,
    args: &mut Vec<SqlValue>,
) -> Result<(), StoreError> {
    match condition {
        Condition::Equals { field, value } => {
            args.push(SqlValue::Text(json_path(field)?));
            match json_to_sql(value) {
                Some(v) => {
                    sql.push_str("json_extract(body, ?) = ?");
                    args.push(v);
                }
                None => sql.push_str("json_extract(body, ?) IS NULL"),
            }
        }
        Condition::GreaterThanEqual { field, value } => {
            sql.push_str("json_extract(body, ?) >= ?");
            args.push(SqlValue::Text(json_path(field)?));
            args.push(SqlValue::Real(*value));
        }
        Condition::LessThanEqual { field, value } => {
            sql.push_str("json_extract(body, ?) <= ?");
            args.push(SqlValue::Text(json_path(field)?));
            args.push(SqlValue::Real(*value));
        }
        Condition::Contains { field, value } => {
            sql.push_str("instr(lower(json_extract(body, ?)), lower(?)) > 0");
            args.push(SqlValue::Text(json_path(field)?));
            args.push(SqlValue::Text(value.clone()));
        }
        Condition::Or(members) => {
            if members.is_empty() {
                sql.push_str("0");
                return Ok(());
            }
            sql.push('(');
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    sql.push_str(" OR ");
                }
                compile_condition(member, sql, args)?;
            }
            sql.push(')');
        }
    }
    Ok(())
}

/// `json_extract` yields 1/0 for booleans and native numbers/text otherwise.
fn json_to_sql(value: &Value) -> Option<SqlValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Some(SqlValue::Text(s.clone())),
        other => Some(SqlValue::Text(other.to_string())),
    }
}

fn into_store_error(err: ServerError) -> StoreError {
    match err {
        ServerError::Store(e) => e,
        other => StoreError::Database(other.to_string()),
    }
}
