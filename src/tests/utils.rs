use crate::app::AppContext;
use crate::db::connection::{init_db, Database};
use crate::db::documents::{SeedFile, SqliteContentStore};
use astra::Body;
use http::{Method, Request};
use serde_json::{json, Value};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const ADMIN_TOKEN: &str = "test-admin-token";

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh database file initialised from the production schema.
pub fn init_test_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let n = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("realty_site_test_{nanos}_{n}.sqlite"));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// An app backed by the SQLite content store holding `seed`.
pub fn test_app(seed: SeedFile) -> AppContext {
    let db = init_test_db();
    let store = SqliteContentStore::new(db.clone());
    store.import_seed(seed).expect("seed import failed");

    AppContext::new(db, Box::new(store), None, Some(ADMIN_TOKEN.to_string()))
}

pub fn sample_seed() -> SeedFile {
    SeedFile {
        properties: vec![
            property("Sunny Bungalow", "house", "for-sale", 450_000, 3, "Austin", true, true),
            property("Harbour Condo", "condo", "for-rent", 850_000, 2, "San Diego", true, false),
            property("Ranch Estate", "house", "for-sale", 2_400_000, 5, "Austin", true, false),
            property("Secret Draft", "house", "for-sale", 500_000, 3, "Austin", false, true),
        ],
        blogs: vec![
            json!({
                "title": "First-Time Buyer Guide",
                "excerpt": "Everything you need to know.",
                "content": {
                    "root": { "children": [
                        { "type": "paragraph", "children": [ { "type": "text", "text": "Rates & fees", "format": 1 } ] }
                    ] }
                },
                "author": { "name": "Jordan Lee" },
                "category": { "name": "Guides" },
                "tags": [ { "tag": "buying" } ],
                "featured": true,
                "published": true
            }),
            json!({ "title": "Unpublished Thoughts", "published": false }),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
pub fn property(
    title: &str,
    kind: &str,
    status: &str,
    price: u64,
    bedrooms: u32,
    city: &str,
    published: bool,
    featured: bool,
) -> Value {
    json!({
        "title": title,
        "type": kind,
        "status": status,
        "price": price,
        "bedrooms": bedrooms,
        "bathrooms": 2,
        "sqft": 1600,
        "address": { "street": "1 Main St", "city": city, "state": "CA", "zipCode": "90000", "country": "USA" },
        "featuredImage": { "url": "/media/front.jpg" },
        "features": [ { "feature": "Garage" } ],
        "published": published,
        "featured": featured
    })
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
