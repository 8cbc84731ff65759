// src/content/query.rs

use serde_json::Value;

/// Default page size for list pages.
pub const LIST_LIMIT: usize = 100;

/// Relation expansion depth requested from the store.
pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Properties,
    Blogs,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Properties => "properties",
            Collection::Blogs => "blogs",
        }
    }
}

/// A single predicate on a (possibly dotted) document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals { field: String, value: Value },
    GreaterThanEqual { field: String, value: f64 },
    LessThanEqual { field: String, value: f64 },
    /// Case-insensitive substring match.
    Contains { field: String, value: String },
    /// Matches when any member matches.
    Or(Vec<Condition>),
}

impl Condition {
    pub fn equals(field: &str, value: impl Into<Value>) -> Self {
        Condition::Equals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn gte(field: &str, value: f64) -> Self {
        Condition::GreaterThanEqual {
            field: field.to_string(),
            value,
        }
    }

    pub fn lte(field: &str, value: f64) -> Self {
        Condition::LessThanEqual {
            field: field.to_string(),
            value,
        }
    }

    pub fn contains(field: &str, value: &str) -> Self {
        Condition::Contains {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Evaluates the condition against an in-memory JSON document.
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Condition::Equals { field, value } => lookup(doc, field) == Some(value),
            Condition::GreaterThanEqual { field, value } => lookup(doc, field)
                .and_then(Value::as_f64)
                .is_some_and(|v| v >= *value),
            Condition::LessThanEqual { field, value } => lookup(doc, field)
                .and_then(Value::as_f64)
                .is_some_and(|v| v <= *value),
            Condition::Contains { field, value } => lookup(doc, field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&value.to_lowercase())),
            Condition::Or(any) => any.iter().any(|c| c.matches(doc)),
        }
    }
}

/// Follows a dotted path (`address.city`) into a JSON object.
pub fn lookup<'a>(doc: &'a Value, field: &str) -> Option<&'a Value> {
    field
        .split('.')
        .try_fold(doc, |current, key| current.get(key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub descending: bool,
}

impl Sort {
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }

    /// `-field` for descending, `field` for ascending.
    pub fn to_param(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.clone()
        }
    }
}

/// A read against one collection: every condition must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentQuery {
    pub collection: Collection,
    pub conditions: Vec<Condition>,
    pub sort: Option<Sort>,
    pub limit: usize,
    pub depth: u8,
}

impl DocumentQuery {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            conditions: Vec::new(),
            sort: None,
            limit: LIST_LIMIT,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Encodes the query in the REST `where[...]` convention:
    /// `where[price][greater_than_equal]=100`, `where[or][0][title][contains]=x`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut or_groups = 0usize;

        for condition in &self.conditions {
            match condition {
                Condition::Or(members) => {
                    // A second OR group has to be nested under an explicit AND
                    // or it would merge with the first.
                    let prefix = if or_groups == 0 {
                        "where[or]".to_string()
                    } else {
                        format!("where[and][{or_groups}][or]")
                    };
                    for (i, member) in members.iter().enumerate() {
                        push_condition(&mut pairs, &format!("{prefix}[{i}]"), member);
                    }
                    or_groups += 1;
                }
                other => push_condition(&mut pairs, "where", other),
            }
        }

        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.to_param()));
        }
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs.push(("depth".to_string(), self.depth.to_string()));
        pairs
    }
}

fn push_condition(pairs: &mut Vec<(String, String)>, prefix: &str, condition: &Condition) {
    match condition {
        Condition::Equals { field, value } => pairs.push((
            format!("{prefix}[{field}][equals]"),
            value_param(value),
        )),
        Condition::GreaterThanEqual { field, value } => pairs.push((
            format!("{prefix}[{field}][greater_than_equal]"),
            number_param(*value),
        )),
        Condition::LessThanEqual { field, value } => pairs.push((
            format!("{prefix}[{field}][less_than_equal]"),
            number_param(*value),
        )),
        Condition::Contains { field, value } => {
            pairs.push((format!("{prefix}[{field}][contains]"), value.clone()))
        }
        Condition::Or(members) => {
            for (i, member) in members.iter().enumerate() {
                push_condition(pairs, &format!("{prefix}[or][{i}]"), member);
            }
        }
    }
}

fn value_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Whole numbers print without a fractional part (`500000`, not `500000.0`).
fn number_param(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_where_clauses() {
        let q = DocumentQuery::new(Collection::Properties)
            .filter(Condition::equals("published", true))
            .filter(Condition::equals("type", "condo"))
            .filter(Condition::gte("price", 500000.0))
            .filter(Condition::lte("price", 1_000_000.0))
            .filter(Condition::contains("address.city", "San José"))
            .sort(Sort::desc("updatedAt"));

        let pairs = q.to_query_pairs();
        let expect = |k: &str, v: &str| {
            assert!(
                pairs.contains(&(k.to_string(), v.to_string())),
                "missing {k}={v} in {pairs:?}"
            )
        };
        expect("where[published][equals]", "true");
        expect("where[type][equals]", "condo");
        expect("where[price][greater_than_equal]", "500000");
        expect("where[price][less_than_equal]", "1000000");
        expect("where[address.city][contains]", "San José");
        expect("sort", "-updatedAt");
        expect("limit", "100");
        expect("depth", "2");
    }

    #[test]
    fn or_groups_are_indexed() {
        let q = DocumentQuery::new(Collection::Properties).filter(Condition::Or(vec![
            Condition::contains("title", "loft"),
            Condition::contains("address.street", "loft"),
        ]));
        let pairs = q.to_query_pairs();
        assert_eq!(pairs[0], ("where[or][0][title][contains]".into(), "loft".into()));
        assert_eq!(
            pairs[1],
            ("where[or][1][address.street][contains]".into(), "loft".into())
        );
    }

    #[test]
    fn in_memory_matching_follows_the_same_rules() {
        let doc = json!({
            "title": "Downtown Loft",
            "price": 750000,
            "published": true,
            "address": { "city": "Austin" }
        });

        assert!(Condition::equals("published", true).matches(&doc));
        assert!(!Condition::equals("published", false).matches(&doc));
        assert!(Condition::gte("price", 750000.0).matches(&doc));
        assert!(!Condition::lte("price", 700000.0).matches(&doc));
        assert!(Condition::contains("address.city", "aus").matches(&doc));
        assert!(Condition::Or(vec![
            Condition::contains("title", "villa"),
            Condition::contains("title", "LOFT"),
        ])
        .matches(&doc));
        assert!(!Condition::contains("address.street", "x").matches(&doc));
    }
}
