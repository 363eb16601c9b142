//! Document store: the narrow persistence seam every resource goes through.
//!
//! Records are schemaless JSON objects grouped by collection name. Backends:
//! `PostgresStore` (JSONB table, production) and `MemoryStore` (tests, local runs).
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`, chosen at startup via `STORE_BACKEND`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored document in '{collection}' is not a JSON object")]
    NotAnObject { collection: String },
}

/// Selects documents within a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Top-level string field equals `value`.
    FieldEquals { field: &'static str, value: String },
    /// Top-level array field contains `value` as one of its elements.
    ArrayContains { field: &'static str, value: String },
}

impl Filter {
    pub fn id(value: impl Into<String>) -> Self {
        Filter::FieldEquals {
            field: "id",
            value: value.into(),
        }
    }

    /// In-process evaluation against a single document.
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Filter::FieldEquals { field, value } => {
                doc.get(*field).and_then(Value::as_str) == Some(value.as_str())
            }
            Filter::ArrayContains { field, value } => doc
                .get(*field)
                .and_then(Value::as_array)
                .is_some_and(|items| items.iter().any(|v| v.as_str() == Some(value.as_str()))),
        }
    }

    /// JSONB containment document equivalent to this filter (`body @> doc`).
    pub fn to_containment(&self) -> Value {
        let (field, needle) = match self {
            Filter::FieldEquals { field, value } => (*field, json!(value)),
            Filter::ArrayContains { field, value } => (*field, json!([value])),
        };
        let mut doc = Map::new();
        doc.insert(field.to_string(), needle);
        Value::Object(doc)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name, reported by the health route.
    fn backend(&self) -> &'static str;

    async fn insert(&self, collection: &str, doc: Value) -> Result<(), StoreError>;

    /// Every document in the collection, in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Value>, StoreError>;

    async fn find_one(&self, collection: &str, filter: &Filter)
        -> Result<Option<Value>, StoreError>;

    /// Merges the top-level keys of `fields` into the first matching document.
    /// Returns whether a document matched.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        fields: Value,
    ) -> Result<bool, StoreError>;

    /// Removes the first matching document. Returns whether one was removed.
    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<bool, StoreError>;

    /// Removes every document in the collection. Returns the number removed.
    async fn delete_all(&self, collection: &str) -> Result<u64, StoreError>;

    /// Releases backend resources. Called once at process shutdown.
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_equals_matches_exact_string() {
        let doc = json!({"id": "exp1", "title": "Intern"});
        assert!(Filter::id("exp1").matches(&doc));
        assert!(!Filter::id("exp").matches(&doc));
    }

    #[test]
    fn test_field_equals_ignores_non_string_field() {
        let doc = json!({"id": 1});
        assert!(!Filter::id("1").matches(&doc));
    }

    #[test]
    fn test_array_contains_is_case_sensitive_equality() {
        let doc = json!({"tags": ["Machine Learning", "AI"]});
        let hit = Filter::ArrayContains {
            field: "tags",
            value: "AI".to_string(),
        };
        let wrong_case = Filter::ArrayContains {
            field: "tags",
            value: "ai".to_string(),
        };
        let substring = Filter::ArrayContains {
            field: "tags",
            value: "Machine".to_string(),
        };
        assert!(hit.matches(&doc));
        assert!(!wrong_case.matches(&doc));
        assert!(!substring.matches(&doc));
    }

    #[test]
    fn test_array_contains_missing_field() {
        let f = Filter::ArrayContains {
            field: "tags",
            value: "AI".to_string(),
        };
        assert!(!f.matches(&json!({"title": "x"})));
    }

    #[test]
    fn test_containment_documents() {
        assert_eq!(Filter::id("blog1").to_containment(), json!({"id": "blog1"}));
        let f = Filter::ArrayContains {
            field: "tags",
            value: "UI/UX".to_string(),
        };
        assert_eq!(f.to_containment(), json!({"tags": ["UI/UX"]}));
    }
}
