use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use super::{DocumentStore, Filter, StoreError};

/// In-process store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, collection: &str, doc: Value) -> Result<(), StoreError> {
        if !doc.is_object() {
            return Err(StoreError::NotAnObject {
                collection: collection.to_string(),
            });
        }
        let mut guard = self.collections.write().await;
        guard.entry(collection.to_string()).or_default().push(doc);
        debug!("memory: inserted into {collection}");
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard.get(collection).cloned().unwrap_or_default())
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        fields: Value,
    ) -> Result<bool, StoreError> {
        let Value::Object(fields) = fields else {
            return Err(StoreError::NotAnObject {
                collection: collection.to_string(),
            });
        };
        let mut guard = self.collections.write().await;
        let target = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| filter.matches(d)));
        let Some(target) = target else {
            return Ok(false);
        };
        let Value::Object(existing) = target else {
            return Err(StoreError::NotAnObject {
                collection: collection.to_string(),
            });
        };
        for (key, value) in fields {
            existing.insert(key, value);
        }
        Ok(true)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<bool, StoreError> {
        let mut guard = self.collections.write().await;
        let Some(docs) = guard.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self, collection: &str) -> Result<u64, StoreError> {
        let mut guard = self.collections.write().await;
        let removed = guard.remove(collection).map(|docs| docs.len()).unwrap_or(0);
        Ok(removed as u64)
    }

    async fn close(&self) {
        debug!("memory: close is a no-op");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store.insert("blog", json!({ "id": id })).await.unwrap();
        }
        let ids: Vec<_> = store
            .find_all("blog")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_all_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all("projects").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_non_object() {
        let store = MemoryStore::new();
        let err = store.insert("skills", json!(["Rust"])).await.unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject { .. }));
    }

    #[tokio::test]
    async fn test_update_one_merges_fields_and_keeps_others() {
        let store = MemoryStore::new();
        store
            .insert("blog", json!({"id": "p1", "date": "2024-01-01", "title": "Old"}))
            .await
            .unwrap();
        let matched = store
            .update_one("blog", &Filter::id("p1"), json!({"title": "New"}))
            .await
            .unwrap();
        assert!(matched);
        let doc = store.find_one("blog", &Filter::id("p1")).await.unwrap().unwrap();
        assert_eq!(doc, json!({"id": "p1", "date": "2024-01-01", "title": "New"}));
    }

    #[tokio::test]
    async fn test_update_one_without_match_inserts_nothing() {
        let store = MemoryStore::new();
        let matched = store
            .update_one("education", &Filter::id("nope"), json!({"gpa": "4.0"}))
            .await
            .unwrap();
        assert!(!matched);
        assert!(store.find_all("education").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_one_removes_only_first_match() {
        let store = MemoryStore::new();
        store.insert("projects", json!({"id": "x"})).await.unwrap();
        store.insert("projects", json!({"id": "y"})).await.unwrap();
        assert!(store.delete_one("projects", &Filter::id("x")).await.unwrap());
        assert!(!store.delete_one("projects", &Filter::id("x")).await.unwrap());
        assert_eq!(store.find_all("projects").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_all_is_scoped_to_collection() {
        let store = MemoryStore::new();
        store.insert("profile", json!({"name": "a"})).await.unwrap();
        store.insert("profile", json!({"name": "b"})).await.unwrap();
        store.insert("skills", json!({"tools": []})).await.unwrap();
        assert_eq!(store.delete_all("profile").await.unwrap(), 2);
        assert!(store.find_all("profile").await.unwrap().is_empty());
        assert_eq!(store.find_all("skills").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_with_tag_filter() {
        let store = MemoryStore::new();
        store
            .insert("blog", json!({"id": "1", "tags": ["AI", "Learning"]}))
            .await
            .unwrap();
        store
            .insert("blog", json!({"id": "2", "tags": ["UI/UX"]}))
            .await
            .unwrap();
        let filter = Filter::ArrayContains {
            field: "tags",
            value: "AI".to_string(),
        };
        let hits = store.find("blog", &filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], "1");
    }
}
