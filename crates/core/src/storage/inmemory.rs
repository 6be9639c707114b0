//! In-memory store for tests and local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::video::{Item, ResultSet};

use super::{Result, StoreError, VideoStore};

/// Tables held in memory, items kept in insertion order.
///
/// Scanning a table that was never added fails with
/// [`StoreError::TableNotFound`], like DynamoDB does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVideoStore {
    tables: Arc<RwLock<HashMap<String, Vec<Item>>>>,
}

impl InMemoryVideoStore {
    /// Creates a store with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single table.
    pub fn with_table(table_name: impl Into<String>, items: Vec<Item>) -> Self {
        let mut tables = HashMap::new();
        tables.insert(table_name.into(), items);
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Returns a copy of a table's current contents.
    pub async fn snapshot(&self, table_name: &str) -> Option<Vec<Item>> {
        self.tables.read().await.get(table_name).cloned()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn scan_all(&self, table_name: &str) -> Result<ResultSet> {
        let tables = self.tables.read().await;
        tables
            .get(table_name)
            .cloned()
            .ok_or_else(|| StoreError::TableNotFound {
                table: table_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(id: &str) -> Item {
        let mut item = Item::new();
        item.insert("id".to_string(), json!(id));
        item
    }

    #[tokio::test]
    async fn test_scan_returns_items_in_insertion_order() {
        let store =
            InMemoryVideoStore::with_table("videos", vec![video("c"), video("a"), video("b")]);

        let items = store.scan_all("videos").await.unwrap();

        let ids: Vec<_> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_scan_empty_table() {
        let store = InMemoryVideoStore::with_table("videos", Vec::new());

        assert!(store.scan_all("videos").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_table() {
        let store = InMemoryVideoStore::new();

        let result = store.scan_all("videos").await;

        assert_eq!(
            result,
            Err(StoreError::TableNotFound {
                table: "videos".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_scan_does_not_change_contents() {
        let store = InMemoryVideoStore::with_table("videos", vec![video("a")]);
        let before = store.snapshot("videos").await;

        store.scan_all("videos").await.unwrap();

        assert_eq!(store.snapshot("videos").await, before);
    }
}
