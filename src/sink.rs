use crate::error::{EtlError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Port to the document store. Each call persists one named batch; a
/// failure is fatal for that batch, and batches already persisted in the
/// same run are not rolled back.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_batch(&self, collection: &str, documents: &[Value]) -> Result<usize>;
}

/// File-backed document store: each batch lands as one JSON file under
/// `<data_dir>/<database>/`.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &str, database: &str) -> Self {
        Self {
            root: Path::new(data_dir).join(database),
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn insert_batch(&self, collection: &str, documents: &[Value]) -> Result<usize> {
        fs::create_dir_all(&self.root).map_err(|e| EtlError::Sink {
            collection: collection.to_string(),
            message: e.to_string(),
        })?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let filepath = self.root.join(format!("{collection}_{timestamp}.json"));

        let json_content = serde_json::to_string_pretty(documents)?;
        fs::write(&filepath, json_content).map_err(|e| EtlError::Sink {
            collection: collection.to_string(),
            message: e.to_string(),
        })?;

        debug!(
            "Wrote {} documents to {}",
            documents.len(),
            filepath.display()
        );
        Ok(documents.len())
    }
}

/// In-memory document store for tests.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a collection's documents, empty if never written.
    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Names of collections written so far.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_batch(&self, collection: &str, documents: &[Value]) -> Result<usize> {
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .extend_from_slice(documents);

        debug!("Stored {} documents in '{}'", documents.len(), collection);
        Ok(documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn in_memory_store_keeps_batches_by_name() {
        let store = InMemoryStore::new();
        store
            .insert_batch("sales_collection", &[json!({"a": 1}), json!({"a": 2})])
            .await
            .unwrap();
        store
            .insert_batch("sales_collection", &[json!({"a": 3})])
            .await
            .unwrap();

        assert_eq!(store.collection("sales_collection").len(), 3);
        assert_eq!(store.collection("other"), Vec::<Value>::new());
    }

    #[tokio::test]
    async fn json_file_store_writes_one_file_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_str().unwrap(), "test_db");

        let written = store
            .insert_batch("product_price_collection", &[json!({"actual_price": 1.5})])
            .await
            .unwrap();
        assert_eq!(written, 1);

        let db_dir = dir.path().join("test_db");
        let files: Vec<_> = fs::read_dir(&db_dir).unwrap().collect();
        assert_eq!(files.len(), 1);

        let content = fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
        let docs: Vec<Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(docs[0]["actual_price"], json!(1.5));
    }
}
