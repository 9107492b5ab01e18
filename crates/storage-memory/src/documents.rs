use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use loanbridge_core::errors::{Error, Result};

/// Named collections of JSON documents.
///
/// Documents are plain JSON objects carrying their id under the `"id"` key.
/// Updates merge top-level fields into the stored object, last write wins.
pub struct MemoryDocumentStore {
    collections: DashMap<String, DashMap<String, Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        MemoryDocumentStore {
            collections: DashMap::new(),
        }
    }

    /// Stores a document under a generated id and returns that id.
    pub fn create(&self, collection: &str, mut document: Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        Self::tag_id(&mut document, &id)?;
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);
        Ok(id)
    }

    /// Stores a document under a caller-supplied id (used for user records
    /// keyed by the identity provider's uid).
    pub fn put(&self, collection: &str, id: &str, mut document: Value) -> Result<()> {
        Self::tag_id(&mut document, id)?;
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    pub fn get(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .get(collection)?
            .get(id)
            .map(|entry| entry.value().clone())
    }

    /// All documents matching the predicate, in no particular order.
    pub fn query<F>(&self, collection: &str, predicate: F) -> Vec<Value>
    where
        F: Fn(&Value) -> bool,
    {
        match self.collections.get(collection) {
            Some(documents) => documents
                .iter()
                .map(|entry| entry.value().clone())
                .filter(|document| predicate(document))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Merges the top-level fields of `partial` into the stored document and
    /// returns the merged result.
    pub fn update(&self, collection: &str, id: &str, partial: Value) -> Result<Value> {
        let documents = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::NotFound(format!("{collection}/{id}")))?;
        let mut entry = documents
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(format!("{collection}/{id}")))?;

        match (entry.value_mut(), partial) {
            (Value::Object(stored), Value::Object(fields)) => {
                for (key, value) in fields {
                    stored.insert(key, value);
                }
            }
            _ => {
                return Err(Error::Persistence(
                    "documents must be JSON objects".to_string(),
                ))
            }
        }
        Ok(entry.value().clone())
    }

    fn tag_id(document: &mut Value, id: &str) -> Result<()> {
        match document {
            Value::Object(fields) => {
                fields.insert("id".to_string(), Value::String(id.to_string()));
                Ok(())
            }
            _ => Err(Error::Persistence(
                "documents must be JSON objects".to_string(),
            )),
        }
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
