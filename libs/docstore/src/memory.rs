//! In-memory document-store engine backed by `DashMap`.
//!
//! Collections are created lazily on first insert. Each document lives in a
//! per-collection map entry; `DashMap` shards give us exclusive access to a
//! single entry during `update_fields`/`increment`, which is exactly the
//! per-document atomicity the `DocumentStore` contract asks for.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use crate::{ConditionalOutcome, DocumentStore, Filter, Result, StoreError};

type Collection = DashMap<Uuid, Value>;

/// In-memory store, cheap to clone and share across repositories.
#[derive(Clone, Default)]
pub struct MemStore {
    collections: Arc<DashMap<String, Arc<Collection>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, name: &str) -> Arc<Collection> {
        self.collections
            .entry(name.to_string())
            .or_default()
            .clone()
    }
}

#[async_trait]
impl DocumentStore for MemStore {
    async fn insert(&self, collection: &str, doc: Value) -> Result<Uuid> {
        let id = Uuid::new_v4();
        trace!(collection, %id, "insert document");
        self.collection(collection).insert(id, doc);
        Ok(id)
    }

    async fn set(&self, collection: &str, id: Uuid, doc: Value) -> Result<()> {
        trace!(collection, %id, "set document");
        self.collection(collection).insert(id, doc);
        Ok(())
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>> {
        Ok(self
            .collection(collection)
            .get(&id)
            .map(|entry| entry.value().clone()))
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<(Uuid, Value)>> {
        let matches = self
            .collection(collection)
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        Ok(matches)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Vec<(String, Value)>,
    ) -> Result<()> {
        let coll = self.collection(collection);
        let mut entry = coll
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        let doc = entry.value_mut();
        if let Value::Object(map) = doc {
            for (field, value) in fields {
                map.insert(field, value);
            }
            Ok(())
        } else {
            // Documents are always JSON objects; anything else is a bug in
            // the caller.
            Err(StoreError::not_found(collection, id))
        }
    }

    async fn update_fields_if(
        &self,
        collection: &str,
        id: Uuid,
        guard_field: &str,
        expected: Value,
        fields: Vec<(String, Value)>,
    ) -> Result<ConditionalOutcome> {
        let coll = self.collection(collection);
        let mut entry = coll
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        let doc = entry.value_mut();
        let Value::Object(map) = doc else {
            return Err(StoreError::not_found(collection, id));
        };
        let current = map.get(guard_field).cloned().unwrap_or(Value::Null);
        if current != expected {
            return Ok(ConditionalOutcome::GuardFailed(current));
        }
        for (field, value) in fields {
            map.insert(field, value);
        }
        Ok(ConditionalOutcome::Applied)
    }

    async fn increment(&self, collection: &str, id: Uuid, field: &str, delta: i64) -> Result<()> {
        let coll = self.collection(collection);
        let mut entry = coll
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        let doc = entry.value_mut();
        let Value::Object(map) = doc else {
            return Err(StoreError::not_found(collection, id));
        };
        let current = match map.get(field) {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| StoreError::NotANumber {
                collection: collection.to_string(),
                id,
                field: field.to_string(),
            })?,
            Some(_) => {
                return Err(StoreError::NotANumber {
                    collection: collection.to_string(),
                    id,
                    field: field.to_string(),
                })
            }
        };
        map.insert(field.to_string(), Value::from(current + delta));
        Ok(())
    }
}
