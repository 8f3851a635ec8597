//! Document-store abstraction used by the CampusShare core.
//!
//! The core persists everything in named collections of JSON documents and
//! only relies on a small set of primitives: insert with a generated id,
//! get by id, conjunctive equality queries, field merges, and an atomic
//! numeric increment. Writes to a single document are atomic; nothing here
//! provides cross-document transactions.

pub mod memory;

pub use memory::MemStore;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Errors surfaced by a document store backend.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: Uuid },

    #[error("field '{field}' of {collection}/{id} is not a number")]
    NotANumber {
        collection: String,
        id: Uuid,
        field: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(collection: impl Into<String>, id: Uuid) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Conjunction of field equality predicates, built up fluently:
///
/// ```
/// use docstore::Filter;
/// let f = Filter::new().eq("status", "pending").eq("kind", "note");
/// assert!(!f.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    predicates: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// A document matches when every predicate field is present and equal.
    pub fn matches(&self, doc: &Value) -> bool {
        self.predicates
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }
}

/// Outcome of a conditional field merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalOutcome {
    Applied,
    /// The guard field held this value instead of the expected one.
    GuardFailed(Value),
}

/// Object-safe store port. Backends must serialize concurrent writes to the
/// same document; readers may observe any fully-applied prior write.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its generated id.
    async fn insert(&self, collection: &str, doc: Value) -> Result<Uuid>;

    /// Write a document at a caller-chosen id, replacing any previous one.
    async fn set(&self, collection: &str, id: Uuid, doc: Value) -> Result<()>;

    /// Load a document by id.
    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>>;

    /// All documents matching the filter, paired with their ids.
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<(Uuid, Value)>>;

    /// Merge the given fields into an existing document.
    async fn update_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Vec<(String, Value)>,
    ) -> Result<()>;

    /// Merge the given fields only when `guard_field` currently holds
    /// `expected`. Atomic per document: the comparison and the merge happen
    /// under the same document lock.
    async fn update_fields_if(
        &self,
        collection: &str,
        id: Uuid,
        guard_field: &str,
        expected: Value,
        fields: Vec<(String, Value)>,
    ) -> Result<ConditionalOutcome>;

    /// Atomically add `delta` to a numeric field, creating it at `delta`
    /// when absent.
    async fn increment(&self, collection: &str, id: Uuid, field: &str, delta: i64) -> Result<()>;
}
