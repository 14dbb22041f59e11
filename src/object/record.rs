//! Record Handles - The persistence engine's native record representation
//!
//! A [`Record`] is the engine-owned storage handle this layer converts from
//! and to. It is cheaply clonable (shared interior), compares and hashes by
//! its durable [`ObjectId`], and carries the entity name, owning store, and a
//! liveness flag. Record access is confined by the engine; callers must hold
//! whatever confinement the engine requires while converting. This layer only
//! reads identifiers and validates preconditions; it never mutates a record.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{RelationError, RelationResult};
use crate::object::{ObjectId, StoreId};

/// Engine-native record handle
#[derive(Debug, Clone)]
pub struct Record {
    inner: Arc<RecordInner>,
}

#[derive(Debug)]
struct RecordInner {
    id: ObjectId,
    entity: &'static str,
    store: StoreId,
    live: AtomicBool,
}

impl Record {
    /// Create a record handle with a fresh durable identifier (engine-side)
    pub fn new(entity: &'static str, store: StoreId) -> Self {
        Self {
            inner: Arc::new(RecordInner {
                id: ObjectId::new(),
                entity,
                store,
                live: AtomicBool::new(true),
            }),
        }
    }

    /// Durable identifier of this record
    ///
    /// Always readable, even after invalidation; identifiers outlive handles.
    pub fn id(&self) -> ObjectId {
        self.inner.id
    }

    /// Entity name this record stores
    pub fn entity(&self) -> &'static str {
        self.inner.entity
    }

    /// The store that owns this record
    pub fn store(&self) -> StoreId {
        self.inner.store
    }

    /// Whether the engine still considers this handle usable
    pub fn is_live(&self) -> bool {
        self.inner.live.load(Ordering::Acquire)
    }

    /// Invalidate this handle (engine-side, e.g. on store teardown)
    pub fn invalidate(&self) {
        self.inner.live.store(false, Ordering::Release);
    }

    /// Check that this record is live and stores the expected entity
    ///
    /// Used by `DomainObject::from_record` implementations to fail loudly
    /// instead of constructing a handle over an unusable record.
    pub fn ensure_live(&self, expected_entity: &'static str) -> RelationResult<()> {
        if !self.is_live() {
            tracing::error!(
                entity = self.inner.entity,
                id = %self.inner.id,
                "attempted to use an invalidated record"
            );
            return Err(RelationError::InvalidatedRecord {
                entity: self.inner.entity,
                id: self.inner.id,
            });
        }
        if self.inner.entity != expected_entity {
            tracing::error!(
                expected = expected_entity,
                actual = self.inner.entity,
                "record entity does not match target domain type"
            );
            return Err(RelationError::EntityMismatch {
                expected: expected_entity,
                actual: self.inner.entity,
            });
        }
        Ok(())
    }

    /// Check that this record is owned by the expected store
    pub fn ensure_store(&self, expected: StoreId) -> RelationResult<()> {
        if self.inner.store != expected {
            tracing::error!(
                expected = %expected,
                actual = %self.inner.store,
                "record belongs to a foreign store"
            );
            return Err(RelationError::ForeignStore {
                expected,
                actual: self.inner.store,
            });
        }
        Ok(())
    }
}

// Identity equality: two handles are the same record iff their durable
// identifiers match, regardless of liveness.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}
