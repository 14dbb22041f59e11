//! Domain Object Trait - Application-facing handles over engine records
//!
//! A domain object owns no storage; it is a thin, possibly-invalidated
//! reference into the engine's record. The two hooks here are the entire
//! construction/raw-access contract the relationship variants rely on. Both
//! are total for a live, correctly-typed record, and both fail loudly (never
//! silently default) when that precondition is violated.

use crate::error::RelationResult;
use crate::object::{ObjectId, Record};

/// Application-level handle to a persisted record
pub trait DomainObject: Sized {
    /// Entity name this domain type maps to
    fn entity_name() -> &'static str;

    /// Construct a handle from an engine-owned record
    ///
    /// Implementations must reject an invalidated record, a record for a
    /// different entity, or a record from a foreign store (see
    /// [`Record::ensure_live`] and [`Record::ensure_store`]).
    fn from_record(record: Record) -> RelationResult<Self>;

    /// The backing record for this handle
    ///
    /// Fails with [`RelationError::MissingRecord`] when the handle has no
    /// live backing record.
    ///
    /// [`RelationError::MissingRecord`]: crate::error::RelationError::MissingRecord
    fn record(&self) -> RelationResult<Record>;

    /// Durable identifier of the backing record
    fn object_id(&self) -> RelationResult<ObjectId> {
        Ok(self.record()?.id())
    }
}
