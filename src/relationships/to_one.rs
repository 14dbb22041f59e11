//! ToOne Relationship - Optional single related object
//!
//! The only variant whose native form can be genuinely absent: `to_native`
//! maps an empty domain value back to `None` instead of an empty container.

use std::marker::PhantomData;

use crate::error::RelationResult;
use crate::object::{DomainObject, ObjectId, Record};

use super::traits::{Cardinality, Relation, ToOneRelation};

/// Relationship to at most one related object
///
/// Zero-sized; carries the destination type only. Conversions are associated
/// functions, so no value of this type is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToOne<T: DomainObject> {
    _destination: PhantomData<fn() -> T>,
}

impl<T: DomainObject> Relation for ToOne<T> {
    type Destination = T;
    type Native = Record;
    type Domain = Option<T>;
    type Snapshot = Option<ObjectId>;

    const KIND: Cardinality = Cardinality::ToOne;

    fn to_domain(native: Option<&Record>) -> RelationResult<Option<T>> {
        match native {
            Some(record) => Ok(Some(T::from_record(record.clone())?)),
            None => Ok(None),
        }
    }

    fn to_native(domain: Option<T>) -> RelationResult<Option<Record>> {
        match domain {
            Some(object) => Ok(Some(object.record()?)),
            None => Ok(None),
        }
    }

    fn snapshot(native: Option<&Record>) -> Option<ObjectId> {
        native.map(Record::id)
    }
}

impl<T: DomainObject> ToOneRelation for ToOne<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::{Author, Library};

    #[test]
    fn test_absent_native_is_none_not_error() {
        let domain = ToOne::<Author>::to_domain(None).unwrap();
        assert!(domain.is_none());
        assert_eq!(ToOne::<Author>::snapshot(None), None);
    }

    #[test]
    fn test_present_native_round_trips() {
        let library = Library::new();
        let record = library.insert::<Author>();

        let domain = ToOne::<Author>::to_domain(Some(&record)).unwrap();
        let author = domain.expect("related object present");
        assert_eq!(author.object_id().unwrap(), record.id());

        let native = ToOne::<Author>::to_native(Some(author)).unwrap();
        assert_eq!(native, Some(record));
    }

    #[test]
    fn test_none_domain_maps_to_none_native() {
        assert_eq!(ToOne::<Author>::to_native(None).unwrap(), None);
    }

    #[test]
    fn test_snapshot_is_record_identifier() {
        let library = Library::new();
        let record = library.insert::<Author>();
        assert_eq!(ToOne::<Author>::snapshot(Some(&record)), Some(record.id()));
    }

    #[test]
    fn test_invalidated_record_fails_loudly() {
        let library = Library::new();
        let record = library.insert::<Author>();
        record.invalidate();

        assert!(ToOne::<Author>::to_domain(Some(&record)).is_err());
    }
}
