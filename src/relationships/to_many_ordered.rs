//! ToManyOrdered Relationship - Order-preserving collection of related objects
//!
//! The order of the native container is authoritative: it survives both
//! conversion directions and the snapshot projection exactly.

use std::marker::PhantomData;

use crate::error::RelationResult;
use crate::object::{DomainObject, ObjectId, Record};

use super::traits::{Cardinality, Relation, ToManyOrderedRelation, ToManyRelation};

/// Relationship to an ordered collection of related objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToManyOrdered<T: DomainObject> {
    _destination: PhantomData<fn() -> T>,
}

impl<T: DomainObject> Relation for ToManyOrdered<T> {
    type Destination = T;
    type Native = Vec<Record>;
    type Domain = Vec<T>;
    type Snapshot = Vec<ObjectId>;

    const KIND: Cardinality = Cardinality::ToManyOrdered;

    fn to_domain(native: Option<&Vec<Record>>) -> RelationResult<Vec<T>> {
        match native {
            Some(records) => records
                .iter()
                .map(|record| T::from_record(record.clone()))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    fn to_native(domain: Vec<T>) -> RelationResult<Option<Vec<Record>>> {
        // An empty domain sequence still yields a present, empty container.
        let records = domain
            .into_iter()
            .map(|object| object.record())
            .collect::<RelationResult<Vec<_>>>()?;
        Ok(Some(records))
    }

    fn snapshot(native: Option<&Vec<Record>>) -> Vec<ObjectId> {
        match native {
            Some(records) => records.iter().map(Record::id).collect(),
            None => Vec::new(),
        }
    }
}

impl<T: DomainObject> ToManyRelation for ToManyOrdered<T> {}
impl<T: DomainObject> ToManyOrderedRelation for ToManyOrdered<T> {}
