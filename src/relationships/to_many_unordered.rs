//! ToManyUnordered Relationship - Set-semantics collection of related objects
//!
//! Elements deduplicate by the destination type's identity equality, which
//! the engine defines as durable-identifier equality. Two snapshots of this
//! variant are equal iff they hold the same identifiers, regardless of
//! enumeration order.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::RelationResult;
use crate::object::{DomainObject, ObjectId, Record};

use super::traits::{Cardinality, Relation, ToManyRelation, ToManyUnorderedRelation};

/// Relationship to an unordered collection of related objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToManyUnordered<T: DomainObject + Eq + Hash> {
    _destination: PhantomData<fn() -> T>,
}

impl<T: DomainObject + Eq + Hash> Relation for ToManyUnordered<T> {
    type Destination = T;
    type Native = HashSet<Record>;
    type Domain = HashSet<T>;
    type Snapshot = HashSet<ObjectId>;

    const KIND: Cardinality = Cardinality::ToManyUnordered;

    fn to_domain(native: Option<&HashSet<Record>>) -> RelationResult<HashSet<T>> {
        match native {
            Some(records) => records
                .iter()
                .map(|record| T::from_record(record.clone()))
                .collect(),
            None => Ok(HashSet::new()),
        }
    }

    fn to_native(domain: HashSet<T>) -> RelationResult<Option<HashSet<Record>>> {
        // An empty domain set still yields a present, empty container.
        let records = domain
            .into_iter()
            .map(|object| object.record())
            .collect::<RelationResult<HashSet<_>>>()?;
        Ok(Some(records))
    }

    fn snapshot(native: Option<&HashSet<Record>>) -> HashSet<ObjectId> {
        match native {
            Some(records) => records.iter().map(Record::id).collect(),
            None => HashSet::new(),
        }
    }
}

impl<T: DomainObject + Eq + Hash> ToManyRelation for ToManyUnordered<T> {}
impl<T: DomainObject + Eq + Hash> ToManyUnorderedRelation for ToManyUnordered<T> {}
