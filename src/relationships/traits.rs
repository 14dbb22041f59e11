//! Relationship Traits - The conversion contract every variant satisfies
//!
//! A relationship exists in three representations at once: the domain-facing
//! collection type, the engine's native value, and an identifier-only
//! snapshot. The [`Relation`] trait is the contract for translating between
//! them. All three operations are pure: no I/O, no caching, no shared state.

use std::fmt::Debug;

use crate::error::RelationResult;
use crate::object::DomainObject;

/// Cardinality and ordering shape of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// At most one related object
    ToOne,
    /// Many related objects, order preserved
    ToManyOrdered,
    /// Many related objects, set semantics
    ToManyUnordered,
}

impl Cardinality {
    /// Check if this shape relates to multiple objects
    pub fn is_collection(&self) -> bool {
        !matches!(self, Cardinality::ToOne)
    }

    /// Check if this shape preserves element order
    pub fn preserves_order(&self) -> bool {
        matches!(self, Cardinality::ToManyOrdered)
    }
}

/// Core relationship conversion trait
///
/// `Native` is what the engine stores, `Domain` is what application code
/// sees, and `Snapshot` is the durable-identifier projection that stays
/// meaningful outside a live object graph. An absent native value
/// (`None`) is legitimate and always converts to the variant's canonical
/// empty value; it is never an error. Errors are reserved for violated
/// hook preconditions and always surface through the `Result`.
pub trait Relation {
    /// The domain type on the other end of the relationship
    type Destination: DomainObject;

    /// The engine's storage representation
    type Native;

    /// The application-facing representation
    type Domain;

    /// The identifier-only projection, safe outside the object graph
    type Snapshot: Debug + Clone + PartialEq;

    /// Cardinality and ordering shape of this variant
    const KIND: Cardinality;

    /// Construct the domain value from the native form
    fn to_domain(native: Option<&Self::Native>) -> RelationResult<Self::Domain>;

    /// Construct the native form from a domain value
    ///
    /// Returns `Ok(None)` only for the to-one empty case; to-many variants
    /// return an empty-but-present container.
    fn to_native(domain: Self::Domain) -> RelationResult<Option<Self::Native>>;

    /// Project the native form onto durable identifiers
    ///
    /// Never constructs a domain object. Total: identifiers are readable
    /// off a record handle regardless of its liveness.
    fn snapshot(native: Option<&Self::Native>) -> Self::Snapshot;
}

/// Marker for the optional-single variant
pub trait ToOneRelation: Relation {}

/// Marker for both collection variants
pub trait ToManyRelation: Relation {}

/// Marker for the order-preserving collection variant
pub trait ToManyOrderedRelation: ToManyRelation {}

/// Marker for the set-semantics collection variant
pub trait ToManyUnorderedRelation: ToManyRelation {}
