//! # graph-relations: Typed Relationship Conversions for Persisted Object Graphs
//!
//! A relationship between domain objects lives in three representations:
//! the domain-facing collection type application code works with, the native
//! value the persistence engine stores, and an identifier-only snapshot that
//! stays meaningful outside a live object graph (for diffing, hashing, or
//! cross-context comparison).
//!
//! This crate is the pure conversion boundary between those three. It does no
//! I/O, keeps no state, and tracks no changes; the engine owns record
//! lifecycle and confinement. Three first-class variants cover every
//! relationship shape:
//!
//! - [`ToOne`] — optional single related object
//! - [`ToManyOrdered`] — order-preserving collection
//! - [`ToManyUnordered`] — set-semantics collection
//!
//! all satisfying the [`Relation`] contract over the engine boundary types in
//! [`object`].

pub mod error;
pub mod object;
pub mod relationships;

#[cfg(test)]
mod tests;

// Re-export core traits and types
pub use error::{RelationError, RelationResult};
pub use object::{DomainObject, ObjectId, Record, StoreId};
pub use relationships::{
    Cardinality, Relation, ToManyOrdered, ToManyOrderedRelation, ToManyRelation,
    ToManyUnordered, ToManyUnorderedRelation, ToOne, ToOneRelation,
};
