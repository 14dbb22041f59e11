//! Relationships Module - Conversion contract and the three relationship variants
//!
//! - `traits`: the [`Relation`] contract, cardinality metadata, marker traits
//! - `to_one`: optional single related object
//! - `to_many_ordered`: order-preserving collection
//! - `to_many_unordered`: set-semantics collection

pub mod to_many_ordered;
pub mod to_many_unordered;
pub mod to_one;
pub mod traits;

// Re-export main types
pub use to_many_ordered::ToManyOrdered;
pub use to_many_unordered::ToManyUnordered;
pub use to_one::ToOne;
pub use traits::{
    Cardinality, Relation, ToManyOrderedRelation, ToManyRelation, ToManyUnorderedRelation,
    ToOneRelation,
};
