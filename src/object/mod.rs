//! Object System - The boundary with the persistence engine
//!
//! This module defines the types this layer shares with the engine:
//!
//! - `id`: durable object and store identifiers
//! - `record`: the engine-native record handle
//! - `domain`: the trait for application-facing domain object handles

pub mod domain;
pub mod id;
pub mod record;

// Re-export main types and traits for convenience
pub use domain::DomainObject;
pub use id::{ObjectId, StoreId};
pub use record::Record;
