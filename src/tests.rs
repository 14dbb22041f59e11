//! Crate-wide tests for the relationship conversion layer
//!
//! Holds the shared engine fixtures plus the cross-variant properties:
//! domain/native/snapshot correspondence, the worked conversion examples,
//! and the loud-failure paths for violated hook preconditions.

use std::collections::HashSet;

use crate::error::RelationError;
use crate::object::DomainObject;
use crate::relationships::{Cardinality, Relation, ToManyOrdered, ToManyUnordered, ToOne};

pub mod fixtures {
    //! Minimal stand-in for the persistence engine side of the boundary.

    use crate::error::{RelationError, RelationResult};
    use crate::object::{DomainObject, Record, StoreId};

    /// One store's worth of records
    pub struct Library {
        store: StoreId,
    }

    impl Library {
        pub fn new() -> Self {
            Self {
                store: StoreId::new(),
            }
        }

        pub fn store(&self) -> StoreId {
            self.store
        }

        /// Insert a fresh record for the given domain type
        pub fn insert<T: DomainObject>(&self) -> Record {
            Record::new(T::entity_name(), self.store)
        }
    }

    /// Test domain type; identity equality comes from the backing record
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Author {
        record: Record,
    }

    impl DomainObject for Author {
        fn entity_name() -> &'static str {
            "Author"
        }

        fn from_record(record: Record) -> RelationResult<Self> {
            record.ensure_live(Self::entity_name())?;
            Ok(Self { record })
        }

        fn record(&self) -> RelationResult<Record> {
            if !self.record.is_live() {
                return Err(RelationError::MissingRecord {
                    entity: Self::entity_name(),
                });
            }
            Ok(self.record.clone())
        }
    }

    /// Second entity, for mismatch coverage
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Book {
        record: Record,
    }

    impl DomainObject for Book {
        fn entity_name() -> &'static str {
            "Book"
        }

        fn from_record(record: Record) -> RelationResult<Self> {
            record.ensure_live(Self::entity_name())?;
            Ok(Self { record })
        }

        fn record(&self) -> RelationResult<Record> {
            if !self.record.is_live() {
                return Err(RelationError::MissingRecord {
                    entity: Self::entity_name(),
                });
            }
            Ok(self.record.clone())
        }
    }
}

use fixtures::{Author, Library};

#[test]
fn test_variant_kinds() {
    assert_eq!(ToOne::<Author>::KIND, Cardinality::ToOne);
    assert_eq!(ToManyOrdered::<Author>::KIND, Cardinality::ToManyOrdered);
    assert_eq!(ToManyUnordered::<Author>::KIND, Cardinality::ToManyUnordered);
}

#[test]
fn test_ordered_worked_example() {
    // Native [R1, R2, R3] -> domain [obj(R1), obj(R2), obj(R3)],
    // snapshot [id(R1), id(R2), id(R3)].
    let library = Library::new();
    let r1 = library.insert::<Author>();
    let r2 = library.insert::<Author>();
    let r3 = library.insert::<Author>();
    let native = vec![r1.clone(), r2.clone(), r3.clone()];

    let domain = ToManyOrdered::<Author>::to_domain(Some(&native)).unwrap();
    let domain_ids: Vec<_> = domain
        .iter()
        .map(|author| author.object_id().unwrap())
        .collect();
    assert_eq!(domain_ids, vec![r1.id(), r2.id(), r3.id()]);

    let snapshot = ToManyOrdered::<Author>::snapshot(Some(&native));
    assert_eq!(snapshot, vec![r1.id(), r2.id(), r3.id()]);
}

#[test]
fn test_unordered_worked_example() {
    // Native {R2, R1} and {R1, R2} -> the same snapshot {id(R1), id(R2)}.
    let library = Library::new();
    let r1 = library.insert::<Author>();
    let r2 = library.insert::<Author>();

    let a: HashSet<_> = vec![r2.clone(), r1.clone()].into_iter().collect();
    let b: HashSet<_> = vec![r1.clone(), r2.clone()].into_iter().collect();

    let expected: HashSet<_> = vec![r1.id(), r2.id()].into_iter().collect();
    assert_eq!(ToManyUnordered::<Author>::snapshot(Some(&a)), expected);
    assert_eq!(ToManyUnordered::<Author>::snapshot(Some(&b)), expected);
}

#[test]
fn test_to_one_worked_example() {
    // Absent native -> domain None, snapshot None.
    assert_eq!(ToOne::<Author>::to_domain(None).unwrap(), None);
    assert_eq!(ToOne::<Author>::snapshot(None), None);
}

#[test]
fn test_to_one_round_trip() {
    let library = Library::new();
    let record = library.insert::<Author>();

    let domain = ToOne::<Author>::to_domain(Some(&record)).unwrap();
    let native = ToOne::<Author>::to_native(domain).unwrap();
    assert_eq!(native, Some(record));
}

#[test]
fn test_entity_mismatch_fails_loudly() {
    let library = Library::new();
    let book_record = library.insert::<fixtures::Book>();

    let err = ToOne::<Author>::to_domain(Some(&book_record)).unwrap_err();
    assert_eq!(
        err,
        RelationError::EntityMismatch {
            expected: "Author",
            actual: "Book",
        }
    );
}

#[test]
fn test_foreign_store_record_is_rejected() {
    let home = Library::new();
    let away = Library::new();
    let record = away.insert::<Author>();

    assert!(record.ensure_store(away.store()).is_ok());
    assert_eq!(
        record.ensure_store(home.store()).unwrap_err(),
        RelationError::ForeignStore {
            expected: home.store(),
            actual: away.store(),
        }
    );
}

#[test]
fn test_extraction_without_backing_record_fails_loudly() {
    let library = Library::new();
    let record = library.insert::<Author>();
    let author = Author::from_record(record.clone()).unwrap();

    // Engine tears the record down after the handle was constructed.
    record.invalidate();

    let err = ToOne::<Author>::to_native(Some(author)).unwrap_err();
    assert_eq!(err, RelationError::MissingRecord { entity: "Author" });
}

#[test]
fn test_snapshot_serializes_to_identifier_array() {
    let library = Library::new();
    let native = vec![library.insert::<Author>(), library.insert::<Author>()];

    let snapshot = ToManyOrdered::<Author>::snapshot(Some(&native));
    let json = serde_json::to_value(&snapshot).unwrap();
    let expected = serde_json::json!([
        native[0].id().as_uuid().to_string(),
        native[1].id().as_uuid().to_string(),
    ]);
    assert_eq!(json, expected);
}

#[test]
fn test_to_one_snapshot_serializes_absent_as_null() {
    let snapshot = ToOne::<Author>::snapshot(None);
    assert_eq!(serde_json::to_value(snapshot).unwrap(), serde_json::Value::Null);
}
