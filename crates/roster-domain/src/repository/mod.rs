//! Repository trait for person records

use uuid::Uuid;

use crate::model::Person;
use roster_types::Result;

/// Authoritative store of person records
///
/// Reads hand back independent snapshots; mutating a returned value never
/// touches repository state. Writes target records by identifier.
pub trait PersonRepository {
    /// Find a person by identifier. `Ok(None)` when no record matches.
    fn find_by_id(&self, id: Uuid) -> Result<Option<Person>>;

    /// Every record, in insertion order. Order is stable between
    /// successive unmodified calls.
    fn find_all(&self) -> Result<Vec<Person>>;

    /// Append a record. Duplicate identifiers are not rejected here;
    /// preventing them is the caller's responsibility.
    fn add(&self, person: Person) -> Result<()>;

    /// Overwrite every mutable field of the record carrying the incoming
    /// identifier. Silent no-op when no record matches.
    fn update(&self, person: Person) -> Result<()>;

    /// Remove the record with this identifier. Silent no-op when absent.
    fn delete(&self, id: Uuid) -> Result<()>;
}
