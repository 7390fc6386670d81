//! In-memory implementation of PersonRepository

use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use roster_domain::model::Person;
use roster_domain::repository::PersonRepository;
use roster_types::Result;

/// In-memory person repository
///
/// A single coarse lock guards the collection and every operation runs to
/// completion under it. A `Vec` keeps insertion order, which is the listing
/// order callers observe; lookups are linear.
pub struct MemoryPersonRepository {
    people: Mutex<Vec<Person>>,
}

impl MemoryPersonRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            people: Mutex::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with records
    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: Mutex::new(people),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Person>> {
        // A poisoned lock only means another caller panicked while holding
        // it; the collection itself is still intact.
        self.people.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRepository for MemoryPersonRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Person>> {
        Ok(self.lock().iter().find(|p| p.id == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Person>> {
        Ok(self.lock().clone())
    }

    fn add(&self, person: Person) -> Result<()> {
        self.lock().push(person);
        Ok(())
    }

    fn update(&self, person: Person) -> Result<()> {
        let mut people = self.lock();
        if let Some(existing) = people.iter_mut().find(|p| p.id == person.id) {
            existing.first_name = person.first_name;
            existing.last_name = person.last_name;
            existing.gender = person.gender;
            existing.date_of_birth = person.date_of_birth;
            existing.phone_number = person.phone_number;
            existing.birth_place = person.birth_place;
            existing.graduated = person.graduated;
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        self.lock().retain(|p| p.id != id);
        Ok(())
    }
}
