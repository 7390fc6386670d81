//! Person query and mutation service

use chrono::Datelike;
use uuid::Uuid;

use crate::model::{Gender, PagedResult, Person};
use crate::repository::PersonRepository;
use roster_types::{Error, Result};

/// Business-rule layer above a [`PersonRepository`]
///
/// The repository stays the single source of truth; the service keeps no
/// cache of its own. Lookup misses and mutations against a missing
/// identifier come back as values (`None` / `false`), never as errors.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a service over the given repository
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Find one person by identifier
    pub fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
        self.repo.find_by_id(id)
    }

    /// Every record, in listing order
    pub fn get_all_people(&self) -> Result<Vec<Person>> {
        self.repo.find_all()
    }

    /// Store a new record
    ///
    /// The payload keeps whatever identifier the caller assigned; existing
    /// identifiers are not checked for duplicates.
    pub fn create_person(&self, person: Option<Person>) -> Result<bool> {
        let person = person.ok_or(Error::MissingPerson)?;
        tracing::debug!(id = %person.id, "creating person");
        self.repo.add(person)?;
        Ok(true)
    }

    /// Overwrite the record with identifier `id`
    ///
    /// The incoming payload's identifier is coerced to the stored one, so an
    /// update can never reassign identity. `Ok(false)` means the target was
    /// not found and nothing was written.
    pub fn update_person(&self, id: Uuid, person: Option<Person>) -> Result<bool> {
        let mut person = person.ok_or(Error::MissingPerson)?;
        match self.repo.find_by_id(id)? {
            Some(existing) => {
                person.id = existing.id;
                tracing::debug!(id = %person.id, "updating person");
                self.repo.update(person)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with identifier `id`
    ///
    /// `Ok(false)` when no such record exists; the repository is not asked
    /// to delete in that case.
    pub fn delete_person(&self, id: Uuid) -> Result<bool> {
        if self.repo.find_by_id(id)?.is_none() {
            return Ok(false);
        }
        tracing::debug!(%id, "deleting person");
        self.repo.delete(id)?;
        Ok(true)
    }

    /// All male records, relative order preserved
    pub fn get_males(&self) -> Result<Vec<Person>> {
        let people = self.repo.find_all()?;
        Ok(people.into_iter().filter(|p| p.gender == Gender::Male).collect())
    }

    /// The record with the earliest date of birth
    ///
    /// Only a strictly earlier date replaces the candidate, so ties keep the
    /// first record in listing order. `None` when the collection is empty.
    pub fn get_oldest_person(&self) -> Result<Option<Person>> {
        let people = self.repo.find_all()?;
        let mut oldest: Option<Person> = None;
        for person in people {
            match &oldest {
                Some(o) if person.date_of_birth < o.date_of_birth => oldest = Some(person),
                None => oldest = Some(person),
                _ => {}
            }
        }
        Ok(oldest)
    }

    /// Full name of the matching record, or `None` when no record matches
    pub fn get_full_name(&self, id: Uuid) -> Result<Option<String>> {
        Ok(self.repo.find_by_id(id)?.map(|p| p.full_name()))
    }

    /// Full names of every record, in listing order
    pub fn get_full_names(&self) -> Result<Vec<String>> {
        let people = self.repo.find_all()?;
        Ok(people.iter().map(Person::full_name).collect())
    }

    /// Partition the listing by birth year
    ///
    /// `choice` selects the comparison: `"equal"`, `"greater"` or `"less"`.
    /// Any other value returns the full unfiltered listing - a permissive
    /// default, not an error. `year` outside `[0, current year]` is a range
    /// error.
    pub fn filter_by_birth_year(&self, year: i32, choice: &str) -> Result<Vec<Person>> {
        let max = current_year();
        if year < 0 || year > max {
            return Err(Error::YearOutOfRange { year, max });
        }
        let people = self.repo.find_all()?;
        let filtered = match choice {
            "equal" => people.into_iter().filter(|p| p.birth_year() == year).collect(),
            "greater" => people.into_iter().filter(|p| p.birth_year() > year).collect(),
            "less" => people.into_iter().filter(|p| p.birth_year() < year).collect(),
            _ => people,
        };
        Ok(filtered)
    }

    /// One page of the listing
    ///
    /// Skips `(page_number - 1) * page_size` records, then takes up to
    /// `page_size`. The request values are echoed back verbatim and
    /// `total_records` always counts the whole collection; a skip past the
    /// end yields an empty page, not an error. A non-positive page number
    /// would produce a negative skip, which is clamped to zero.
    pub fn get_paged_persons(&self, page_number: i64, page_size: i64) -> Result<PagedResult<Person>> {
        let people = self.repo.find_all()?;
        let total_records = people.len();
        let skip = page_number.saturating_sub(1).saturating_mul(page_size).max(0) as usize;
        let take = page_size.max(0) as usize;
        let items = people.into_iter().skip(skip).take(take).collect();

        Ok(PagedResult {
            items,
            page_number,
            page_size,
            total_records,
        })
    }
}

/// Current calendar year, the upper bound for birth-year filtering
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
