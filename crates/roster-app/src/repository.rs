//! Repository wiring for the application layer

use std::path::Path;

use roster_domain::PersonService;
use roster_infra::people_file;
use roster_infra::persistence::MemoryPersonRepository;
use roster_types::Result;

use crate::config::Config;

/// Load the configured people file into a fresh in-memory repository
pub fn open_person_repo(config: &Config) -> Result<MemoryPersonRepository> {
    let path = config.data_file()?;
    open_person_repo_at(&path)
}

/// Load a people file at a custom path into an in-memory repository
pub fn open_person_repo_at(path: &Path) -> Result<MemoryPersonRepository> {
    let people = people_file::load_people(path)?;
    Ok(MemoryPersonRepository::with_people(people))
}

/// Build a person service over the people file at `path`
pub fn open_person_service(path: &Path) -> Result<PersonService<MemoryPersonRepository>> {
    Ok(PersonService::new(open_person_repo_at(path)?))
}

/// Persist the service's current listing back to the people file
pub fn store_people(
    service: &PersonService<MemoryPersonRepository>,
    path: &Path,
) -> Result<()> {
    let people = service.get_all_people()?;
    people_file::save_people(path, &people)
}
