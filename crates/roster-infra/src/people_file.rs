//! JSON persistence for person collections

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use roster_domain::model::Person;
use roster_types::Result;

/// Load a person collection from a JSON file
///
/// A missing file is an empty collection, not an error.
pub fn load_people(path: &Path) -> Result<Vec<Person>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let people: Vec<Person> = serde_json::from_reader(reader)?;
    tracing::debug!(count = people.len(), path = %path.display(), "loaded people file");
    Ok(people)
}

/// Save a person collection as pretty-printed JSON
///
/// Parent directories are created as needed.
pub fn save_people(path: &Path, people: &[Person]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, people)?;
    tracing::debug!(count = people.len(), path = %path.display(), "saved people file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_people;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");
        let people = sample_people();

        save_people(&path, &people).unwrap();
        let loaded = load_people(&path).unwrap();

        assert_eq!(loaded, people);
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let loaded = load_people(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("people.json");

        save_people(&path, &sample_people()).unwrap();

        assert!(path.exists());
    }
}
