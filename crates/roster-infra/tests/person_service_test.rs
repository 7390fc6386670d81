//! End-to-end tests for PersonService over the in-memory repository

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use roster_domain::model::{Gender, Person};
use roster_domain::service::current_year;
use roster_domain::PersonService;
use roster_infra::fixtures::sample_people;
use roster_infra::persistence::MemoryPersonRepository;

fn service_with_fixtures() -> PersonService<MemoryPersonRepository> {
    PersonService::new(MemoryPersonRepository::with_people(sample_people()))
}

fn person(first: &str, last: &str, gender: Gender, dob: (i32, u32, u32)) -> Person {
    Person {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
        phone_number: "0123456789".to_string(),
        birth_place: "Hanoi".to_string(),
        graduated: false,
    }
}

#[test]
fn created_person_shows_up_in_the_full_listing() {
    let service = service_with_fixtures();
    let p = person("Alice", "Nguyen", Gender::Female, (1995, 3, 10));

    assert!(service.create_person(Some(p.clone())).unwrap());

    let people = service.get_all_people().unwrap();
    assert_eq!(people.len(), 11);
    assert!(people.contains(&p));
    // Appended at the end: listing order is insertion order
    assert_eq!(people.last(), Some(&p));
}

#[test]
fn update_with_a_missing_id_reports_false_and_alters_nothing() {
    let service = service_with_fixtures();
    let before = service.get_all_people().unwrap();

    let updated = service
        .update_person(Uuid::new_v4(), Some(person("Bob", "Lee", Gender::Male, (1980, 1, 1))))
        .unwrap();

    assert!(!updated);
    assert_eq!(service.get_all_people().unwrap(), before);
}

#[test]
fn update_with_a_present_id_keeps_the_stored_identifier() {
    let service = service_with_fixtures();
    let target = service.get_all_people().unwrap()[0].clone();

    // The payload arrives with its own identifier; the stored one wins
    let payload = person("Renamed", "Person", Gender::Other, (1970, 2, 2));
    let payload_id = payload.id;
    assert!(service.update_person(target.id, Some(payload)).unwrap());

    let stored = service.get_person(target.id).unwrap().unwrap();
    assert_eq!(stored.id, target.id);
    assert_eq!(stored.first_name, "Renamed");
    assert!(service.get_person(payload_id).unwrap().is_none());
}

#[test]
fn delete_reports_presence_and_removes_exactly_one_record() {
    let service = service_with_fixtures();
    let target = service.get_all_people().unwrap()[3].clone();

    assert!(!service.delete_person(Uuid::new_v4()).unwrap());
    assert_eq!(service.get_all_people().unwrap().len(), 10);

    assert!(service.delete_person(target.id).unwrap());
    let remaining = service.get_all_people().unwrap();
    assert_eq!(remaining.len(), 9);
    assert!(remaining.iter().all(|p| p.id != target.id));
}

#[test]
fn get_males_returns_only_males_in_listing_order() {
    let service = service_with_fixtures();

    let males = service.get_males().unwrap();

    assert_eq!(males.len(), 5);
    assert!(males.iter().all(|p| p.gender == Gender::Male));
    let first_names: Vec<_> = males.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(first_names, vec!["John", "Michael", "David", "Daniel", "Chris"]);
}

#[test]
fn oldest_person_has_the_earliest_date_of_birth() {
    let repo = MemoryPersonRepository::with_people(vec![
        person("A", "A", Gender::Male, (1980, 6, 1)),
        person("B", "B", Gender::Female, (1975, 6, 1)),
        person("C", "C", Gender::Male, (1990, 6, 1)),
    ]);
    let service = PersonService::new(repo);

    let oldest = service.get_oldest_person().unwrap().unwrap();
    assert_eq!(oldest.date_of_birth.format("%Y").to_string(), "1975");
}

#[test]
fn full_names_project_in_listing_order() {
    let repo = MemoryPersonRepository::with_people(vec![
        person("John", "Doe", Gender::Male, (1990, 5, 20)),
        person("Jane", "Smith", Gender::Female, (1995, 10, 15)),
    ]);
    let service = PersonService::new(repo);

    assert_eq!(
        service.get_full_names().unwrap(),
        vec!["John Doe".to_string(), "Jane Smith".to_string()]
    );
}

#[test]
fn full_name_of_a_single_record() {
    let service = service_with_fixtures();
    let target = service.get_all_people().unwrap()[1].clone();

    assert_eq!(
        service.get_full_name(target.id).unwrap(),
        Some("Jane Smith".to_string())
    );
    assert_eq!(service.get_full_name(Uuid::new_v4()).unwrap(), None);
}

#[test]
fn birth_year_filter_is_exhaustive_and_exclusive() {
    let service = service_with_fixtures();
    let year = 1990;

    let equal = service.filter_by_birth_year(year, "equal").unwrap();
    let greater = service.filter_by_birth_year(year, "greater").unwrap();
    let less = service.filter_by_birth_year(year, "less").unwrap();

    assert!(equal.iter().all(|p| p.birth_year() == year));
    assert!(greater.iter().all(|p| p.birth_year() > year));
    assert!(less.iter().all(|p| p.birth_year() < year));

    // Recombined, the three partitions cover the listing with no duplicates
    let mut ids = HashSet::new();
    for p in equal.iter().chain(&greater).chain(&less) {
        assert!(ids.insert(p.id), "record appeared in two partitions");
    }
    let all: HashSet<_> = service.get_all_people().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, all);
}

#[test]
fn unrecognized_filter_choice_returns_the_full_listing() {
    let service = service_with_fixtures();

    let all = service.get_all_people().unwrap();
    assert_eq!(service.filter_by_birth_year(1990, "bogus").unwrap(), all);
}

#[test]
fn out_of_range_years_are_rejected() {
    let service = service_with_fixtures();

    assert!(service.filter_by_birth_year(-1, "equal").is_err());
    assert!(service.filter_by_birth_year(current_year() + 1, "equal").is_err());
    assert!(service.filter_by_birth_year(0, "equal").is_ok());
    assert!(service.filter_by_birth_year(current_year(), "equal").is_ok());
}

#[test]
fn first_page_of_three_is_the_first_three_records() {
    let service = service_with_fixtures();
    let all = service.get_all_people().unwrap();

    let page = service.get_paged_persons(1, 3).unwrap();

    assert_eq!(page.items, all[..3].to_vec());
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 3);
    assert_eq!(page.total_records, 10);
}

#[test]
fn second_page_of_four_covers_offsets_four_through_seven() {
    let service = service_with_fixtures();
    let all = service.get_all_people().unwrap();

    let page = service.get_paged_persons(2, 4).unwrap();

    assert_eq!(page.items, all[4..8].to_vec());
}

#[test]
fn a_page_past_the_end_is_empty_but_still_well_formed() {
    let service = service_with_fixtures();

    let page = service.get_paged_persons(3, 5).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.page_number, 3);
    assert_eq!(page.page_size, 5);
    assert_eq!(page.total_records, 10);
}
