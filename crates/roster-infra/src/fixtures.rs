//! Sample person records for tests and the `init` command
//!
//! Seed data lives here rather than inside the repository constructor, so
//! production callers always start from an explicitly provided collection.

use chrono::NaiveDate;
use uuid::Uuid;

use roster_domain::model::{Gender, Person};

/// Ten distinct sample records with a mix of genders, decades and cities
pub fn sample_people() -> Vec<Person> {
    vec![
        sample("John", "Doe", Gender::Male, 1990, 5, 20, "1234567890", "New York", true),
        sample("Jane", "Smith", Gender::Female, 1995, 10, 15, "9876543210", "Los Angeles", false),
        sample("Alice", "Johnson", Gender::Female, 1988, 3, 8, "5551234560", "Chicago", true),
        sample("Michael", "Brown", Gender::Male, 1992, 7, 22, "4449876540", "Houston", false),
        sample("David", "Wilson", Gender::Male, 2000, 1, 15, "6667891230", "San Francisco", true),
        sample("Emily", "Davis", Gender::Female, 1997, 9, 10, "7773214560", "Boston", false),
        sample("Daniel", "Garcia", Gender::Male, 1985, 4, 5, "8884567890", "Seattle", true),
        sample("Sophia", "Martinez", Gender::Female, 1993, 11, 25, "9996543210", "Miami", false),
        sample("Chris", "Evans", Gender::Male, 1987, 6, 13, "1112223330", "Dallas", true),
        sample("Olivia", "Taylor", Gender::Female, 1991, 12, 5, "4445556660", "Denver", false),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    first: &str,
    last: &str,
    gender: Gender,
    year: i32,
    month: u32,
    day: u32,
    phone: &str,
    birth_place: &str,
    graduated: bool,
) -> Person {
    Person {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid"),
        phone_number: phone.to_string(),
        birth_place: birth_place.to_string(),
        graduated,
    }
}
