//! Person record type

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender of a person record
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// A single person record
///
/// The identifier is assigned once at creation and never reassigned by
/// updates; `PersonService::update_person` coerces incoming payloads to the
/// stored identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub birth_place: String,
    pub graduated: bool,
}

impl Person {
    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Year the person was born
    pub fn birth_year(&self) -> i32 {
        self.date_of_birth.year()
    }

    /// Age as a plain year difference. Months and days are ignored, so the
    /// value is one too high before the birthday in a given year.
    pub fn age_in_year(&self, year: i32) -> i32 {
        year - self.date_of_birth.year()
    }

    /// Age as of the current calendar year
    pub fn age(&self) -> i32 {
        self.age_in_year(chrono::Local::now().year())
    }
}
