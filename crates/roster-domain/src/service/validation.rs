//! Declarative validation rules for person payloads
//!
//! Rule checking is independent of the query/mutation logic; callers decide
//! when to apply it. The service itself never validates.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Person;

const NAME_MAX_CHARS: usize = 50;
const BIRTH_PLACE_MAX_CHARS: usize = 100;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern is a valid regex"));

/// A single failed rule: the field it applies to and a user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check every rule against the payload
///
/// Returns one issue per failed rule, in declaration order; an empty list
/// means the payload is acceptable. Gender needs no rule, the enum cannot
/// hold an invalid value.
pub fn validate_person(person: &Person) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if person.first_name.trim().is_empty() {
        issues.push(issue("first_name", "First name is required."));
    } else if person.first_name.chars().count() > NAME_MAX_CHARS {
        issues.push(issue(
            "first_name",
            "First name cannot be longer than 50 characters.",
        ));
    }

    if person.last_name.trim().is_empty() {
        issues.push(issue("last_name", "Last name is required."));
    } else if person.last_name.chars().count() > NAME_MAX_CHARS {
        issues.push(issue(
            "last_name",
            "Last name cannot be longer than 50 characters.",
        ));
    }

    if person.date_of_birth >= Local::now().date_naive() {
        issues.push(issue("date_of_birth", "Date of birth must be in the past."));
    }

    if person.phone_number.trim().is_empty() {
        issues.push(issue("phone_number", "Phone number is required."));
    } else if !PHONE_PATTERN.is_match(&person.phone_number) {
        issues.push(issue("phone_number", "Phone number must be 10 digits."));
    }

    if person.birth_place.trim().is_empty() {
        issues.push(issue("birth_place", "Birth place is required."));
    } else if person.birth_place.chars().count() > BIRTH_PLACE_MAX_CHARS {
        issues.push(issue(
            "birth_place",
            "Birth place cannot be longer than 100 characters.",
        ));
    }

    issues
}

/// True when no rule fails
pub fn is_valid(person: &Person) -> bool {
    validate_person(person).is_empty()
}

fn issue(field: &'static str, message: &'static str) -> ValidationIssue {
    ValidationIssue { field, message }
}
