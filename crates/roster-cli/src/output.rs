//! Output formatting module

use roster_domain::model::{PagedResult, Person};
use roster_types::{OutputFormat, Result};

/// Print a single person
pub fn output_person(format: OutputFormat, person: &Person) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(person)?);
    } else {
        println!("ID:            {}", person.id);
        println!("Name:          {}", person.full_name());
        println!("Gender:        {}", person.gender);
        println!(
            "Date of birth: {} (age {})",
            person.date_of_birth.format("%Y-%m-%d"),
            person.age()
        );
        println!("Phone number:  {}", person.phone_number);
        println!("Birth place:   {}", person.birth_place);
        println!("Graduated:     {}", if person.graduated { "Yes" } else { "No" });
    }

    Ok(())
}

/// Print a listing of persons
pub fn output_people(format: OutputFormat, people: &[Person]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(people)?);
        return Ok(());
    }

    if people.is_empty() {
        println!("No records.");
        return Ok(());
    }

    print_table_header();
    for person in people {
        print_table_row(person);
    }
    println!("\n{} record(s)", people.len());

    Ok(())
}

/// Print one page of the listing
pub fn output_page(format: OutputFormat, page: &PagedResult<Person>) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    print_table_header();
    for person in &page.items {
        print_table_row(person);
    }
    println!(
        "\nPage {} (size {}), {} record(s) total",
        page.page_number, page.page_size, page.total_records
    );

    Ok(())
}

fn print_table_header() {
    println!(
        "{:<36} {:<22} {:<7} {:<11} {:<11} {:<16} {:<9}",
        "ID", "Name", "Gender", "Born", "Phone", "Birth Place", "Graduated"
    );
}

fn print_table_row(person: &Person) {
    println!(
        "{:<36} {:<22} {:<7} {:<11} {:<11} {:<16} {:<9}",
        person.id.to_string(),
        person.full_name(),
        person.gender.to_string(),
        person.date_of_birth.format("%Y-%m-%d").to_string(),
        person.phone_number,
        person.birth_place,
        if person.graduated { "Yes" } else { "No" }
    );
}
