//! Excel export functionality

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use roster_domain::model::Person;
use roster_types::{Error, Result};

/// Default file name for a people export
pub const EXPORT_FILE_NAME: &str = "PeopleData.xlsx";

const HEADERS: [&str; 8] = [
    "ID",
    "First Name",
    "Last Name",
    "Gender",
    "Date of Birth",
    "Phone Number",
    "Birth Place",
    "Graduated",
];

/// Export records to an Excel file on disk
pub fn export_to_excel(people: &[Person], output_path: &Path) -> Result<()> {
    let mut workbook = build_workbook(people)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export records to an in-memory spreadsheet blob
pub fn export_to_buffer(people: &[Person]) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(people)?;

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(e.to_string()))
}

fn build_workbook(people: &[Person]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_people_sheet(sheet, people)?;
    Ok(workbook)
}

fn write_people_sheet(sheet: &mut Worksheet, people: &[Person]) -> Result<()> {
    sheet
        .set_name("People")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header row
    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // One row per record, in listing order
    for (row_idx, person) in people.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet
            .write_string(row, 0, person.id.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &person.first_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &person.last_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, person.gender.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, person.date_of_birth.format("%Y-%m-%d").to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 5, &person.phone_number)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 6, &person.birth_place)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 7, if person.graduated { "Yes" } else { "No" })
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Approximate column widths for readability
    sheet
        .set_column_width(0, 38)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(4, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(6, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
