use crate::format::{format_address, format_date, select_by_labels, LabeledEntry};
use crate::model::ContactRecord;

use super::schema::{Column, SheetSchema};

const MOBILE_LABELS: &[&str] = &["mobile", "cell", "iphone"];
const HOME_LABELS: &[&str] = &["home"];
const WORK_LABELS: &[&str] = &["work"];
const HOME_EMAIL_LABELS: &[&str] = &["home", "personal"];

/// The fixed-column projection of one contact. Always carries one cell per
/// schema column; missing data is an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetRow {
    schema: SheetSchema,
    cells: Vec<String>,
}

impl SpreadsheetRow {
    pub fn schema(&self) -> SheetSchema {
        self.schema
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell for `column`, or None if the schema does not carry it.
    pub fn get(&self, column: Column) -> Option<&str> {
        self.schema
            .position(column)
            .map(|i| self.cells[i].as_str())
    }
}

pub fn build_row(contact: &ContactRecord, schema: SheetSchema) -> SpreadsheetRow {
    let cells = schema
        .columns()
        .iter()
        .map(|column| cell_value(contact, *column))
        .collect();
    SpreadsheetRow { schema, cells }
}

/// One row per contact, same order.
pub fn build_rows(contacts: &[ContactRecord], schema: SheetSchema) -> Vec<SpreadsheetRow> {
    contacts.iter().map(|c| build_row(c, schema)).collect()
}

fn cell_value(contact: &ContactRecord, column: Column) -> String {
    let text = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();
    match column {
        Column::FullName => contact.name.clone(),
        Column::FirstName => text(&contact.first_name),
        Column::LastName => text(&contact.last_name),
        Column::PrimaryPhone => contact
            .phone_numbers
            .first()
            .map(LabeledEntry::formatted_value)
            .unwrap_or_default(),
        Column::MobilePhone => select_by_labels(&contact.phone_numbers, MOBILE_LABELS),
        Column::HomePhone => select_by_labels(&contact.phone_numbers, HOME_LABELS),
        Column::WorkPhone => select_by_labels(&contact.phone_numbers, WORK_LABELS),
        Column::PrimaryEmail => contact
            .emails
            .first()
            .map(LabeledEntry::formatted_value)
            .unwrap_or_default(),
        Column::HomeEmail => select_by_labels(&contact.emails, HOME_EMAIL_LABELS),
        Column::WorkEmail => select_by_labels(&contact.emails, WORK_LABELS),
        Column::Address => format_address(contact.addresses.first()),
        Column::Company => text(&contact.company),
        Column::JobTitle => text(&contact.job_title),
        Column::Birthday => format_date(contact.birthday.as_ref()),
        Column::Notes => text(&contact.note),
    }
}
