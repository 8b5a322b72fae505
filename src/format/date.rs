use chrono::NaiveDate;

use crate::model::BirthDate;

/// Leap year used to validate year-less birthdays (so 29/02 is accepted).
const PLACEHOLDER_YEAR: i32 = 2000;

/// Renders a birthday as `dd/mm/yyyy`, or `dd/mm` when the year is unknown.
/// Absent or impossible dates render as an empty string.
pub fn format_date(date: Option<&BirthDate>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let year = date.year.unwrap_or(PLACEHOLDER_YEAR);
    match NaiveDate::from_ymd_opt(year, date.month, date.day) {
        Some(valid) if date.year.is_some() => valid.format("%d/%m/%Y").to_string(),
        Some(valid) => valid.format("%d/%m").to_string(),
        None => String::new(),
    }
}
