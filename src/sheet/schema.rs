use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// One named spreadsheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FullName,
    FirstName,
    LastName,
    PrimaryPhone,
    MobilePhone,
    HomePhone,
    WorkPhone,
    PrimaryEmail,
    HomeEmail,
    WorkEmail,
    Address,
    Company,
    JobTitle,
    Birthday,
    Notes,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::FullName => "Full Name",
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::PrimaryPhone => "Primary Phone",
            Column::MobilePhone => "Mobile Phone",
            Column::HomePhone => "Home Phone",
            Column::WorkPhone => "Work Phone",
            Column::PrimaryEmail => "Primary Email",
            Column::HomeEmail => "Home Email",
            Column::WorkEmail => "Work Email",
            Column::Address => "Address",
            Column::Company => "Company",
            Column::JobTitle => "Job Title",
            Column::Birthday => "Birthday",
            Column::Notes => "Notes",
        }
    }

    /// Display width hint, in Excel character units.
    pub fn width(self) -> f64 {
        match self {
            Column::FullName => 30.0,
            Column::FirstName
            | Column::LastName
            | Column::PrimaryPhone
            | Column::MobilePhone
            | Column::HomePhone
            | Column::WorkPhone => 18.0,
            Column::PrimaryEmail | Column::HomeEmail | Column::WorkEmail => 28.0,
            Column::Address | Column::Notes => 40.0,
            Column::Company => 24.0,
            Column::JobTitle => 22.0,
            Column::Birthday => 14.0,
        }
    }
}

const RICH_COLUMNS: [Column; 15] = [
    Column::FullName,
    Column::FirstName,
    Column::LastName,
    Column::PrimaryPhone,
    Column::MobilePhone,
    Column::HomePhone,
    Column::WorkPhone,
    Column::PrimaryEmail,
    Column::HomeEmail,
    Column::WorkEmail,
    Column::Address,
    Column::Company,
    Column::JobTitle,
    Column::Birthday,
    Column::Notes,
];

const COMPACT_COLUMNS: [Column; 3] = [Column::FullName, Column::PrimaryPhone, Column::MobilePhone];

/// Fixed column layout of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SheetSchema {
    /// Name parts, categorized phones and emails, address, work and personal details.
    #[default]
    Rich,
    /// Full name, primary phone, mobile phone.
    Compact,
}

impl SheetSchema {
    pub fn columns(self) -> &'static [Column] {
        match self {
            SheetSchema::Rich => &RICH_COLUMNS,
            SheetSchema::Compact => &COMPACT_COLUMNS,
        }
    }

    pub fn headers(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.header()).collect()
    }

    pub fn position(self, column: Column) -> Option<usize> {
        self.columns().iter().position(|c| *c == column)
    }
}

impl fmt::Display for SheetSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSchema::Rich => write!(f, "rich"),
            SheetSchema::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for SheetSchema {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rich" => Ok(SheetSchema::Rich),
            "compact" => Ok(SheetSchema::Compact),
            other => Err(ExportError::Other(format!("Unknown sheet schema: {}", other))),
        }
    }
}
