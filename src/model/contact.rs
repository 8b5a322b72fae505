use serde::{Deserialize, Serialize};

use super::ids::Id;
use crate::validation::trim_optional;

/// Display name used when a record carries no name data at all.
pub const UNNAMED_CONTACT: &str = "Unnamed Contact";

/// A phone number as stored in the address book (free-form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl PhoneEntry {
    pub fn new(number: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            number: number.into(),
            label: label.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEntry {
    #[serde(alias = "address")]
    pub email: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl EmailEntry {
    pub fn new(email: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            email: email.into(),
            label: label.map(str::to_string),
        }
    }
}

/// A postal address. Every component is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub label: Option<String>,
}

impl PostalAddress {
    /// Components in rendering order.
    pub fn components(&self) -> [Option<&str>; 5] {
        [
            self.street.as_deref(),
            self.city.as_deref(),
            self.region.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        ]
    }
}

/// A birthday. Address books commonly omit the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub day: u32,
    /// Calendar month, 1 = January. JSON dumps taken from APIs that count
    /// months from 0 (expo-contacts, JavaScript `Date`) must add one first.
    pub month: u32,
    #[serde(default)]
    pub year: Option<i32>,
}

impl BirthDate {
    pub fn new(day: u32, month: u32, year: Option<i32>) -> Self {
        Self { day, month, year }
    }
}

/// One address-book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default = "Id::generate")]
    pub id: Id<ContactRecord>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneEntry>,
    #[serde(default)]
    pub emails: Vec<EmailEntry>,
    #[serde(default)]
    pub addresses: Vec<PostalAddress>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub birthday: Option<BirthDate>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ContactRecord {
    pub fn create(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Id::new(id),
            name: name.into(),
            first_name: None,
            last_name: None,
            phone_numbers: Vec::new(),
            emails: Vec::new(),
            addresses: Vec::new(),
            company: None,
            job_title: None,
            birthday: None,
            note: None,
        }
    }

    /// Trims optional text fields and fills in the display name.
    pub fn normalized(mut self) -> Self {
        self.first_name = trim_optional(self.first_name.as_deref());
        self.last_name = trim_optional(self.last_name.as_deref());
        self.company = trim_optional(self.company.as_deref());
        self.job_title = trim_optional(self.job_title.as_deref());
        self.note = trim_optional(self.note.as_deref());
        for phone in &mut self.phone_numbers {
            phone.label = trim_optional(phone.label.as_deref());
        }
        for email in &mut self.emails {
            email.label = trim_optional(email.label.as_deref());
        }
        for address in &mut self.addresses {
            address.street = trim_optional(address.street.as_deref());
            address.city = trim_optional(address.city.as_deref());
            address.region = trim_optional(address.region.as_deref());
            address.postal_code = trim_optional(address.postal_code.as_deref());
            address.country = trim_optional(address.country.as_deref());
            address.label = trim_optional(address.label.as_deref());
        }
        self.name = display_name(
            Some(self.name.as_str()),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
        );
        self
    }

    /// Case-insensitive match on name, name parts and company.
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        let contains = |field: Option<&str>| {
            field
                .map(|f| f.to_lowercase().contains(needle))
                .unwrap_or(false)
        };
        contains(Some(self.name.as_str()))
            || contains(self.first_name.as_deref())
            || contains(self.last_name.as_deref())
            || contains(self.company.as_deref())
    }
}

/// Resolves the display name: the stored name, else `"<first> <last>"`,
/// else the placeholder.
pub fn display_name(name: Option<&str>, first: Option<&str>, last: Option<&str>) -> String {
    if let Some(name) = trim_optional(name) {
        return name;
    }
    let joined = format!("{} {}", first.unwrap_or(""), last.unwrap_or(""));
    trim_optional(Some(joined.as_str())).unwrap_or_else(|| UNNAMED_CONTACT.to_string())
}
