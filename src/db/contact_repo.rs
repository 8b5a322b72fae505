use std::collections::HashMap;

use rusqlite::{params, Connection};

use crate::error::{ExportError, ExportResult};
use crate::model::{BirthDate, ContactRecord, EmailEntry, Id, PhoneEntry, PostalAddress};

/// Appends a contact (and its phones, emails and addresses) after the
/// last stored contact.
pub fn insert(conn: &Connection, contact: &ContactRecord) -> ExportResult<()> {
    let birthday = contact.birthday.as_ref();
    conn.execute(
        "INSERT INTO contacts (id, position, name, first_name, last_name, company, job_title,
                               birthday_day, birthday_month, birthday_year, note)
         VALUES (?1, (SELECT COALESCE(MAX(position), -1) + 1 FROM contacts),
                 ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            contact.id.as_str(),
            contact.name,
            contact.first_name,
            contact.last_name,
            contact.company,
            contact.job_title,
            birthday.map(|b| b.day),
            birthday.map(|b| b.month),
            birthday.and_then(|b| b.year),
            contact.note,
        ],
    )?;

    for (position, phone) in contact.phone_numbers.iter().enumerate() {
        conn.execute(
            "INSERT INTO contact_phones (contact_id, position, number, label) VALUES (?1, ?2, ?3, ?4)",
            params![contact.id.as_str(), position as i64, phone.number, phone.label],
        )?;
    }

    for (position, email) in contact.emails.iter().enumerate() {
        conn.execute(
            "INSERT INTO contact_emails (contact_id, position, email, label) VALUES (?1, ?2, ?3, ?4)",
            params![contact.id.as_str(), position as i64, email.email, email.label],
        )?;
    }

    for (position, address) in contact.addresses.iter().enumerate() {
        conn.execute(
            "INSERT INTO contact_addresses (contact_id, position, street, city, region, postal_code, country, label)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                contact.id.as_str(),
                position as i64,
                address.street,
                address.city,
                address.region,
                address.postal_code,
                address.country,
                address.label,
            ],
        )?;
    }
    Ok(())
}

pub fn count(conn: &Connection) -> ExportResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

/// All contacts in load (insertion) order.
pub fn find_all(conn: &Connection) -> ExportResult<Vec<ContactRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, first_name, last_name, company, job_title,
                birthday_day, birthday_month, birthday_year, note
         FROM contacts ORDER BY position",
    )?;

    let mut contacts = stmt
        .query_map([], |row| Ok(row_to_contact(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<ExportResult<Vec<_>>>()?;

    let mut phones = load_phones(conn)?;
    let mut emails = load_emails(conn)?;
    let mut addresses = load_addresses(conn)?;
    for contact in &mut contacts {
        contact.phone_numbers = phones.remove(contact.id.as_str()).unwrap_or_default();
        contact.emails = emails.remove(contact.id.as_str()).unwrap_or_default();
        contact.addresses = addresses.remove(contact.id.as_str()).unwrap_or_default();
    }
    Ok(contacts)
}

fn load_phones(conn: &Connection) -> ExportResult<HashMap<String, Vec<PhoneEntry>>> {
    let mut stmt = conn.prepare(
        "SELECT contact_id, number, label FROM contact_phones ORDER BY contact_id, position",
    )?;
    let rows = stmt
        .query_map([], |row| {
            let contact_id: String = row.get(0)?;
            let number: String = row.get(1)?;
            let label: Option<String> = row.get(2)?;
            Ok((contact_id, PhoneEntry { number, label }))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(group_by_contact(rows))
}

fn load_emails(conn: &Connection) -> ExportResult<HashMap<String, Vec<EmailEntry>>> {
    let mut stmt = conn.prepare(
        "SELECT contact_id, email, label FROM contact_emails ORDER BY contact_id, position",
    )?;
    let rows = stmt
        .query_map([], |row| {
            let contact_id: String = row.get(0)?;
            let email: String = row.get(1)?;
            let label: Option<String> = row.get(2)?;
            Ok((contact_id, EmailEntry { email, label }))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(group_by_contact(rows))
}

fn load_addresses(conn: &Connection) -> ExportResult<HashMap<String, Vec<PostalAddress>>> {
    let mut stmt = conn.prepare(
        "SELECT contact_id, street, city, region, postal_code, country, label
         FROM contact_addresses ORDER BY contact_id, position",
    )?;
    let rows = stmt
        .query_map([], |row| {
            let contact_id: String = row.get(0)?;
            Ok((
                contact_id,
                PostalAddress {
                    street: row.get(1)?,
                    city: row.get(2)?,
                    region: row.get(3)?,
                    postal_code: row.get(4)?,
                    country: row.get(5)?,
                    label: row.get(6)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(group_by_contact(rows))
}

fn group_by_contact<T>(rows: Vec<(String, T)>) -> HashMap<String, Vec<T>> {
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for (contact_id, entry) in rows {
        grouped.entry(contact_id).or_default().push(entry);
    }
    grouped
}

fn row_to_contact(row: &rusqlite::Row) -> ExportResult<ContactRecord> {
    let id: String = row.get(0).map_err(rusqlite::Error::from)?;
    let name: String = row.get(1).map_err(rusqlite::Error::from)?;
    let first_name: Option<String> = row.get(2).map_err(rusqlite::Error::from)?;
    let last_name: Option<String> = row.get(3).map_err(rusqlite::Error::from)?;
    let company: Option<String> = row.get(4).map_err(rusqlite::Error::from)?;
    let job_title: Option<String> = row.get(5).map_err(rusqlite::Error::from)?;
    let day: Option<u32> = row.get(6).map_err(rusqlite::Error::from)?;
    let month: Option<u32> = row.get(7).map_err(rusqlite::Error::from)?;
    let year: Option<i32> = row.get(8).map_err(rusqlite::Error::from)?;
    let note: Option<String> = row.get(9).map_err(rusqlite::Error::from)?;

    let birthday = match (day, month) {
        (Some(day), Some(month)) => Some(BirthDate { day, month, year }),
        (None, None) => None,
        _ => {
            return Err(ExportError::Other(format!(
                "Incomplete birthday for contact {}",
                id
            )))
        }
    };

    Ok(ContactRecord {
        id: Id::new(id),
        name,
        first_name,
        last_name,
        phone_numbers: Vec::new(),
        emails: Vec::new(),
        addresses: Vec::new(),
        company,
        job_title,
        birthday,
        note,
    })
}
