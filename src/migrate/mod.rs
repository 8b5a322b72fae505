use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use tracing::{info, warn};

use crate::db::{contact_repo, schema};
use crate::error::{ExportError, ExportResult};
use crate::model::ContactRecord;
use crate::source::json_source::parse_contacts;
use crate::validation;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub contacts: usize,
    pub phone_numbers: usize,
    pub emails: usize,
    pub addresses: usize,
}

/// Imports a JSON contact dump into an SQLite contact store.
/// The whole file is imported in one transaction or not at all.
pub fn import_json(json_path: &Path, db_path: &Path) -> ExportResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let contacts = parse_contacts(&json_str)?;

    let mut conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    let stats = import_contacts(&mut conn, &contacts)?;
    info!(
        source = %json_path.display(),
        store = %db_path.display(),
        contacts = stats.contacts,
        "contacts imported"
    );
    Ok(stats)
}

/// Removes a store left behind by a failed import. Returns false, after
/// logging, if the file is still there.
pub fn discard_store(db_path: &Path) -> bool {
    match std::fs::remove_file(db_path) {
        Ok(()) => true,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            warn!(
                store = %db_path.display(),
                error = %e,
                "could not remove partial contact store"
            );
            false
        }
    }
}

pub fn import_contacts(conn: &mut Connection, contacts: &[ContactRecord]) -> ExportResult<ImportStats> {
    let mut seen = HashSet::new();
    for contact in contacts {
        let id = validation::non_blank(contact.id.as_str(), "contact id")?;
        if !seen.insert(id.clone()) {
            return Err(ExportError::AlreadyExists {
                entity_type: "Contact".into(),
                identifier: id,
            });
        }
    }

    let tx = conn.transaction()?;
    let mut stats = ImportStats::default();
    for contact in contacts {
        contact_repo::insert(&tx, contact)?;
        stats.contacts += 1;
        stats.phone_numbers += contact.phone_numbers.len();
        stats.emails += contact.emails.len();
        stats.addresses += contact.addresses.len();
    }
    tx.commit()?;
    Ok(stats)
}
