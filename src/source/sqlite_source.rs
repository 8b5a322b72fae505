use std::path::PathBuf;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use super::{ContactSource, PermissionStatus};
use crate::db::contact_repo;
use crate::error::{ExportError, ExportResult};
use crate::model::ContactRecord;

/// The SQLite contact store, opened read-only.
#[derive(Debug, Clone)]
pub struct SqliteContactSource {
    path: PathBuf,
}

impl SqliteContactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> ExportResult<Connection> {
        if !self.path.is_file() {
            return Err(ExportError::PermissionDenied);
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }
}

impl ContactSource for SqliteContactSource {
    fn request_permission(&self) -> PermissionStatus {
        match self.open() {
            Ok(_) => PermissionStatus::Granted,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "contact store not readable");
                PermissionStatus::Denied
            }
        }
    }

    fn load_contacts(&self) -> ExportResult<Vec<ContactRecord>> {
        let conn = self.open()?;
        let contacts = contact_repo::find_all(&conn)?;
        Ok(contacts.into_iter().map(ContactRecord::normalized).collect())
    }

    fn describe(&self) -> String {
        format!("contact store {}", self.path.display())
    }
}
