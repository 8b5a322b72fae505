use std::fs::File;
use std::path::PathBuf;

use tracing::debug;

use super::{ContactSource, PermissionStatus};
use crate::error::{ExportError, ExportResult};
use crate::model::ContactRecord;

/// A JSON array of address-book records (camelCase keys).
#[derive(Debug, Clone)]
pub struct JsonContactSource {
    path: PathBuf,
}

impl JsonContactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parses a JSON dump into normalized records.
pub fn parse_contacts(json: &str) -> ExportResult<Vec<ContactRecord>> {
    let records: Vec<ContactRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(ContactRecord::normalized).collect())
}

impl ContactSource for JsonContactSource {
    fn request_permission(&self) -> PermissionStatus {
        match File::open(&self.path) {
            Ok(_) if self.path.is_file() => PermissionStatus::Granted,
            Ok(_) => PermissionStatus::Denied,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "contact dump not readable");
                PermissionStatus::Denied
            }
        }
    }

    fn load_contacts(&self) -> ExportResult<Vec<ContactRecord>> {
        if self.request_permission() == PermissionStatus::Denied {
            return Err(ExportError::PermissionDenied);
        }
        let json = std::fs::read_to_string(&self.path)?;
        parse_contacts(&json)
    }

    fn describe(&self) -> String {
        format!("contact file {}", self.path.display())
    }
}
