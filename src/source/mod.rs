//! Address-book backends the exporter reads from.

pub mod sqlite_source;
pub mod json_source;

use std::path::Path;

use crate::error::ExportResult;
use crate::model::ContactRecord;

pub use json_source::JsonContactSource;
pub use sqlite_source::SqliteContactSource;

/// Outcome of asking a source for read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// A readable address book.
pub trait ContactSource {
    /// Checks read access. Sources that are not granted yield no contacts.
    fn request_permission(&self) -> PermissionStatus;

    /// All contacts, normalized, in the source's own order.
    fn load_contacts(&self) -> ExportResult<Vec<ContactRecord>>;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

/// Picks a backend by file extension: `.json` dumps, anything else is an
/// SQLite contact store.
pub fn open_source(path: &Path) -> Box<dyn ContactSource> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Box::new(JsonContactSource::new(path))
    } else {
        Box::new(SqliteContactSource::new(path))
    }
}
