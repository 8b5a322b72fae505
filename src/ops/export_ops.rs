use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::{NamedTempFile, PersistError};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::{ExportError, ExportResult};
use crate::model::ContactRecord;
use crate::sheet::document::numbered_filename;
use crate::sheet::{build_document, build_rows, ExportArtifact, SheetSchema};
use crate::validation;

/// Upper bound on `_n` suffixes tried when the timestamped name is taken.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Where and how an export is written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub schema: SheetSchema,
    pub sheet_name: String,
    pub export_dir: PathBuf,
}

impl From<&AppConfig> for ExportOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            schema: config.schema,
            sheet_name: config.sheet_name.clone(),
            export_dir: config.export_dir.clone(),
        }
    }
}

/// A file that has been fully written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub filename: String,
    pub rows: usize,
}

pub fn export_contacts(contacts: &[ContactRecord], options: &ExportOptions) -> ExportResult<ExportReceipt> {
    export_contacts_at(contacts, options, Utc::now())
}

/// Exports `contacts` in the given order. An empty slice is rejected up
/// front; every later failure surfaces as `ExportFailed`.
pub fn export_contacts_at(
    contacts: &[ContactRecord],
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> ExportResult<ExportReceipt> {
    validation::non_empty_selection(contacts)?;

    run_export(contacts, options, now).map_err(|e| {
        error!(error = %e, export_dir = %options.export_dir.display(), "export failed");
        ExportError::export_failed(e)
    })
}

fn run_export(
    contacts: &[ContactRecord],
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> ExportResult<ExportReceipt> {
    let rows = build_rows(contacts, options.schema);
    let artifact = build_document(&rows, options.schema, &options.sheet_name, now)?;
    let path = persist_artifact(&artifact, &options.export_dir)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| artifact.filename.clone());

    info!(path = %path.display(), rows = artifact.row_count, "contacts exported");
    Ok(ExportReceipt {
        path,
        filename,
        rows: artifact.row_count,
    })
}

/// Writes the artifact under `dir` through a temporary file that is only
/// renamed into place once fully flushed. Never overwrites an existing file:
/// a taken name gets a `_2`, `_3`, ... suffix.
pub fn persist_artifact(artifact: &ExportArtifact, dir: &Path) -> ExportResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&artifact.bytes)?;
    tmp.as_file().sync_all()?;

    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let filename = if attempt == 1 {
            artifact.filename.clone()
        } else {
            numbered_filename(&artifact.filename, attempt)
        };
        let target = dir.join(&filename);
        match tmp.persist_noclobber(&target) {
            Ok(_) => return Ok(target),
            Err(PersistError { error, file }) if error.kind() == ErrorKind::AlreadyExists => {
                debug!(target = %target.display(), "export name taken");
                tmp = file;
            }
            Err(PersistError { error, .. }) => return Err(error.into()),
        }
    }

    Err(ExportError::AlreadyExists {
        entity_type: "Export file".into(),
        identifier: artifact.filename.clone(),
    })
}
