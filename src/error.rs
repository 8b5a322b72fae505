use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Contacts access required")]
    PermissionDenied,

    #[error("Please select at least one contact to export.")]
    EmptySelection,

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Failed to export contacts to Excel")]
    ExportFailed {
        #[source]
        source: Box<ExportError>,
    },

    #[error("Share failed: {0}")]
    ShareFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ExportError {
    /// Collapses any failure into the single user-facing export error.
    pub fn export_failed(cause: ExportError) -> Self {
        match cause {
            already @ ExportError::ExportFailed { .. } => already,
            other => ExportError::ExportFailed {
                source: Box::new(other),
            },
        }
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
