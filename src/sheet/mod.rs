//! Contact rows and the single-sheet workbook built from them.

pub mod schema;
pub mod row;
pub mod document;

pub use document::{
    build_document, check_sheet_name, export_filename, ExportArtifact, MAX_CELL_CHARS,
    MAX_SHEET_NAME_CHARS, XLSX_MIME_TYPE,
};
pub use row::{build_row, build_rows, SpreadsheetRow};
pub use schema::{Column, SheetSchema};
