use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, warn};

use crate::error::{ExportError, ExportResult};

use super::row::SpreadsheetRow;
use super::schema::SheetSchema;

/// OOXML spreadsheet MIME type.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Longest text Excel stores in one cell, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Longest worksheet name Excel accepts, in characters.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

const SHEET_NAME_ILLEGAL: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

const FILENAME_PREFIX: &str = "contacts_export_";
const FILENAME_EXTENSION: &str = "xlsx";

/// A serialized workbook, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

/// `contacts_export_<timestamp>.xlsx`, where the timestamp is the UTC
/// instant down to the second with `:` replaced by `-`.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!(
        "{}{}.{}",
        FILENAME_PREFIX,
        now.format("%Y-%m-%dT%H-%M-%S"),
        FILENAME_EXTENSION
    )
}

/// `contacts_export_<timestamp>_<n>.xlsx`, for n >= 2.
pub(crate) fn numbered_filename(filename: &str, n: usize) -> String {
    let stem = filename
        .strip_suffix(FILENAME_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(filename);
    format!("{}_{}.{}", stem, n, FILENAME_EXTENSION)
}

/// Checks `name` against Excel's worksheet naming rules and returns it
/// trimmed.
pub fn check_sheet_name(name: &str) -> ExportResult<&str> {
    let invalid = |reason: String| ExportError::InvalidField {
        field: "sheet_name".into(),
        reason,
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ExportError::BlankField {
            field: "sheet_name".into(),
        });
    }
    if let Some(c) = name.chars().find(|c| SHEET_NAME_ILLEGAL.contains(c)) {
        return Err(invalid(format!("'{}' is not allowed in {:?}", c, name)));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(invalid(format!("{:?} cannot start or end with an apostrophe", name)));
    }
    let len = name.chars().count();
    if len > MAX_SHEET_NAME_CHARS {
        return Err(invalid(format!(
            "{:?} is {} characters, the limit is {}",
            name, len, MAX_SHEET_NAME_CHARS
        )));
    }
    Ok(name)
}

/// Cuts `value` down to the cell limit.
fn clamp_cell(value: &str) -> Cow<'_, str> {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => Cow::Owned(value[..end].to_string()),
        None => Cow::Borrowed(value),
    }
}

/// Builds a single-sheet workbook: bold header row, frozen under the header,
/// one string cell per row and column, fixed column widths.
pub fn build_document(
    rows: &[SpreadsheetRow],
    schema: SheetSchema,
    sheet_name: &str,
    now: DateTime<Utc>,
) -> ExportResult<ExportArtifact> {
    if let Some(row) = rows.iter().find(|r| r.schema() != schema) {
        return Err(ExportError::Other(format!(
            "Row built for {} schema in a {} sheet",
            row.schema(),
            schema
        )));
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(check_sheet_name(sheet_name)?)?;

    for (col, column) in schema.columns().iter().enumerate() {
        let col = cast_col_num(col)?;
        worksheet.write_string_with_format(0, col, column.header(), &header_format)?;
        worksheet.set_column_width(col, column.width())?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let row_num = cast_row_num(idx + 1)?;
        for (col, value) in row.cells().iter().enumerate() {
            let cell = clamp_cell(value);
            if let Cow::Owned(_) = cell {
                warn!(
                    row = idx + 1,
                    column = schema.columns()[col].header(),
                    chars = value.chars().count(),
                    "cell text truncated to {} characters",
                    MAX_CELL_CHARS
                );
            }
            worksheet.write_string(row_num, cast_col_num(col)?, cell.as_ref())?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;

    let bytes = workbook.save_to_buffer()?;
    let filename = export_filename(now);
    debug!(filename = %filename, rows = rows.len(), bytes = bytes.len(), "workbook serialized");

    Ok(ExportArtifact {
        filename,
        bytes,
        row_count: rows.len(),
    })
}

fn cast_row_num(value: usize) -> ExportResult<u32> {
    u32::try_from(value).map_err(|_| ExportError::Other(format!("row index overflow: {}", value)))
}

fn cast_col_num(value: usize) -> ExportResult<u16> {
    u16::try_from(value)
        .map_err(|_| ExportError::Other(format!("column index overflow: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_truncates_sub_second_precision() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap()
            + chrono::Duration::milliseconds(789);
        assert_eq!(export_filename(now), "contacts_export_2026-10-18T09-05-07.xlsx");
    }

    #[test]
    fn clamp_cell_keeps_short_text() {
        assert!(matches!(clamp_cell("Met at conference"), Cow::Borrowed(_)));
    }

    #[test]
    fn clamp_cell_counts_characters_not_bytes() {
        let long = "é".repeat(MAX_CELL_CHARS + 10);
        let clamped = clamp_cell(&long);
        assert_eq!(clamped.chars().count(), MAX_CELL_CHARS);

        let exact = "é".repeat(MAX_CELL_CHARS);
        assert!(matches!(clamp_cell(&exact), Cow::Borrowed(_)));
    }

    #[test]
    fn sheet_name_rules() {
        assert_eq!(check_sheet_name("  Contatos ").unwrap(), "Contatos");
        assert!(matches!(
            check_sheet_name("Contacts: 2026"),
            Err(ExportError::InvalidField { .. })
        ));
        assert!(matches!(
            check_sheet_name("'quoted'"),
            Err(ExportError::InvalidField { .. })
        ));
        assert!(matches!(
            check_sheet_name(&"x".repeat(MAX_SHEET_NAME_CHARS + 1)),
            Err(ExportError::InvalidField { .. })
        ));
        assert!(check_sheet_name(&"x".repeat(MAX_SHEET_NAME_CHARS)).is_ok());
        assert!(matches!(
            check_sheet_name("   "),
            Err(ExportError::BlankField { .. })
        ));
    }

    #[test]
    fn numbered_filename_inserts_suffix_before_extension() {
        assert_eq!(
            numbered_filename("contacts_export_2026-10-18T09-05-07.xlsx", 2),
            "contacts_export_2026-10-18T09-05-07_2.xlsx"
        );
    }
}
