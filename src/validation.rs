use crate::error::{ExportError, ExportResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ExportResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ExportError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Rejects an export request that carries no contacts.
pub fn non_empty_selection<T>(selected: &[T]) -> ExportResult<()> {
    if selected.is_empty() {
        Err(ExportError::EmptySelection)
    } else {
        Ok(())
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("hello", "name").unwrap(), "hello");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  hello  ", "name").unwrap(), "hello");
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(matches!(
            non_blank("   ", "id"),
            Err(ExportError::BlankField { field }) if field == "id"
        ));
    }

    #[test]
    fn non_empty_selection_accepts_non_empty() {
        assert!(non_empty_selection(&["a"]).is_ok());
    }

    #[test]
    fn non_empty_selection_rejects_empty() {
        let empty: &[String] = &[];
        assert!(matches!(
            non_empty_selection(empty),
            Err(ExportError::EmptySelection)
        ));
    }

    #[test]
    fn trim_optional_trims() {
        assert_eq!(trim_optional(Some("  hi  ")), Some("hi".to_string()));
    }

    #[test]
    fn trim_optional_returns_none_for_blank() {
        assert_eq!(trim_optional(Some("   ")), None);
    }

    #[test]
    fn trim_optional_returns_none_for_none() {
        assert_eq!(trim_optional(None), None);
    }
}
