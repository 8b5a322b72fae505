use crate::model::{EmailEntry, PhoneEntry};

use super::phone::format_phone_number;

/// An address-book entry that carries an optional label ("mobile", "work").
pub trait LabeledEntry {
    fn label(&self) -> Option<&str>;

    /// The value as it should appear in a cell.
    fn formatted_value(&self) -> String;
}

impl LabeledEntry for PhoneEntry {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn formatted_value(&self) -> String {
        format_phone_number(&self.number)
    }
}

impl LabeledEntry for EmailEntry {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn formatted_value(&self) -> String {
        self.email.trim().to_string()
    }
}

/// Formatted value of the first entry whose label contains `target`,
/// ignoring case. Empty string when nothing matches.
pub fn select_by_label<E: LabeledEntry>(entries: &[E], target: &str) -> String {
    let target = target.to_lowercase();
    entries
        .iter()
        .find(|e| {
            e.label()
                .map(|l| l.to_lowercase().contains(&target))
                .unwrap_or(false)
        })
        .map(LabeledEntry::formatted_value)
        .unwrap_or_default()
}

/// Tries each synonym in turn; first non-empty result wins.
pub fn select_by_labels<E: LabeledEntry>(entries: &[E], targets: &[&str]) -> String {
    targets
        .iter()
        .map(|t| select_by_label(entries, t))
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}
