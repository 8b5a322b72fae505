//! Selection and search state for one export screen.

use tracing::{info, warn};

use crate::error::{ExportError, ExportResult};
use crate::model::{ContactRecord, Id, SelectionSet};
use crate::ops::export_ops::{self, ExportOptions, ExportReceipt};
use crate::ops::share_ops::{self, ShareOutcome};
use crate::share::ShareSheet;
use crate::source::{ContactSource, PermissionStatus};
use crate::validation;

/// Whether the address book has been opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// Not asked yet.
    Unknown,
    Granted,
    Denied,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub receipt: ExportReceipt,
    pub share: ShareOutcome,
}

#[derive(Debug)]
pub struct ExportSession {
    contacts: Vec<ContactRecord>,
    query: String,
    selection: SelectionSet,
    access: AccessState,
}

impl Default for ExportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSession {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            query: String::new(),
            selection: SelectionSet::new(),
            access: AccessState::Unknown,
        }
    }

    /// A session over contacts that are already loaded.
    pub fn with_contacts(contacts: Vec<ContactRecord>) -> Self {
        Self {
            contacts,
            access: AccessState::Granted,
            ..Self::new()
        }
    }

    /// Asks the source for access and loads its contacts. Denial leaves the
    /// session empty; the caller may ask again later.
    pub fn request_access(&mut self, source: &dyn ContactSource) -> ExportResult<AccessState> {
        self.selection.clear();
        if source.request_permission() == PermissionStatus::Denied {
            warn!(source = %source.describe(), "contacts access denied");
            self.contacts.clear();
            self.access = AccessState::Denied;
            return Ok(self.access);
        }

        self.access = AccessState::Granted;
        match source.load_contacts() {
            Ok(contacts) => {
                info!(source = %source.describe(), contacts = contacts.len(), "contacts loaded");
                self.contacts = contacts;
                Ok(self.access)
            }
            Err(e) => {
                self.contacts.clear();
                Err(e)
            }
        }
    }

    pub fn access(&self) -> AccessState {
        self.access
    }

    /// Every loaded contact, in load order.
    pub fn contacts(&self) -> &[ContactRecord] {
        &self.contacts
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Contacts matching the current query, in load order.
    pub fn filtered(&self) -> Vec<&ContactRecord> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.contacts.iter().collect();
        }
        self.contacts
            .iter()
            .filter(|c| c.matches_query(&needle))
            .collect()
    }

    pub fn is_selected(&self, id: &Id<ContactRecord>) -> bool {
        self.selection.contains(id)
    }

    /// Flips one contact's selection. Returns true if it is now selected.
    pub fn toggle(&mut self, id: &Id<ContactRecord>) -> ExportResult<bool> {
        if !self.contacts.iter().any(|c| &c.id == id) {
            return Err(ExportError::NotFound {
                entity_type: "Contact".into(),
                id: id.to_string(),
            });
        }
        Ok(self.selection.toggle(id))
    }

    /// Deselects everything when the selection already covers the filtered
    /// list, otherwise selects exactly the filtered contacts. Returns true
    /// if contacts are now selected.
    pub fn toggle_all(&mut self) -> bool {
        if self.all_selected() {
            self.selection.clear();
            false
        } else {
            let filtered: Vec<Id<ContactRecord>> =
                self.filtered().into_iter().map(|c| c.id.clone()).collect();
            self.selection.replace_with(filtered.iter());
            !self.selection.is_empty()
        }
    }

    /// True when the selection size matches the filtered list.
    pub fn all_selected(&self) -> bool {
        self.selection.len() == self.filtered().len()
    }

    pub fn toggle_all_label(&self) -> &'static str {
        if self.all_selected() {
            "Deselect All"
        } else {
            "Select All"
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn selection_summary(&self) -> String {
        format!("{} of {} selected", self.selection.len(), self.filtered().len())
    }

    /// Selected contacts in load order, regardless of the active filter.
    pub fn selected_records(&self) -> Vec<&ContactRecord> {
        self.selection.pick(&self.contacts)
    }

    pub fn can_export(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Exports the selection and hands the file off. The selection is
    /// cleared once the export finishes, whether or not it succeeded.
    pub fn export(
        &mut self,
        options: &ExportOptions,
        share: &dyn ShareSheet,
    ) -> ExportResult<ExportOutcome> {
        let records: Vec<ContactRecord> =
            self.selected_records().into_iter().cloned().collect();
        validation::non_empty_selection(&records)?;

        let result = export_ops::export_contacts(&records, options);
        self.selection.clear();

        let receipt = result?;
        let share = share_ops::hand_off(share, &receipt.path);
        Ok(ExportOutcome { receipt, share })
    }
}
