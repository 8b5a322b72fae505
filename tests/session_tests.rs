use std::path::Path;

use contact_export::error::{ExportError, ExportResult};
use contact_export::model::*;
use contact_export::ops::export_ops::ExportOptions;
use contact_export::ops::share_ops::ShareOutcome;
use contact_export::session::*;
use contact_export::share::NoShareSheet;
use contact_export::sheet::SheetSchema;
use contact_export::source::{ContactSource, PermissionStatus};
use tempfile::TempDir;

fn contacts() -> Vec<ContactRecord> {
    let mut ana = ContactRecord::create("a", "Ana Silva");
    ana.company = Some("Acme".into());
    let mut bruno = ContactRecord::create("b", "Bruno Costa");
    bruno.first_name = Some("Bruno".into());
    let carla = ContactRecord::create("c", "Carla Souza");
    vec![ana, bruno, carla]
}

fn options(dir: &Path) -> ExportOptions {
    ExportOptions {
        schema: SheetSchema::Compact,
        sheet_name: "Contacts".into(),
        export_dir: dir.to_path_buf(),
    }
}

fn id(value: &str) -> Id<ContactRecord> {
    Id::new(value)
}

struct FixedSource {
    status: PermissionStatus,
    contacts: Vec<ContactRecord>,
}

impl ContactSource for FixedSource {
    fn request_permission(&self) -> PermissionStatus {
        self.status
    }

    fn load_contacts(&self) -> ExportResult<Vec<ContactRecord>> {
        Ok(self.contacts.clone())
    }

    fn describe(&self) -> String {
        "fixed".into()
    }
}

// ==========================================================================
// ACCESS
// ==========================================================================

#[test]
fn new_session_has_not_asked_for_access() {
    assert_eq!(ExportSession::new().access(), AccessState::Unknown);
}

#[test]
fn granted_access_loads_contacts_in_order() {
    let mut session = ExportSession::new();
    let source = FixedSource {
        status: PermissionStatus::Granted,
        contacts: contacts(),
    };
    assert_eq!(session.request_access(&source).unwrap(), AccessState::Granted);
    let names: Vec<&str> = session.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Silva", "Bruno Costa", "Carla Souza"]);
}

#[test]
fn denied_access_leaves_session_empty() {
    let mut session = ExportSession::with_contacts(contacts());
    session.toggle(&id("a")).unwrap();
    let source = FixedSource {
        status: PermissionStatus::Denied,
        contacts: contacts(),
    };
    assert_eq!(session.request_access(&source).unwrap(), AccessState::Denied);
    assert!(session.contacts().is_empty());
    assert_eq!(session.selected_count(), 0);
    assert!(!session.can_export());
}

// ==========================================================================
// SEARCH
// ==========================================================================

#[test]
fn blank_query_shows_everything() {
    let mut session = ExportSession::with_contacts(contacts());
    session.set_query("   ");
    assert_eq!(session.filtered().len(), 3);
}

#[test]
fn query_matches_name_parts_and_company() {
    let mut session = ExportSession::with_contacts(contacts());
    session.set_query("ACME");
    let names: Vec<&str> = session.filtered().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Silva"]);

    session.set_query("bru");
    assert_eq!(session.filtered()[0].name, "Bruno Costa");

    session.clear_query();
    assert_eq!(session.filtered().len(), 3);
}

// ==========================================================================
// SELECTION
// ==========================================================================

#[test]
fn toggle_selects_and_deselects() {
    let mut session = ExportSession::with_contacts(contacts());
    assert!(session.toggle(&id("b")).unwrap());
    assert!(session.is_selected(&id("b")));
    assert_eq!(session.selection_summary(), "1 of 3 selected");
    assert!(!session.toggle(&id("b")).unwrap());
    assert_eq!(session.selected_count(), 0);
}

#[test]
fn toggle_rejects_unknown_contact() {
    let mut session = ExportSession::with_contacts(contacts());
    assert!(matches!(
        session.toggle(&id("zzz")),
        Err(ExportError::NotFound { .. })
    ));
}

#[test]
fn toggle_all_selects_filtered_then_deselects() {
    let mut session = ExportSession::with_contacts(contacts());
    session.set_query("s");
    assert_eq!(session.toggle_all_label(), "Select All");

    assert!(session.toggle_all());
    assert_eq!(session.selected_count(), session.filtered().len());
    assert_eq!(session.toggle_all_label(), "Deselect All");

    assert!(!session.toggle_all());
    assert_eq!(session.selected_count(), 0);
}

#[test]
fn toggle_all_replaces_partial_selection_with_filtered() {
    let mut session = ExportSession::with_contacts(contacts());
    session.toggle(&id("c")).unwrap();
    session.set_query("ana");
    // 1 selected vs 1 filtered: treated as all selected
    assert!(!session.toggle_all());
    assert_eq!(session.selected_count(), 0);

    session.clear_query();
    session.toggle(&id("c")).unwrap();
    assert!(session.toggle_all());
    assert_eq!(session.selected_count(), 3);
}

#[test]
fn selected_records_follow_load_order() {
    let mut session = ExportSession::with_contacts(contacts());
    session.toggle(&id("c")).unwrap();
    session.toggle(&id("a")).unwrap();
    let ids: Vec<&str> = session.selected_records().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn selected_records_ignore_active_filter() {
    let mut session = ExportSession::with_contacts(contacts());
    session.toggle(&id("a")).unwrap();
    session.set_query("carla");
    assert_eq!(session.selected_records().len(), 1);
}

// ==========================================================================
// EXPORT
// ==========================================================================

#[test]
fn export_with_empty_selection_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut session = ExportSession::with_contacts(contacts());
    assert!(!session.can_export());
    let result = session.export(&options(dir.path()), &NoShareSheet);
    assert!(matches!(result, Err(ExportError::EmptySelection)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn export_discloses_path_and_clears_selection() {
    let dir = TempDir::new().unwrap();
    let mut session = ExportSession::with_contacts(contacts());
    session.toggle(&id("a")).unwrap();
    session.toggle(&id("b")).unwrap();

    let outcome = session.export(&options(dir.path()), &NoShareSheet).unwrap();

    assert_eq!(outcome.receipt.rows, 2);
    assert!(matches!(&outcome.share, ShareOutcome::Disclosed(p) if p == &outcome.receipt.path));
    assert!(outcome.receipt.path.is_file());
    assert_eq!(session.selected_count(), 0);
    assert_eq!(session.contacts().len(), 3);
}

#[test]
fn failed_export_also_clears_selection() {
    let dir = TempDir::new().unwrap();
    let blocked = dir.path().join("file");
    std::fs::write(&blocked, b"x").unwrap();

    let mut session = ExportSession::with_contacts(contacts());
    session.toggle(&id("a")).unwrap();

    let result = session.export(&options(&blocked), &NoShareSheet);
    assert!(matches!(result, Err(ExportError::ExportFailed { .. })));
    assert_eq!(session.selected_count(), 0);
}
