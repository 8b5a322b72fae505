pub fn about() {
    println!(
        r#"
About Contact Export

Version {}

A simple and secure way to export your contacts to Excel format. All
processing is done locally to ensure your privacy.
"#,
        env!("CARGO_PKG_VERSION")
    );
}

pub fn privacy() {
    println!(
        r#"
Privacy & Security

Your contact data is processed entirely on this machine. No information is
sent to external servers. The address book is only read when access is
granted.
"#
    );
}

pub fn help() {
    println!(
        r#"
COMMANDS:

  Contacts:
    list / ls               List contacts (respects the current search)
    show <name>             Show contact details
    search <query>          Filter by name, first/last name or company
    clear-search            Show all contacts again
    grant                   Retry opening the address book

  Selection:
    toggle <name|id>        Select or deselect a contact
    select-all              Select all listed contacts (or deselect all)

  Export:
    export                  Export the selection to an Excel file

  Other:
    about                   App version and information
    privacy                 How your data is handled
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - The exported file contains names, phone numbers, emails, addresses,
    company, job title, birthday and notes"#
    );
}
