use crate::cli::context::CLIContext;
use crate::format::{format_address, format_date, format_phone_number};
use crate::session::AccessState;

pub fn list(ctx: &CLIContext) {
    let visible = ctx.session.filtered();
    if visible.is_empty() {
        if ctx.session.query().trim().is_empty() {
            println!("No contacts found in the address book.");
        } else {
            println!("No contacts match '{}'.", ctx.session.query().trim());
        }
        return;
    }

    println!("[{}]  {}", ctx.session.toggle_all_label(), ctx.session.selection_summary());
    println!();
    for contact in &visible {
        let mark = if ctx.session.is_selected(&contact.id) { "[x]" } else { "[ ]" };
        let mut details = Vec::new();
        if let Some(phone) = contact.phone_numbers.first() {
            details.push(phone.number.clone());
        }
        if let Some(email) = contact.emails.first() {
            details.push(email.email.clone());
        }
        if let Some(company) = &contact.company {
            details.push(company.clone());
        }
        if details.is_empty() {
            println!("  {} {}", mark, contact.name);
        } else {
            println!("  {} {} - {}", mark, contact.name, details.join(" | "));
        }
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <name>");
        return;
    }
    let Some(contact) = ctx.find_contact(args) else {
        return;
    };

    println!();
    println!("Name: {}", contact.name);
    println!("Id: {}", contact.id);
    if let Some(company) = &contact.company {
        match &contact.job_title {
            Some(title) => println!("Work: {}, {}", title, company),
            None => println!("Work: {}", company),
        }
    }
    for phone in &contact.phone_numbers {
        let label = phone.label.as_deref().unwrap_or("phone");
        println!("{}: {}", label, format_phone_number(&phone.number));
    }
    for email in &contact.emails {
        let label = email.label.as_deref().unwrap_or("email");
        println!("{}: {}", label, email.email);
    }
    for address in &contact.addresses {
        let label = address.label.as_deref().unwrap_or("address");
        println!("{}: {}", label, format_address(Some(address)));
    }
    let birthday = format_date(contact.birthday.as_ref());
    if !birthday.is_empty() {
        println!("Birthday: {}", birthday);
    }
    if let Some(note) = &contact.note {
        println!("Notes: {}", note);
    }
    println!(
        "Selected: {}",
        if ctx.session.is_selected(&contact.id) { "yes" } else { "no" }
    );
    println!();
}

pub fn search(ctx: &mut CLIContext, args: &str) {
    ctx.session.set_query(args);
    list(ctx);
}

pub fn clear_search(ctx: &mut CLIContext) {
    ctx.session.clear_query();
    list(ctx);
}

pub fn toggle(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: toggle <name>");
        return;
    }
    let Some(contact) = ctx.find_contact(args) else {
        return;
    };
    match ctx.session.toggle(&contact.id) {
        Ok(true) => println!("Selected {}. {}", contact.name, ctx.session.selection_summary()),
        Ok(false) => println!("Deselected {}. {}", contact.name, ctx.session.selection_summary()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn toggle_all(ctx: &mut CLIContext) {
    if ctx.session.toggle_all() {
        println!("Selected all. {}", ctx.session.selection_summary());
    } else {
        println!("Deselected all. {}", ctx.session.selection_summary());
    }
}

/// Ask the contact source for access (again).
pub fn grant(ctx: &mut CLIContext) -> AccessState {
    match ctx.session.request_access(ctx.source.as_ref()) {
        Ok(AccessState::Granted) => {
            println!("Loaded {} contacts from {}.", ctx.session.contacts().len(), ctx.source.describe());
            AccessState::Granted
        }
        Ok(state) => {
            print_permission_required(ctx);
            state
        }
        Err(e) => {
            println!("Failed to load contacts. Please try again.");
            ctx.print_error(&e);
            ctx.session.access()
        }
    }
}

pub fn print_permission_required(ctx: &CLIContext) {
    println!("Contacts Access Required");
    println!();
    println!("To export your contacts to Excel, we need access to your contacts.");
    println!("This data is processed locally and never sent to external servers.");
    println!("Could not open {}.", ctx.source.describe());
    println!("Type 'grant' to try again.");
}
