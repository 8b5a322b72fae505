pub mod context;
pub mod contact_commands;
pub mod export_commands;
pub mod info_commands;

use crate::config::AppConfig;
use crate::error::{ExportError, ExportResult};
use crate::model::Id;
use crate::ops::export_ops::ExportOptions;
use crate::session::{AccessState, ExportOutcome, ExportSession};
use crate::share::{CommandShareSheet, ShareSheet};
use crate::source::{open_source, ContactSource};
use context::CLIContext;

fn share_sheet(config: &AppConfig) -> Box<dyn ShareSheet> {
    Box::new(CommandShareSheet::new(config.share_command.clone()))
}

/// Run the interactive REPL.
pub fn run(config: &AppConfig) {
    println!("Export Contacts");
    println!("Select contacts to export to an Excel spreadsheet.");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut ctx = CLIContext::new(
        open_source(&config.store_path),
        share_sheet(config),
        ExportOptions::from(config),
    );

    if contact_commands::grant(&mut ctx) == AccessState::Granted {
        println!();
        contact_commands::list(&ctx);
    }

    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => info_commands::help(),
            "quit" | "exit" | "q" => break,
            "about" => info_commands::about(),
            "privacy" => info_commands::privacy(),
            "grant" => {
                contact_commands::grant(ctx);
            }
            _ if ctx.session.access() != AccessState::Granted => {
                contact_commands::print_permission_required(ctx);
            }

            "list" | "ls" => contact_commands::list(ctx),
            "show" | "view" => contact_commands::show(ctx, args),
            "search" | "find" => contact_commands::search(ctx, args),
            "clear-search" => contact_commands::clear_search(ctx),
            "toggle" | "select" => contact_commands::toggle(ctx, args),
            "select-all" | "deselect-all" => contact_commands::toggle_all(ctx),
            "export" => export_commands::export(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

/// One-shot export: selects the contacts matching `query` (all of them when
/// `ids` is empty, otherwise just those ids) and exports them.
pub fn run_export(config: &AppConfig, query: Option<&str>, ids: &[String]) -> ExportResult<ExportOutcome> {
    let source = open_source(&config.store_path);
    export_from_source(
        source.as_ref(),
        share_sheet(config).as_ref(),
        &ExportOptions::from(config),
        query,
        ids,
    )
}

pub fn export_from_source(
    source: &dyn ContactSource,
    share: &dyn ShareSheet,
    options: &ExportOptions,
    query: Option<&str>,
    ids: &[String],
) -> ExportResult<ExportOutcome> {
    let mut session = ExportSession::new();
    if session.request_access(source)? == AccessState::Denied {
        return Err(ExportError::PermissionDenied);
    }
    if let Some(q) = query {
        session.set_query(q);
    }
    if ids.is_empty() {
        session.toggle_all();
    } else {
        for id in ids {
            let id = Id::new(id.as_str());
            if !session.is_selected(&id) {
                session.toggle(&id)?;
            }
        }
    }
    session.export(options, share)
}
