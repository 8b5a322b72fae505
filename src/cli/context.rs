use std::io::{self, Write};

use crate::error::ExportError;
use crate::model::ContactRecord;
use crate::ops::export_ops::ExportOptions;
use crate::session::ExportSession;
use crate::share::ShareSheet;
use crate::source::ContactSource;

pub struct CLIContext {
    pub session: ExportSession,
    pub source: Box<dyn ContactSource>,
    pub share: Box<dyn ShareSheet>,
    pub options: ExportOptions,
}

impl CLIContext {
    pub fn new(
        source: Box<dyn ContactSource>,
        share: Box<dyn ShareSheet>,
        options: ExportOptions,
    ) -> Self {
        Self {
            session: ExportSession::new(),
            source,
            share,
            options,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Find a contact among the filtered list by name or id. Prints a
    /// message if not found or ambiguous.
    pub fn find_contact(&self, args: &str) -> Option<ContactRecord> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let visible = self.session.filtered();
        if let Some(by_id) = visible.iter().find(|c| c.id.as_str() == query) {
            return Some((*by_id).clone());
        }

        let lower = query.to_lowercase();
        let matches: Vec<&ContactRecord> = visible
            .into_iter()
            .filter(|c| c.matches_query(&lower))
            .collect();

        match matches.len() {
            0 => {
                println!("No contact found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|c| c.name.eq_ignore_ascii_case(query)) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {} (id {})", c.name, c.id);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &ExportError) {
        println!("Error: {}", e);
    }
}
