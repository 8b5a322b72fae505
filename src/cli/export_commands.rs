use crate::cli::context::CLIContext;
use crate::error::ExportError;
use crate::ops::share_ops::ShareOutcome;
use crate::session::ExportOutcome;

pub fn export(ctx: &mut CLIContext) {
    if !ctx.session.can_export() {
        println!("No Selection: Please select at least one contact to export.");
        return;
    }

    println!("Exporting {} contacts...", ctx.session.selected_count());
    let options = ctx.options.clone();
    match ctx.session.export(&options, ctx.share.as_ref()) {
        Ok(outcome) => print_outcome(&outcome),
        Err(ExportError::EmptySelection) => {
            println!("No Selection: Please select at least one contact to export.");
        }
        Err(e) => {
            println!("Export Failed: There was an error exporting your contacts. Please try again.");
            ctx.print_error(&e);
        }
    }
}

pub fn print_outcome(outcome: &ExportOutcome) {
    match &outcome.share {
        ShareOutcome::Shared(path) => {
            println!("Shared {} ({} contacts).", path.display(), outcome.receipt.rows);
        }
        ShareOutcome::Disclosed(path) => {
            println!("Export Complete");
            println!("Your contacts have been exported successfully!");
            println!();
            println!("File saved to: {}", path.display());
        }
    }
}
