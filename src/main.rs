use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use contact_export::cli;
use contact_export::config::AppConfig;
use contact_export::migrate;
use contact_export::sheet::SheetSchema;

#[derive(Parser)]
#[command(name = "contact-export")]
#[command(about = "Export address-book contacts to an Excel spreadsheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: .data/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Contact store: SQLite database or .json contact dump
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Directory exported files are written to
    #[arg(short = 'o', long, global = true)]
    export_dir: Option<PathBuf>,

    /// Column layout of the exported sheet
    #[arg(long, value_enum, global = true)]
    schema: Option<SheetSchema>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a JSON contact dump into a new SQLite contact store
    Import {
        /// JSON file holding an array of contacts
        json: PathBuf,
    },

    /// Export contacts without the interactive prompt
    Export {
        /// Only contacts whose name or company contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Export only these contact ids (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(c) => c.with_overrides(args.store, args.export_dir, args.schema),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_level = if args.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        None => {
            cli::run(&config);
            ExitCode::SUCCESS
        }
        Some(Commands::Import { json }) => import(&config, &json),
        Some(Commands::Export { query, ids }) => {
            match cli::run_export(&config, query.as_deref(), &ids) {
                Ok(outcome) => {
                    cli::export_commands::print_outcome(&outcome);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn import(config: &AppConfig, json: &std::path::Path) -> ExitCode {
    let db_path = &config.store_path;
    if db_path.exists() {
        eprintln!("Error: Contact store {} already exists.", db_path.display());
        eprintln!("Remove it first or use --store to specify a different path.");
        return ExitCode::FAILURE;
    }
    if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create {}: {}", dir.display(), e);
            return ExitCode::FAILURE;
        }
    }

    println!("Importing from {}...", json.display());
    match migrate::import_json(json, db_path) {
        Ok(stats) => {
            println!("Import complete!");
            println!("  Contacts: {}", stats.contacts);
            println!("  Phone numbers: {}", stats.phone_numbers);
            println!("  Emails: {}", stats.emails);
            println!("  Addresses: {}", stats.addresses);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !migrate::discard_store(db_path) {
                eprintln!("Remove {} before importing again.", db_path.display());
            }
            eprintln!("Import failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
