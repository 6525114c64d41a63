//! Eventos CLI
//!
//! Command-line boundary over the eventos core: parses arguments, feeds
//! JSON payloads through the validators, invokes the repositories and
//! prints JSON envelopes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "eventos")]
#[command(about = "Eventos - event guest and expense management", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = "data/eventos.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database, apply migrations and seed default rows
    Init,
    /// Guest operations
    Guest(commands::guests::GuestArgs),
    /// Grupo operations
    Grupo(commands::grupos::GrupoArgs),
    /// Concepto operations
    Concepto(commands::conceptos::ConceptoArgs),
    /// Expense operations
    Expense(commands::expenses::ExpenseArgs),
}

fn main() {
    eventos_core::logging::init(eventos_core::logging::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli.db),
        Commands::Guest(args) => commands::guests::execute(&cli.db, args),
        Commands::Grupo(args) => commands::grupos::execute(&cli.db, args),
        Commands::Concepto(args) => commands::conceptos::execute(&cli.db, args),
        Commands::Expense(args) => commands::expenses::execute(&cli.db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        for detail in e.details() {
            eprintln!("  - {}", detail);
        }
        std::process::exit(1);
    }
}
