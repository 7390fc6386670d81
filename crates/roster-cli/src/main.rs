//! Roster - person record management CLI
//!
//! Lists, filters, pages, mutates and exports person records kept in a
//! JSON-backed in-memory repository.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
