//! firequote - fire extinguisher requirement and quotation calculator
//!
//! Computes extinguisher counts, agent recommendations, and a priced
//! quotation for a building per BIS 2190:2024.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
