mod adjust;
mod check;
mod cli;
mod fetch;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch {
            base_url,
            config,
            init,
            json,
            summary,
        } => fetch::execute(base_url, config, init, json, summary),
        Commands::Check { base_url, config } => check::execute(base_url, config),
        Commands::Adjust {
            file,
            base_url,
            config,
            json,
        } => adjust::execute(file, base_url, config, json),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
