use anyhow::Result;

use fpl_scout::cli::Command;
use fpl_scout::{handle_gameweek, handle_recommend, handle_serve, handle_swaps, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    dotenvy::dotenv().ok();
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Gameweek => handle_gameweek(),
        Command::Recommend { manager_id } => handle_recommend(*manager_id),
        Command::Swaps { manager_id } => handle_swaps(*manager_id),
    }
}
