use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fantasy Premier League transfer scout")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 5000)
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
    /// Print the current gameweek
    Gameweek,
    /// Print transfer targets and differentials for a manager as JSON
    Recommend {
        /// Manager (entry) id
        manager_id: u64,
    },
    /// Print underperformers and suggested swaps for a manager
    Swaps {
        /// Manager (entry) id
        manager_id: u64,
    },
}
