//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extally")]
#[command(about = "Record daily exercise and rank who showed up", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record that someone exercised today
    Record {
        /// Who exercised (default: the configured user)
        name: Option<String>,
    },

    /// Search past records
    Search {
        /// Case-insensitive part of a name
        #[arg(short, long)]
        name: Option<String>,

        /// Exact day (today, yesterday, last monday, 2025-01-17, ...)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a record by id
    Delete {
        /// Record id as shown by search
        id: i64,
    },

    /// List everyone who has a record
    Users,

    /// Rank users by records in a month
    Leaderboard {
        /// Month (this month, last month, YYYY-MM)
        #[arg(default_value = "this month")]
        month: String,
    },

    /// Export records as CSV
    Export {
        /// Case-insensitive part of a name
        #[arg(short, long)]
        name: Option<String>,

        /// Exact day (today, yesterday, 2025-01-17, ...)
        #[arg(short, long)]
        date: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
