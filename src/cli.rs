use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goalflow")]
#[command(about = "Inspect goal task lists: dependency order, progress and status actions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a goal's tasks in dependency order
    Order {
        /// Goal JSON file (`-` for stdin)
        file: PathBuf,
        /// Fail on dependency cycles instead of ordering around them
        #[arg(long)]
        strict: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show completion counts for a goal
    Progress {
        /// Goal JSON file (`-` for stdin)
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a goal's tasks grouped by status
    Board {
        /// Goal JSON file (`-` for stdin)
        file: PathBuf,
    },

    /// List the status changes offered for a task
    Actions {
        /// Goal JSON file (`-` for stdin)
        file: PathBuf,
        /// Task ID
        task_id: String,
    },

    /// Check whether a new dependency would create a cycle
    DependCheck {
        /// Goal JSON file (`-` for stdin)
        file: PathBuf,
        /// Task ID (the dependent)
        task_id: String,
        /// Task ID to depend on (the prerequisite)
        on_id: String,
    },

    /// Summarize a list of goal summaries
    Dashboard {
        /// JSON array of goal summaries (`-` for stdin)
        file: PathBuf,
    },
}
