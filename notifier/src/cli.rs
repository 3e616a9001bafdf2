use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plant notification client: polls the backend and raises alerts.
#[derive(Parser)]
#[command(name = "beton-notifier", version)]
pub struct Cli {
    /// Extra YAML config file, read after `config.yaml`.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Schedule the periodic check and the retention sweep, until ctrl-c.
    Run,
    /// Run one notification check now.
    Sync,
    /// Obtain and store an access token.
    Login {
        username: String,
        /// Read from stdin when omitted.
        #[arg(short, long)]
        password: Option<String>,
    },
    Logout,
    /// Local notifications, newest first.
    List {
        #[arg(long)]
        unread: bool,
    },
    /// Print the list again whenever it changes.
    Watch,
    /// Unread notifications, from the backend when reachable.
    Count,
    /// Mark one notification as read.
    Read { id: String },
    ReadAll,
    Delete { id: String },
    /// Remove every local notification.
    Clear,
    /// Remove local notifications older than `days` (default from config).
    Purge {
        #[arg(long)]
        days: Option<u32>,
    },
    /// Dashboard figures from the backend.
    Stats,
}
