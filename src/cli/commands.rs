use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sortable", about = concat!("sortable v", env!("CARGO_PKG_VERSION"), " - reorder a list by dragging or with the keyboard"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// List file (.toml or .json). Without one the demo list is used.
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print the final order when the TUI exits
    #[arg(long)]
    pub print: bool,

    /// Write logs here while the TUI is running
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items in order
    List,
    /// Move an item and print the resulting order
    Mv(MvArgs),
    /// Validate the list file
    Check,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("destination")
        .required(true)
        .args(["before", "after", "up", "down", "top", "bottom"]),
))]
pub struct MvArgs {
    /// Item ID
    pub id: String,
    /// Place directly before this item ID
    #[arg(long)]
    pub before: Option<String>,
    /// Place directly after this item ID
    #[arg(long)]
    pub after: Option<String>,
    /// Move up one position
    #[arg(long)]
    pub up: bool,
    /// Move down one position
    #[arg(long)]
    pub down: bool,
    /// Move to the top
    #[arg(long)]
    pub top: bool,
    /// Move to the bottom
    #[arg(long)]
    pub bottom: bool,
}
