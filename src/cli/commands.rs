use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gantry", about = concat!("gantry v", env!("CARGO_PKG_VERSION"), " - gantt timelines in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tasks file to open in the TUI when no subcommand is given
    #[arg(default_value = "tasks.json")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the computed calendar window, month spans, and bar geometry
    Layout(FileArgs),
    /// Print the normalized task collection
    Tasks(FileArgs),
    /// Report tasks that would be dropped for unparseable dates
    Check(FileArgs),
    /// Open the TUI with a built-in sample schedule
    Demo,
}

#[derive(Args)]
pub struct FileArgs {
    /// Tasks file (a JSON array of task records)
    #[arg(default_value = "tasks.json")]
    pub file: PathBuf,
}
