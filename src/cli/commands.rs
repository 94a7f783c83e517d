use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("[x] todo v", env!("CARGO_PKG_VERSION"), " - lists of things to get done"), version)]
pub struct Cli {
    /// JSON file of lists to load at startup
    #[arg(short, long)]
    pub fixture: Option<PathBuf>,

    /// Config file (default: ./todo.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
