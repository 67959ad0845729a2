//! CLI argument definitions.
//!
//! All querying happens at the interactive prompt; the process arguments only
//! choose the database file and the log verbosity.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive lookup tool for the student database", long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "HyperionDev.db")]
    pub db: PathBuf,

    /// Log debug diagnostics to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
