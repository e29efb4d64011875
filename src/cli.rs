//! Command-line interface definitions.
//!
//! Two subcommands:
//! - `analyze` - run the analyzer over C source files and print a terminal
//!   report or the raw JSON document
//! - `serve` - run the HTTP transport (`GET /health`, `POST /parse`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Port the original deployment listens on.
pub const DEFAULT_PORT: u16 = 7001;

#[derive(Debug, Parser)]
#[command(
    name = "asymptote",
    version,
    about = "Extracts recurrence-relation evidence from C source"
)]
pub struct Args {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze C source files
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Emit the raw JSON document instead of the terminal report
        #[arg(long)]
        json: bool,

        /// Pretty-print the JSON document
        #[arg(long, requires = "json")]
        pretty: bool,
    },

    /// Run the HTTP transport
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}
