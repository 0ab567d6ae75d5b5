//! CLI argument definitions using clap
//!
//! Commands:
//! - flames-schema catalog [--compact]
//! - flames-schema list
//! - flames-schema validate --entity <name> [--file <path>] [--strict]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Schema registry and document validation for the Flames database viewer
#[derive(Parser, Debug)]
#[command(name = "flames-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the schema catalog served to the viewer
    Catalog {
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List the registered collections
    List,

    /// Validate a JSON document against an entity schema
    Validate {
        /// Entity name or collection identifier
        #[arg(long)]
        entity: String,

        /// Path to the document; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,

        /// Reject undeclared fields instead of dropping them
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
