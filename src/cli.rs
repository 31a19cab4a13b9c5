//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mypl parses MyPL source files and lets you inspect the result
#[derive(Debug, Parser)]
#[command(name = "mypl", author, version)]
pub struct MyplArgs {
    /// The subcommand to run
    #[command(subcommand)]
    pub subcommand: Option<MyplSubcommand>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum MyplSubcommand {
    /// Parse a file and report success or the first error
    #[command(name = "check")]
    Check {
        /// Source file to parse
        file: PathBuf,
    },

    /// Parse a file and print it back as formatted source
    #[command(name = "print")]
    Print {
        /// Source file to parse
        file: PathBuf,
    },

    /// Dump the token stream, one token per line
    #[command(name = "tokens")]
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },

    /// Browse source, tokens and AST in an interactive terminal view
    #[command(name = "explore")]
    Explore {
        /// Source file to explore
        file: PathBuf,
    },
}
