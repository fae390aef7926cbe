//! Command-line interface for foliosnip.
//!
//! This module provides the CLI structure for the `foliosnip` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AmountCommand, AmountStyleArg, ConfigCommand, FormatArgs, HeaderStyleArg, LabelStyleArg,
    OutputFormat, ParseCommand, ProjectMarkerArg, RenderCommand,
};

/// foliosnip - Read and write shared portfolio snippets
///
/// Parses the text block users paste to share their crypto project
/// portfolio, and renders portfolios back into that format.
#[derive(Debug, Parser)]
#[command(name = "foliosnip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a snippet and print its projects
    Parse(ParseCommand),

    /// Render a JSON portfolio as snippet text
    Render(RenderCommand),

    /// Format or parse a single amount
    #[command(subcommand)]
    Amount(AmountCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
