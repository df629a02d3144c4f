//! Command-line interface for the Mekedonia app.
//!
//! This module provides the CLI structure for the `meked` binary, the
//! shell that drives the headless screens from the terminal.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AccountCommand, AvailabilityArg, ConfigCommand, DonateCommand, ImpactCommand, MethodArg,
    VolunteerCommand,
};

/// meked - the Mekedonia charity app
///
/// Donate to and volunteer for Mekedonia from the command line. Payments
/// and applications go to the charity backend when one is configured, and
/// to in-process mocks otherwise.
#[derive(Debug, Parser)]
#[command(name = "meked")]
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
    /// Manage the account and session
    #[command(subcommand)]
    Account(AccountCommand),

    /// Make a donation
    Donate(DonateCommand),

    /// Apply to volunteer
    Volunteer(VolunteerCommand),

    /// Show impact statistics and recent donations
    Impact(ImpactCommand),

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
