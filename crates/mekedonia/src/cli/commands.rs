//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::donation::PaymentMethod;
use crate::volunteer::Availability;

/// Account and session commands.
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Sign in with email and password
    SignIn {
        /// Email address
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// Register a new account
    SignUp {
        /// Email address
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },

    /// Sign out, removing the stored session
    SignOut,

    /// Show the current session
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Donate command arguments.
#[derive(Debug, Args)]
pub struct DonateCommand {
    /// Donation amount in dollars (e.g. 25 or 25.50)
    pub amount: String,

    /// Payment method
    #[arg(short, long, value_enum, default_value = "card")]
    pub method: MethodArg,

    /// Make this a recurring donation
    #[arg(short, long)]
    pub recurring: bool,

    /// Campaign to earmark the donation for
    #[arg(long)]
    pub campaign: Option<String>,
}

/// Volunteer command arguments.
#[derive(Debug, Args)]
pub struct VolunteerCommand {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Availability
    #[arg(long, value_enum, default_value = "weekdays")]
    pub availability: AvailabilityArg,

    /// Relevant skills and experience
    #[arg(long)]
    pub skills: String,

    /// Why you want to volunteer
    #[arg(long)]
    pub motivation: String,
}

/// Impact command arguments.
#[derive(Debug, Args)]
pub struct ImpactCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Payment method argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Card payment
    Card,
    /// Mobile wallet (coming soon)
    Wallet,
    /// Crypto asset (coming soon)
    Crypto,
}

impl From<MethodArg> for PaymentMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Card => Self::Card,
            MethodArg::Wallet => Self::Wallet,
            MethodArg::Crypto => Self::Crypto,
        }
    }
}

/// Availability argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AvailabilityArg {
    /// Weekdays only
    Weekdays,
    /// Weekends only
    Weekends,
    /// Any day
    Both,
}

impl From<AvailabilityArg> for Availability {
    fn from(arg: AvailabilityArg) -> Self {
        match arg {
            AvailabilityArg::Weekdays => Self::Weekdays,
            AvailabilityArg::Weekends => Self::Weekends,
            AvailabilityArg::Both => Self::Both,
        }
    }
}
