//! Local state inspection arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// State subcommands (no API access)
#[derive(Subcommand, Debug)]
pub enum StateAction {
    /// List managed entities
    #[command(visible_alias = "ls")]
    List(StateListArgs),

    /// Show the recorded attributes of one entity
    Show(StateAddressArgs),

    /// Forget an entity without touching the remote side
    Rm(StateAddressArgs),
}

/// Arguments for 'state list'
#[derive(Parser, Debug)]
pub struct StateListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for state subcommands addressing one entry
#[derive(Parser, Debug)]
pub struct StateAddressArgs {
    /// Local address of the entity
    pub address: String,
}
