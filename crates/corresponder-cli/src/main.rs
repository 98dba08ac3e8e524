//! Command line interface for the corresponder library.
//!
//! This crate provides the `corresponder` binary, which resolves corresponding authors in CSV
//! exports of publication records. It supports:
//! - Writing a configuration file with the default affiliation rules
//! - Resolving a CSV file into `<name>_corresponding_updated.csv`
//! - Previewing the selected authors without writing anything
//! - Checking a single `Authors with affiliations` value
//!
//! # Usage
//!
//! ```bash
//! # Write the default configuration to the platform config directory
//! corresponder init
//!
//! # Resolve an export, writing scopus_corresponding_updated.csv next to it
//! corresponder resolve scopus.csv
//!
//! # Show what would be selected for the first 20 records
//! corresponder preview scopus.csv --limit 20
//!
//! # Explain the decision for a single value
//! corresponder check "J Smith, XYZ College Affiliated to Shivaji University; R Patel, Saveetha University"
//! ```
//!
//! Verbosity is raised with `-v` (repeatable); `RUST_LOG` overrides it.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use corresponder::{
  prelude::*,
  rules::Verdict,
  table::{output_path, Table},
  Config, Resolver,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Resolve corresponding authors and affiliations in CSV exports")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, the default platform-specific config
  /// location is used when it exists, and the built-in rules otherwise.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Loads the configuration the command should run with.
///
/// An explicit `--config` path must exist. Without one, the default path is used if a file is
/// there, and [`Config::default`] otherwise.
fn load_config(path: Option<&Path>) -> Result<Config> {
  match path {
    Some(path) => Ok(Config::load(path)?),
    None => {
      let default_path = Config::default_path();
      if default_path.exists() {
        Ok(Config::load(default_path)?)
      } else {
        debug!("No configuration at {}, using built-in rules", default_path.display());
        Ok(Config::default())
      }
    },
  }
}

/// Runs the parsed command.
fn run(cli: &Cli, interaction: &Terminal) -> Result<()> {
  trace!("Running command with config override {:?}", cli.config);
  match &cli.command {
    Commands::Init(init_args) => {
      let path = cli.config.clone().unwrap_or_else(Config::default_path);
      init(interaction, &path, init_args)
    },
    Commands::Resolve(resolve_args) =>
      resolve(interaction, &load_config(cli.config.as_deref())?, resolve_args),
    Commands::Preview(preview_args) =>
      preview(interaction, &load_config(cli.config.as_deref())?, preview_args),
    Commands::Check(check_args) =>
      check(interaction, &load_config(cli.config.as_deref())?, check_args),
  }
}

/// Entry point for the corresponder CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Errors are printed with the
/// error prefix and turn into a non-zero exit status.
fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let interaction = Terminal::new(cli.accept_defaults);
  if let Err(e) = run(&cli, &interaction) {
    // Nothing is left to report to if stderr itself fails.
    interaction.reply(ResponseContent::Error(e)).ok();
    std::process::exit(1);
  }
}
