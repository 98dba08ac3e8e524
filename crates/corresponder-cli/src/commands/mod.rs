use super::*;

pub mod check;
pub mod init;
pub mod preview;
pub mod resolve;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, show_preview, PreviewArgs};
pub use resolve::{resolve, ResolveArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a configuration file with the default affiliation rules
  Init(InitArgs),

  /// Resolve corresponding authors in a CSV file and write the updated table
  Resolve(ResolveArgs),

  /// Show the corresponding authors that would be selected, without writing anything
  Preview(PreviewArgs),

  /// Explain how a single "Authors with affiliations" value is resolved
  Check(CheckArgs),
}
