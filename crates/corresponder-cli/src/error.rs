//! Error types for the corresponder CLI.

use thiserror::Error;

use super::*;

/// Result alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, CorresponderCliError>;

/// Errors surfaced to the user by the CLI.
#[derive(Error, Debug)]
pub enum CorresponderCliError {
  /// Errors coming out of the library: missing columns, unreadable input, bad configuration.
  #[error(transparent)]
  Corresponder(#[from] CorresponderError),

  /// An interactive prompt could not be shown or answered.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Writing to the terminal failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
