//! Error types for the corresponder library.
//!
//! Only structural problems are errors. Anything that is wrong inside a single record (a missing
//! cell, a token without a comma, an affiliation that matches no rule) is absorbed by the resolver
//! and shows up as empty output cells instead.
//!
//! # Examples
//!
//! ```
//! use corresponder::{prelude::*, Config, Resolver, Table};
//!
//! let table = Table::from_reader("Title,Authors\nPaper,\"A, B\"\n".as_bytes()).unwrap();
//! let resolver = Resolver::new(&Config::default()).unwrap();
//!
//! match resolver.resolve(&table) {
//!   Err(CorresponderError::MissingColumn(column)) => println!("missing column {column}"),
//!   Err(e) => println!("other error: {e}"),
//!   Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`corresponder`](crate) crate.
pub type Result<T> = core::result::Result<T, CorresponderError>;

/// Errors that can occur when resolving a table.
#[derive(Error, Debug)]
pub enum CorresponderError {
  /// The required input column is absent from the table header.
  ///
  /// This is a precondition failure reported before any row is processed, so no output table is
  /// produced. The string parameter is the column that was looked up.
  #[error("Table is missing the required column \"{0}\"")]
  MissingColumn(String),

  /// The input had no header row at all.
  #[error("Table has no header row")]
  EmptyTable,

  /// A record has more values than the table has columns, or a record built in memory does not
  /// have one value per column.
  #[error("Record {row} has {found} values but the table has {expected} columns")]
  RaggedRecord {
    /// Zero-based index of the offending record
    row:      usize,
    /// Number of columns in the table
    expected: usize,
    /// Number of values in the record
    found:    usize,
  },

  /// The input could not be read or written as CSV.
  ///
  /// This covers:
  /// - Invalid UTF-8
  /// - Malformed quoting
  /// - Underlying I/O failures while streaming records
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// A string parsed on its own with [`str::parse`] is not a `name, affiliation` pair.
  ///
  /// Inside a table such tokens are skipped instead.
  #[error("\"{0}\" is not a \"name, affiliation\" pair")]
  MalformedPair(String),

  /// The configuration is well formed but unusable, e.g. an empty affiliation pattern.
  #[error("{0}")]
  Config(String),
}
