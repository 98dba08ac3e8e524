//! Corresponding author resolution for publication tables.
//!
//! `corresponder` takes a table of publication records exported from a bibliographic database,
//! reads each record's `Authors with affiliations` cell and decides which author should be treated
//! as the corresponding author for an institution of interest. It provides:
//!
//! - Parsing of semicolon-delimited `"name, affiliation"` lists
//! - Configurable affiliation rules (qualifying institutions, exclusion keywords, and an
//!   affiliation exempt from exclusions)
//! - CSV reading and writing that preserves every original column
//! - A summary of how many records could be resolved
//!
//! # Getting Started
//!
//! ```
//! use corresponder::{prelude::*, Config, Resolver, Table};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let csv = "Title,Authors with affiliations\n\
//!            Paper,\"J Smith, XYZ College Affiliated to Shivaji University; R Patel, Saveetha \
//!            University, Chennai\"\n";
//! let table = Table::from_reader(csv.as_bytes())?;
//!
//! let resolver = Resolver::new(&Config::default())?;
//! let resolved = resolver.resolve(&table)?;
//!
//! assert_eq!(resolved.table.value(0, "Corresponding Author"), Some("R Patel"));
//! assert_eq!(resolved.table.value(0, "Corresponding Affiliation"), Some("Saveetha University, Chennai"));
//! assert_eq!(resolved.summary.resolved, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`config`]: Rule lists, column names and configuration files
//! - [`rules`]: Ordered affiliation rules evaluated first-match-wins
//! - [`author`]: Parsing of author/affiliation tokens
//! - [`table`]: Tabular records and CSV input/output
//! - [`resolver`]: The per-record selection algorithm
//! - [`prelude`]: Common types for ergonomic imports
//!
//! # Design Philosophy
//!
//! Resolution never fails because of what a single row contains. Malformed tokens and rows with no
//! qualifying author simply produce empty output cells. The only failures are structural: a table
//! without the required column, or input that cannot be read as a table at all.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  fs,
  io::{Read, Write},
  path::{Path, PathBuf},
  str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod author;
pub mod config;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod table;

pub use crate::{
  config::Config,
  resolver::{Resolved, Resolver},
  table::{Record, Table},
};
use crate::{author::*, error::*, rules::*};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```
/// use corresponder::prelude::*;
///
/// fn example() -> Result<(), CorresponderError> {
///   let resolver = corresponder::Resolver::new(&corresponder::Config::default())?;
///   let found = resolver.resolve_field(Some("A Author, Shivaji University"));
///   assert_eq!(found.corresponding_author, "A Author");
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    author::AuthorAffiliationPair,
    error::CorresponderError,
    resolver::{ResolvedCorrespondence, Summary},
  };
}
