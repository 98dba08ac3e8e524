//! Terminal output and prompts.
//!
//! Commands never print directly. They hand a [`ResponseContent`] to a [`UserInteraction`], which
//! keeps the formatting in one place and lets prompts be answered automatically with
//! `--accept-defaults`.

use std::io::Write;

use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Prefix for list items
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last item of a list
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Relationship between an author and a verdict
pub static ARROW: &str = "→";

/// Everything a command can show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A completed action
  Success(&'a str),
  /// Neutral progress information
  Info(&'a str),
  /// Something the user should look at, but not a failure
  Warning(&'a str),
  /// A failure that ends the command
  Error(CorresponderCliError),
  /// Counts for a resolved table
  Summary(&'a Summary),
  /// The selection for one record; `row` is zero-based
  Correspondence {
    /// Record index
    row:            usize,
    /// What was selected
    correspondence: &'a ResolvedCorrespondence,
  },
  /// One parsed pair and how the rules classified it
  Pair {
    /// The parsed pair
    pair:    &'a AuthorAffiliationPair,
    /// The rule outcome
    verdict: &'a Verdict,
    /// Whether this is the last pair listed
    last:    bool,
  },
}

/// Abstraction over how the CLI talks to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows a response.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interactive terminal on stdout/stderr.
pub struct Terminal {
  /// Answer every prompt with "yes" without asking
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      trace!("Accepting prompt by default: {message}");
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {}", style(PROMPT_PREFIX).cyan(), message))
        .default(false)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match content {
      ResponseContent::Success(message) =>
        writeln!(stdout, "{} {}", style(SUCCESS_PREFIX).green(), style(message).green())?,
      ResponseContent::Info(message) => writeln!(stdout, "{} {}", style(INFO_PREFIX).blue(), message)?,
      ResponseContent::Warning(message) =>
        writeln!(stdout, "{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow())?,
      ResponseContent::Error(error) => {
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(error).red());
      },
      ResponseContent::Summary(summary) => {
        writeln!(stdout, "{} {}", style(INFO_PREFIX).blue(), style("Summary").bold())?;
        writeln!(stdout, "   {ITEM_PREFIX} Records:    {}", summary.records)?;
        writeln!(stdout, "   {ITEM_PREFIX} Resolved:   {}", style(summary.resolved).green())?;
        writeln!(stdout, "   {LAST_ITEM_PREFIX} Unresolved: {}", style(summary.unresolved).yellow())?;
      },
      ResponseContent::Correspondence { row, correspondence } =>
        if correspondence.is_empty() {
          writeln!(stdout, "   {} Row {}: {}", ITEM_PREFIX, row + 1, style("no corresponding author").dim())?
        } else {
          writeln!(
            stdout,
            "   {} Row {}: {} {} {}",
            ITEM_PREFIX,
            row + 1,
            style(&correspondence.corresponding_author).bold(),
            ARROW,
            correspondence.corresponding_affiliation
          )?
        },
      ResponseContent::Pair { pair, verdict, last } => {
        let prefix = if last { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
        let verdict = if verdict.is_accepted() {
          style(verdict.to_string()).green()
        } else {
          style(verdict.to_string()).dim()
        };
        writeln!(
          stdout,
          "   {} {} ({}) {} {}",
          prefix,
          style(&pair.name).bold(),
          pair.affiliation,
          ARROW,
          verdict
        )?
      },
    }
    Ok(())
  }
}
