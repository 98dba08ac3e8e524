//! Module for explaining the resolution of a single value.

use super::*;

/// Arguments that can be used for the [`Commands::Check`]
#[derive(Args, Clone)]
pub struct CheckArgs {
  /// A semicolon-delimited list of "name, affiliation" pairs
  pub authors: String,
}

/// Function for the [`Commands::Check`] in the CLI.
pub fn check<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  check_args: &CheckArgs,
) -> Result<()> {
  let resolver = Resolver::new(config)?;
  let classified: Vec<_> = resolver.classify_field(&check_args.authors).collect();

  if classified.is_empty() {
    interaction.reply(ResponseContent::Warning(
      "No \"name, affiliation\" pairs found; every entry needs a comma after the name",
    ))?;
  }
  for (index, (pair, verdict)) in classified.iter().enumerate() {
    interaction.reply(ResponseContent::Pair {
      pair,
      verdict,
      last: index + 1 == classified.len(),
    })?;
  }

  let correspondence = resolver.resolve_field(Some(check_args.authors.as_str()));
  if correspondence.is_empty() {
    interaction.reply(ResponseContent::Warning("No corresponding author"))
  } else {
    interaction.reply(ResponseContent::Success(&format!(
      "Corresponding author: {} ({})",
      correspondence.corresponding_author, correspondence.corresponding_affiliation
    )))
  }
}
