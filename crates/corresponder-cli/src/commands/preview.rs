//! Module for previewing the resolution of a CSV file.

use super::*;

/// Default number of records shown by [`Commands::Preview`]
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Arguments that can be used for the [`Commands::Preview`]
#[derive(Args, Clone)]
pub struct PreviewArgs {
  /// CSV file with an "Authors with affiliations" column
  pub input: PathBuf,

  /// Number of records to show
  #[arg(long, short, default_value_t = DEFAULT_PREVIEW_LIMIT)]
  pub limit: usize,
}

/// Function for the [`Commands::Preview`] in the CLI.
pub fn preview<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  preview_args: &PreviewArgs,
) -> Result<()> {
  let table = Table::read(&preview_args.input)?;
  let resolved = Resolver::new(config)?.resolve(&table)?;

  show_preview(interaction, &resolved.table, config, preview_args.limit)?;
  interaction.reply(ResponseContent::Summary(&resolved.summary))
}

/// Shows the selected author of the first `limit` records of a resolved table.
pub fn show_preview<I: UserInteraction>(
  interaction: &I,
  table: &Table,
  config: &Config,
  limit: usize,
) -> Result<()> {
  if table.is_empty() {
    return interaction.reply(ResponseContent::Warning("The table has no records"));
  }

  let shown = limit.min(table.len());
  interaction.reply(ResponseContent::Info(&format!(
    "Showing {shown} of {} records",
    table.len()
  )))?;
  for row in 0..shown {
    let correspondence = ResolvedCorrespondence {
      corresponding_author:      table
        .value(row, &config.columns.author)
        .unwrap_or_default()
        .to_string(),
      corresponding_affiliation: table
        .value(row, &config.columns.affiliation)
        .unwrap_or_default()
        .to_string(),
    };
    interaction.reply(ResponseContent::Correspondence { row, correspondence: &correspondence })?;
  }
  Ok(())
}
