//! Module for resolving a CSV file into its `_corresponding_updated` counterpart.

use super::*;

/// Arguments that can be used for the [`Commands::Resolve`]
#[derive(Args, Clone)]
pub struct ResolveArgs {
  /// CSV file with an "Authors with affiliations" column
  pub input: PathBuf,

  /// Where to write the result (defaults to `<input>_corresponding_updated.<ext>`)
  #[arg(long, short)]
  pub output: Option<PathBuf>,

  /// Also show the selection for the first N records
  #[arg(long, value_name = "N")]
  pub preview: Option<usize>,
}

/// Function for the [`Commands::Resolve`] in the CLI.
pub fn resolve<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  resolve_args: &ResolveArgs,
) -> Result<()> {
  let ResolveArgs { input, output, preview } = resolve_args;
  let output = output.clone().unwrap_or_else(|| output_path(input, &config.output_suffix));

  interaction.reply(ResponseContent::Info(&format!("Processing {}", input.display())))?;
  let table = Table::read(input)?;
  let resolved = Resolver::new(config)?.resolve(&table)?;

  if let Some(limit) = preview {
    show_preview(interaction, &resolved.table, config, *limit)?;
  }
  interaction.reply(ResponseContent::Summary(&resolved.summary))?;

  if output.exists()
    && !interaction
      .confirm(&format!("{} already exists, do you want to overwrite it?", output.display()))?
  {
    interaction.reply(ResponseContent::Info("Nothing written, pass --output to choose another file"))?;
    return Ok(());
  }

  resolved.table.write(&output)?;
  interaction.reply(ResponseContent::Success(&format!("Wrote {}", output.display())))
}
